mod account;
mod operation;
mod statement;

pub use self::{
    account::Account,
    operation::{replay, Operation, OperationError, OperationKind, OperationResult, Replay},
    statement::{Statement, StatementError},
};
