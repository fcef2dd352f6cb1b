//! Savings account compounding interest monthly at a fixed annual rate, plus the
//! operation scripts and statements used to drive and present it.

#[macro_use]
extern crate log;

mod features;

pub use features::{
    replay, Account, Operation, OperationError, OperationKind, OperationResult, Replay, Statement,
    StatementError,
};
