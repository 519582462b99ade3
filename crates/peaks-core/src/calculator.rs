//! Deferred-action calculator
//!
//! A [`Calculator`] accumulates [`Operation`]s and only applies them when
//! [`Calculator::execute`] is called. Every run reports its progress through
//! the injected [`Logger`] using a fixed message protocol:
//!
//! ```text
//! Start calc.
//! Add 1.
//! Add 2.
//! Total is 3.
//! Finish calc.
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use peaks_core_types::schema::EVENT_EMIT;

use crate::errors::{PeaksError, Result};
use crate::{log_op_end, log_op_start};

pub const START_MESSAGE: &str = "Start calc.";
pub const FINISH_MESSAGE: &str = "Finish calc.";

const OP_EXECUTE: &str = "calc_execute";
const OP_EMIT: &str = "calc";

/// A queued arithmetic step
///
/// Matching on this enum is exhaustive at execution time, so a new variant
/// will not compile until `execute` knows how to apply and log it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add(i64),
}

impl Operation {
    fn apply(self, total: i64) -> i64 {
        match self {
            Operation::Add(amount) => total.wrapping_add(amount),
        }
    }
}

/// Renders the log line for this step, e.g. `Add 5.`
impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add(amount) => write!(f, "Add {}.", amount),
        }
    }
}

/// Parses `add:N` (case-insensitive) or the shorthand `+N`
impl FromStr for Operation {
    type Err = PeaksError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let amount = s
            .strip_prefix('+')
            .or_else(|| {
                s.split_once(':')
                    .filter(|(verb, _)| verb.eq_ignore_ascii_case("add"))
                    .map(|(_, amount)| amount)
            })
            .ok_or_else(|| PeaksError::InvalidInput {
                reason: format!("unknown operation: {}", s),
            })?;

        amount
            .trim()
            .parse::<i64>()
            .map(Operation::Add)
            .map_err(|e| PeaksError::InvalidInput {
                reason: format!("bad amount in {}: {}", s, e),
            })
    }
}

/// Sink for the calculator's progress messages
#[cfg_attr(test, mockall::automock)]
pub trait Logger {
    /// Record one message, verbatim
    fn emit(&mut self, message: &str);
}

impl<L: Logger + ?Sized> Logger for &mut L {
    fn emit(&mut self, message: &str) {
        (**self).emit(message);
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn emit(&mut self, message: &str) {
        (**self).emit(message);
    }
}

/// Production logger: forwards each message as a structured `tracing` event
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn emit(&mut self, message: &str) {
        tracing::info!(
            component = module_path!(),
            op = OP_EMIT,
            event = EVENT_EMIT,
            message = message,
        );
    }
}

/// Command queue that applies its operations on demand
///
/// Not synchronized; callers sharing one instance across threads must
/// serialize access themselves.
#[derive(Debug)]
pub struct Calculator<L> {
    operations: Vec<Operation>,
    total: i64,
    logger: L,
}

impl<L: Logger> Calculator<L> {
    /// Create an empty calculator reporting to `logger`
    pub fn new(logger: L) -> Self {
        Self {
            operations: Vec::new(),
            total: 0,
            logger,
        }
    }

    /// Queue an operation; nothing is applied until [`Self::execute`]
    pub fn enqueue(&mut self, operation: Operation) {
        self.operations.push(operation);
    }

    /// Queued operations, in execution order
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Apply every queued operation in order and return the running total
    ///
    /// The queue is kept and the total is not reset, so a second call
    /// applies the same operations again on top of the previous result.
    pub fn execute(&mut self) -> i64 {
        let started = Instant::now();
        log_op_start!(OP_EXECUTE, op_count = self.operations.len());

        self.logger.emit(START_MESSAGE);
        for operation in &self.operations {
            self.logger.emit(&operation.to_string());
            self.total = operation.apply(self.total);
        }
        self.logger.emit(&format!("Total is {}.", self.total));
        self.logger.emit(FINISH_MESSAGE);

        log_op_end!(
            OP_EXECUTE,
            duration_ms = started.elapsed().as_millis() as u64,
            total = self.total
        );
        self.total
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }

    /// Tear down the calculator and hand the logger back
    pub fn into_logger(self) -> L {
        self.logger
    }
}
