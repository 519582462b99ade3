//! Peaks Core - small business-logic units built for testing through their seams
//!
//! This crate provides:
//! - A deferred-action calculator that reports through an injected logger
//! - A login-dialog rule driven by an injected auth capability
//! - A background string producer with a one-shot completion callback
//! - Integer division and password validation helpers with explicit failure modes
//! - Test doubles plus a structured logging facility with an in-memory capture mode

pub mod async_string;
pub mod auth;
pub mod calculator;
pub mod division;
pub mod errors;
pub mod logging_facility;
pub mod numeric;
pub mod password;
pub mod testing;

// Re-export commonly used types
pub use async_string::{AsyncStringProducer, Completion};
pub use auth::{AuthManager, LoginDialog, SessionAuth};
pub use calculator::{Calculator, Logger, Operation, TracingLogger};
pub use division::divide;
pub use errors::{ExError, ExErrorKind, PeaksError, Result};
pub use password::PasswordPolicy;
