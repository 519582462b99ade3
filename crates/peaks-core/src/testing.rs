//! Hand-written test doubles and assertion helpers
//!
//! Shipped with the library so downstream tests can verify their own use of
//! the calculator and the login dialog without pulling in a mocking crate.

use std::cell::Cell;

use crate::auth::AuthManager;
use crate::calculator::Logger;
use crate::numeric::is_only_numeric;

/// Logger that remembers everything it was told
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingLogger {
    messages: Vec<String>,
    invocation_count: usize,
    invoked: bool,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages in the order they were emitted
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn invocation_count(&self) -> usize {
        self.invocation_count
    }

    pub fn was_invoked(&self) -> bool {
        self.invoked
    }
}

impl Logger for RecordingLogger {
    fn emit(&mut self, message: &str) {
        self.messages.push(message.to_string());
        self.invocation_count += 1;
        self.invoked = true;
    }
}

/// Auth stub whose login state the test flips directly
///
/// Uses a `Cell` so the state can change while a `LoginDialog` holds a
/// shared borrow of the stub.
#[derive(Debug, Default)]
pub struct StubAuthManager {
    logged_in: Cell<bool>,
}

impl StubAuthManager {
    pub fn new(logged_in: bool) -> Self {
        Self {
            logged_in: Cell::new(logged_in),
        }
    }

    pub fn set_logged_in(&self, logged_in: bool) {
        self.logged_in.set(logged_in);
    }
}

impl AuthManager for StubAuthManager {
    fn is_logged_in(&self) -> bool {
        self.logged_in.get()
    }
}

/// Assert that `s` consists of decimal digits only
///
/// # Panics
///
/// Panics with the offending string quoted; the reported location is the
/// caller's line.
#[track_caller]
pub fn assert_only_numeric(s: &str) {
    assert!(is_only_numeric(s), "\"{}\" is not only numeric.", s);
}
