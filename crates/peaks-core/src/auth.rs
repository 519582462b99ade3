//! Login state and the dialog rule derived from it

use std::rc::Rc;
use std::sync::Arc;

/// Read-only view of the current login state
#[cfg_attr(test, mockall::automock)]
pub trait AuthManager {
    fn is_logged_in(&self) -> bool;
}

impl<A: AuthManager + ?Sized> AuthManager for &A {
    fn is_logged_in(&self) -> bool {
        (**self).is_logged_in()
    }
}

impl<A: AuthManager + ?Sized> AuthManager for Rc<A> {
    fn is_logged_in(&self) -> bool {
        (**self).is_logged_in()
    }
}

impl<A: AuthManager + ?Sized> AuthManager for Arc<A> {
    fn is_logged_in(&self) -> bool {
        (**self).is_logged_in()
    }
}

/// Production auth: logged in while a user session is held
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionAuth {
    user: Option<String>,
}

impl SessionAuth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&mut self, user: impl Into<String>) {
        let user = user.into();
        tracing::debug!(op = "sign_in", user = %user);
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        tracing::debug!(op = "sign_out");
        self.user = None;
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }
}

impl AuthManager for SessionAuth {
    fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}

/// Decides whether the login prompt should be shown
///
/// Holds a borrow of the auth capability and asks it on every query, so a
/// change in login state is visible on the next call.
#[derive(Debug)]
pub struct LoginDialog<'a, A: ?Sized> {
    auth: &'a A,
}

impl<'a, A: AuthManager + ?Sized> LoginDialog<'a, A> {
    pub fn new(auth: &'a A) -> Self {
        Self { auth }
    }

    /// `true` when nobody is logged in
    pub fn should_show_login_dialog(&self) -> bool {
        !self.auth.is_logged_in()
    }
}
