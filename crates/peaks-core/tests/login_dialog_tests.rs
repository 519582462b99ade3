use peaks_core::testing::StubAuthManager;
use peaks_core::{AuthManager, LoginDialog, SessionAuth};

mod given_a_logged_out_user {
    use super::*;

    #[test]
    fn dialog_is_shown() {
        let auth = StubAuthManager::new(false);
        assert!(LoginDialog::new(&auth).should_show_login_dialog());
    }

    #[test]
    fn dialog_hides_once_the_user_logs_in() {
        let auth = StubAuthManager::new(false);
        let dialog = LoginDialog::new(&auth);

        auth.set_logged_in(true);
        assert!(!dialog.should_show_login_dialog());
    }
}

mod given_a_logged_in_user {
    use super::*;

    #[test]
    fn dialog_is_hidden() {
        let auth = StubAuthManager::new(true);
        assert!(!LoginDialog::new(&auth).should_show_login_dialog());
    }

    #[test]
    fn dialog_returns_after_logout() {
        let auth = StubAuthManager::new(true);
        let dialog = LoginDialog::new(&auth);

        auth.set_logged_in(false);
        assert!(dialog.should_show_login_dialog());
    }
}

#[test]
fn test_dialog_accepts_any_auth_capability() {
    let stub = StubAuthManager::new(true);
    let session = SessionAuth::new();
    let capabilities: [&dyn AuthManager; 2] = [&stub, &session];

    let shown: Vec<bool> = capabilities
        .iter()
        .map(|auth| LoginDialog::new(*auth).should_show_login_dialog())
        .collect();
    assert_eq!(shown, vec![false, true]);
}

#[test]
fn test_querying_does_not_change_auth_state() {
    let auth = StubAuthManager::new(false);
    let dialog = LoginDialog::new(&auth);
    for _ in 0..3 {
        assert!(dialog.should_show_login_dialog());
    }
    assert!(!auth.is_logged_in());
}
