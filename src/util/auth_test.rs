use super::*;
use crate::net::types::UserProfile;

#[test]
fn should_redirect_unauth_when_settled_and_user_missing() {
    let state = SessionState { user: None, restoring: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_restoring() {
    let state = SessionState { user: None, restoring: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = SessionState {
        user: Some(UserProfile {
            id: "1".to_owned(),
            name: "Ana".to_owned(),
            email: "a@b.com".to_owned(),
            avatar: None,
        }),
        restoring: false,
    };
    assert!(!should_redirect_unauth(&state));
}
