use super::*;

fn user() -> UserProfile {
    UserProfile {
        id: "1".to_owned(),
        name: "Ana".to_owned(),
        email: "a@b.com".to_owned(),
        avatar: None,
    }
}

#[test]
fn default_starts_restoring_without_user() {
    let s = SessionState::default();
    assert!(s.restoring);
    assert!(!s.is_signed_in());
}

#[test]
fn finish_restore_with_user_signs_in_and_settles() {
    let mut s = SessionState::default();
    s.finish_restore(Some(user()));
    assert!(!s.restoring);
    assert_eq!(s.user, Some(user()));
}

#[test]
fn finish_restore_without_user_still_settles() {
    let mut s = SessionState::default();
    s.finish_restore(None);
    assert!(!s.restoring);
    assert!(!s.is_signed_in());
}

#[test]
fn set_user_signs_in() {
    let mut s = SessionState::default();
    s.finish_restore(None);
    s.set_user(user());
    assert!(s.is_signed_in());
}

#[test]
fn clear_is_idempotent() {
    let mut s = SessionState::default();
    s.finish_restore(Some(user()));

    s.clear();
    let once = s.clone();
    s.clear();

    assert_eq!(s, once);
    assert!(!s.is_signed_in());
}
