use super::*;

#[test]
fn starts_empty() {
    let credentials = Credentials::new();
    assert!(!credentials.is_set());
    assert_eq!(credentials.get(), None);
}

#[test]
fn set_then_clear_round_trips() {
    let credentials = Credentials::new();
    credentials.set("tok123");
    assert_eq!(credentials.get().as_deref(), Some("tok123"));

    credentials.clear();
    assert!(!credentials.is_set());
}

#[test]
fn clones_share_the_slot() {
    let writer = Credentials::new();
    let reader = writer.clone();

    writer.set("tok123");
    assert_eq!(reader.get().as_deref(), Some("tok123"));

    writer.clear();
    assert_eq!(reader.get(), None);
}
