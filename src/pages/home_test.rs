use super::*;

#[test]
fn default_group_picks_the_first_entry() {
    let groups = vec!["back".to_owned(), "biceps".to_owned()];
    assert_eq!(default_group(&groups), Some("back".to_owned()));
}

#[test]
fn default_group_is_none_for_empty_list() {
    assert_eq!(default_group(&[]), None);
}
