use super::*;

#[test]
fn route_identifier_is_first_segment() {
    assert_eq!(route_identifier("/expo/event-admin/dashboard"), Some("expo"));
    assert_eq!(route_identifier("/expo"), Some("expo"));
}

#[test]
fn route_identifier_absent_at_root() {
    assert_eq!(route_identifier("/"), None);
    assert_eq!(route_identifier(""), None);
}
