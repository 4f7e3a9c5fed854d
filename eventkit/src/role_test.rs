use super::*;

#[test]
fn parse_known_roles() {
    assert_eq!(Role::parse("event-admin"), Role::EventAdmin);
    assert_eq!(Role::parse("exhibitor"), Role::Exhibitor);
    assert_eq!(Role::parse("visitor"), Role::Visitor);
}

#[test]
fn parse_is_case_insensitive_and_trims() {
    assert_eq!(Role::parse("  Event-Admin "), Role::EventAdmin);
    assert_eq!(Role::parse("VISITOR"), Role::Visitor);
}

#[test]
fn parse_unknown_keeps_raw_value() {
    assert_eq!(Role::parse(" sponsor "), Role::Other("sponsor".to_owned()));
}

#[test]
fn default_path_table() {
    assert_eq!(Role::Visitor.default_path("expo"), "/expo/event-admin/visitors");
    assert_eq!(Role::Exhibitor.default_path("expo"), "/expo/event-admin/exhibitors");
    assert_eq!(Role::EventAdmin.default_path("expo"), "/expo/event-admin/dashboard");
    assert_eq!(Role::Other("sponsor".to_owned()).default_path("expo"), "/expo");
}

#[test]
fn serde_uses_wire_strings() {
    assert_eq!(serde_json::to_string(&Role::EventAdmin).unwrap(), "\"event-admin\"");
    let role: Role = serde_json::from_str("\"exhibitor\"").unwrap();
    assert_eq!(role, Role::Exhibitor);
    let other: Role = serde_json::from_str("\"staff\"").unwrap();
    assert_eq!(other.as_str(), "staff");
}

#[test]
fn display_matches_as_str() {
    assert_eq!(Role::Exhibitor.to_string(), "exhibitor");
}
