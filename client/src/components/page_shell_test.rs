use super::*;
use eventkit::SessionUser;

fn restored_for(identifier: &str) -> Session {
    let mut session = Session::loading();
    let user = SessionUser { id: "u1".to_owned(), email: "a@example.com".to_owned(), role: Role::EventAdmin };
    session.restore(identifier, user);
    session
}

#[test]
fn admin_sees_every_page() {
    assert_eq!(visible_pages(&Role::EventAdmin), PageAccess::ALL.to_vec());
}

#[test]
fn exhibitor_and_visitor_see_only_their_page() {
    assert_eq!(visible_pages(&Role::Exhibitor), vec![PageAccess::Exhibitors]);
    assert_eq!(visible_pages(&Role::Visitor), vec![PageAccess::Visitors]);
}

#[test]
fn unknown_role_sees_nothing() {
    assert!(visible_pages(&Role::Other("sponsor".to_owned())).is_empty());
}

#[test]
fn labels_are_distinct() {
    let labels: std::collections::HashSet<_> = PageAccess::ALL.iter().map(|p| page_label(*p)).collect();
    assert_eq!(labels.len(), PageAccess::ALL.len());
}

#[test]
fn foreign_event_reports_mismatched_tenant() {
    let session = restored_for("expo-a");
    assert_eq!(foreign_event(&session, "expo-b"), Some("expo-a"));
    assert_eq!(foreign_event(&session, "expo-a"), None);
    assert_eq!(foreign_event(&session, ""), None);
}

#[test]
fn login_without_event_has_no_foreign_event() {
    assert_eq!(foreign_event(&Session::new(), "expo-a"), None);
}
