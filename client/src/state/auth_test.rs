use super::*;
use eventkit::{Role, SessionUser};

fn user(role: Role) -> SessionUser {
    SessionUser { id: "u1".to_owned(), email: "user@example.com".to_owned(), role }
}

#[test]
fn landing_path_waits_for_restore() {
    assert_eq!(landing_path(&Session::loading(), "expo"), None);
}

#[test]
fn landing_path_none_when_signed_out() {
    let mut session = Session::loading();
    session.finish_loading();
    assert_eq!(landing_path(&session, "expo"), None);
}

#[test]
fn landing_path_follows_role_default() {
    let mut session = Session::new();
    session.login(user(Role::Exhibitor));
    assert_eq!(landing_path(&session, "expo").as_deref(), Some("/expo/event-admin/exhibitors"));

    session.login(user(Role::EventAdmin));
    assert_eq!(landing_path(&session, "expo").as_deref(), Some("/expo/event-admin/dashboard"));
}

#[test]
fn landing_path_never_targets_login_page() {
    let mut session = Session::new();
    session.login(user(Role::Other("sponsor".to_owned())));
    assert_eq!(landing_path(&session, "expo"), None);
}
