use super::*;
use crate::session::SessionUser;

fn signed_in(role: Role) -> Session {
    let mut session = Session::new();
    session.login(SessionUser { id: "u1".to_owned(), email: "u1@example.com".to_owned(), role });
    session
}

fn all_roles() -> Vec<Role> {
    vec![Role::EventAdmin, Role::Exhibitor, Role::Visitor, Role::Other("sponsor".to_owned())]
}

#[test]
fn loading_session_shows_spinner() {
    let session = Session::loading();
    assert_eq!(decide(&session, &[Role::EventAdmin], "expo"), GuardOutcome::Loading);
}

#[test]
fn unauthenticated_redirects_to_tenant_login() {
    let session = Session::new();
    assert_eq!(decide(&session, &[Role::EventAdmin], "expo"), GuardOutcome::Redirect("/expo".to_owned()));
}

#[test]
fn logged_out_after_login_redirects_to_login() {
    let mut session = signed_in(Role::EventAdmin);
    session.logout();
    assert_eq!(decide(&session, &[Role::EventAdmin], "expo"), GuardOutcome::Redirect("/expo".to_owned()));
}

#[test]
fn allowed_role_renders_children() {
    let session = signed_in(Role::Exhibitor);
    assert_eq!(decide(&session, &[Role::EventAdmin, Role::Exhibitor], "expo"), GuardOutcome::Render);
}

#[test]
fn wrong_role_redirects_to_role_default() {
    let cases = [
        (Role::Visitor, "/expo/event-admin/visitors"),
        (Role::Exhibitor, "/expo/event-admin/exhibitors"),
        (Role::Other("sponsor".to_owned()), "/expo"),
    ];
    for (role, expected) in cases {
        let session = signed_in(role.clone());
        assert_eq!(
            decide(&session, &[Role::EventAdmin], "expo"),
            GuardOutcome::Redirect(expected.to_owned()),
            "role {role}"
        );
    }
}

#[test]
fn event_admin_on_exhibitor_only_page_goes_to_dashboard() {
    let session = signed_in(Role::EventAdmin);
    assert_eq!(
        decide(&session, &[Role::Exhibitor], "expo"),
        GuardOutcome::Redirect("/expo/event-admin/dashboard".to_owned())
    );
}

#[test]
fn empty_allow_list_redirects_everyone() {
    for role in all_roles() {
        let session = signed_in(role.clone());
        assert_eq!(decide(&session, &[], "expo"), GuardOutcome::Redirect(role.default_path("expo")));
    }
}

#[test]
fn unknown_role_allowed_when_listed() {
    let sponsor = Role::Other("sponsor".to_owned());
    let session = signed_in(sponsor.clone());
    assert_eq!(decide(&session, &[sponsor], "expo"), GuardOutcome::Render);
}

#[test]
fn page_paths_are_under_event_admin() {
    assert_eq!(PageAccess::Dashboard.path("expo"), "/expo/event-admin/dashboard");
    assert_eq!(PageAccess::FieldMapping.path("expo"), "/expo/event-admin/field-mapping");
    assert_eq!(PageAccess::ThemeSettings.path("expo"), "/expo/event-admin/theme");
}

#[test]
fn known_role_defaults_land_on_pages_admitting_that_role() {
    for role in [Role::EventAdmin, Role::Exhibitor, Role::Visitor] {
        let target = role.default_path("expo");
        let landing = PageAccess::ALL
            .iter()
            .find(|p| p.path("expo") == target)
            .expect("every known role lands on a guarded page");
        assert!(landing.allowed_roles().contains(&role), "{role} lands on {target} but is not admitted");
    }
}

#[test]
fn guarded_pages_never_redirect_to_themselves() {
    for page in PageAccess::ALL {
        let origin = page.path("expo");
        for role in all_roles() {
            let session = signed_in(role.clone());
            if let GuardOutcome::Redirect(target) = decide(&session, page.allowed_roles(), "expo") {
                assert_ne!(target, origin, "{role} on {origin} redirected to itself");
            }
        }
    }
}
