//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_restorer::AuthRestorer;
use crate::pages::{
    dashboard::DashboardPage, exhibitors::ExhibitorsPage, field_mapping::FieldMappingPage, login::LoginPage,
    theme_settings::ThemeSettingsPage, visitors::VisitorsPage,
};
use crate::state::auth;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context (starting in the loading state) and mounts
/// the `AuthRestorer` ahead of the routed pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    auth::provide_session();

    view! {
        <Title text="EventDesk"/>

        <Router>
            <AuthRestorer/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=ParamSegment("identifier") view=LoginPage/>
                <Route
                    path=(ParamSegment("identifier"), StaticSegment("event-admin"), StaticSegment("dashboard"))
                    view=DashboardPage
                />
                <Route
                    path=(ParamSegment("identifier"), StaticSegment("event-admin"), StaticSegment("exhibitors"))
                    view=ExhibitorsPage
                />
                <Route
                    path=(ParamSegment("identifier"), StaticSegment("event-admin"), StaticSegment("visitors"))
                    view=VisitorsPage
                />
                <Route
                    path=(ParamSegment("identifier"), StaticSegment("event-admin"), StaticSegment("theme"))
                    view=ThemeSettingsPage
                />
                <Route
                    path=(ParamSegment("identifier"), StaticSegment("event-admin"), StaticSegment("field-mapping"))
                    view=FieldMappingPage
                />
            </Routes>
        </Router>
    }
}
