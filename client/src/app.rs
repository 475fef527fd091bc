//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{contacts::ContactsPage, users::UsersPage};
use crate::state::viewer::ViewerState;

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
/// Provides the viewer context, loads the signed-in user once, and routes
/// between the entity pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let viewer = RwSignal::new(ViewerState::default());
    provide_context(viewer);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_current_user(&crate::util::session::BrowserSession).await;
            if let Err(err) = &result {
                leptos::logging::warn!("current user lookup failed: {err}");
            }
            viewer.update(|v| v.finish(result));
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/webadmin.css"/>
        <Title text="Admin"/>

        <Router>
            <NavBar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=UsersPage/>
                    <Route path=StaticSegment("users") view=UsersPage/>
                    <Route path=StaticSegment("contacts") view=ContactsPage/>
                </Routes>
            </main>
        </Router>
    }
}
