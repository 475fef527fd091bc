//! Top navigation: entity pages and the signed-in user.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::viewer::ViewerState;

#[component]
pub fn NavBar() -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();

    view! {
        <header class="toolbar">
            <span class="toolbar__title">"Admin"</span>
            <span class="toolbar__divider" aria-hidden="true"></span>
            <A href="/users">"Users"</A>
            <A href="/contacts">"Contacts"</A>
            <span class="toolbar__spacer"></span>
            <span class="toolbar__self">{move || viewer.with(ViewerState::label)}</span>
        </header>
        <Show when=move || viewer.with(ViewerState::lacks_admin_role)>
            <p class="notice">"The admin panel requires the admin or moderator role."</p>
        </Show>
    }
}
