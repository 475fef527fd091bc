//! Users list page (paged, with ban action).

use leptos::prelude::*;
use records::User;

use super::entity_page::entity_page;

#[component]
pub fn UsersPage() -> impl IntoView {
    entity_page::<User>()
}
