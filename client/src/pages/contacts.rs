//! Contacts list page.

use leptos::prelude::*;
use records::Contact;

use super::entity_page::entity_page;

#[component]
pub fn ContactsPage() -> impl IntoView {
    entity_page::<Contact>()
}
