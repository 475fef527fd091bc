//! Generic list + CRUD page, instantiated once per entity type.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount (and whenever the list query changes) the page loads the
//! collection. Row actions open the edit or delete dialog, or ban a user.
//! Every network call runs in `spawn_local` and writes its result back
//! through the pure state transitions in `state::listing` and
//! `state::dialog`.
//!
//! ERROR HANDLING
//! ==============
//! Failed saves, deletes and bans raise a blocking alert and leave the
//! dialog open with the message. A failed list load only logs and shows an
//! empty table.

use leptos::prelude::*;
use records::{Entity, ListQuery, RecordId, RowAction};

use crate::components::delete_dialog::DeleteDialogView;
use crate::components::edit_dialog::edit_dialog;
use crate::components::entity_table::entity_table;
use crate::state::dialog::{DeleteDialog, EditDialog};
#[cfg(feature = "hydrate")]
use crate::state::listing::load_failure_message;
use crate::state::listing::Listing;
#[cfg(feature = "hydrate")]
use crate::util::{alert::show_alert, session::BrowserSession};

pub fn entity_page<E: Entity>() -> impl IntoView {
    let listing = RwSignal::new(Listing::<E>::new());
    let query = RwSignal::new(ListQuery::default());
    let edit = RwSignal::new(EditDialog::default());
    let delete = RwSignal::new(DeleteDialog::default());

    Effect::new(move || {
        let q = query.get();
        load(listing, q);
    });

    let on_new = move |_| edit.update(|d| d.open_create(E::form_fields()));

    let on_action = Callback::new(move |(action, id): (RowAction, RecordId)| match action {
        RowAction::Edit => open_edit::<E>(edit, id),
        RowAction::Delete => delete.update(|d| d.open(id)),
        RowAction::Ban => ban(listing, id),
    });
    let on_submit = Callback::new(move |()| submit(listing, edit));
    let on_edit_cancel = Callback::new(move |()| edit.update(EditDialog::cancel));
    let on_confirm = Callback::new(move |()| confirm_delete(listing, delete));
    let on_delete_cancel = Callback::new(move |()| delete.update(DeleteDialog::cancel));

    let pager = E::PAGED.then(|| {
        let page_full = move || listing.with(Listing::len) >= usize::from(query.with(ListQuery::limit));
        view! {
            <div class="pager">
                <button
                    class="btn"
                    disabled=move || !query.with(ListQuery::has_previous)
                    on:click=move |_| query.update(|q| *q = q.previous_page())
                >
                    "Previous"
                </button>
                <span class="pager__range">
                    {move || query.with(|q| format!("from {}", q.offset() + 1))}
                </span>
                <button
                    class="btn"
                    disabled=move || !page_full()
                    on:click=move |_| query.update(|q| *q = q.next_page())
                >
                    "Next"
                </button>
            </div>
        }
    });

    view! {
        <section class="entity-page">
            <header class="entity-page__header">
                <h1>{E::TITLE}</h1>
                <button class="btn btn--primary" on:click=on_new>
                    {format!("New {}", E::NOUN)}
                </button>
            </header>
            <Show when=move || listing.with(|l| l.loading)>
                <p class="entity-page__loading">"Loading..."</p>
            </Show>
            {entity_table::<E>(listing, on_action)}
            {pager}
            <Show when=move || edit.with(EditDialog::is_open)>
                {edit_dialog::<E>(edit, on_submit, on_edit_cancel)}
            </Show>
            <Show when=move || delete.with(DeleteDialog::is_open)>
                <DeleteDialogView
                    noun={E::NOUN}
                    dialog=delete
                    on_confirm=on_confirm
                    on_cancel=on_delete_cancel
                />
            </Show>
        </section>
    }
}

/// Reload the table for `query`, replacing whatever it showed.
fn load<E: Entity>(listing: RwSignal<Listing<E>>, query: ListQuery) {
    let Some(seq) = listing.try_update(Listing::begin_load) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_records::<E>(&BrowserSession, &query).await;
            if let Some(Some(err)) = listing.try_update(|l| l.finish_load(seq, result)) {
                leptos::logging::warn!("{}", load_failure_message(E::NOUN, &err));
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (seq, query);
    }
}

/// Fetch the record and open the edit dialog prefilled with it.
fn open_edit<E: Entity>(edit: RwSignal<EditDialog>, id: RecordId) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_record::<E>(&BrowserSession, id).await {
                Ok(record) => edit.update(|d| d.open_edit(id, record.form_values())),
                Err(err) => show_alert(&err.to_string()),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (edit, id);
    }
}

fn submit<E: Entity>(listing: RwSignal<Listing<E>>, edit: RwSignal<EditDialog>) {
    let Some(target) = edit.try_update(EditDialog::begin_submit).flatten() else {
        return;
    };
    let values = edit.with_untracked(|d| d.values.clone());
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::save_record::<E>(&BrowserSession, target, &values).await;
            let Some(applied) = listing.try_update(|l| l.apply_saved(result)) else {
                return;
            };
            edit.update(|d| {
                d.finish_submit(&applied);
            });
            if let Err(err) = applied {
                show_alert(&err.to_string());
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (listing, target, values);
    }
}

fn confirm_delete<E: Entity>(listing: RwSignal<Listing<E>>, delete: RwSignal<DeleteDialog>) {
    let Some(id) = delete.try_update(DeleteDialog::begin_confirm).flatten() else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::delete_record::<E>(&BrowserSession, id).await;
            let Some(applied) = listing.try_update(|l| l.apply_deleted(id, result)) else {
                return;
            };
            delete.update(|d| {
                d.finish(&applied);
            });
            if let Err(err) = applied {
                show_alert(&err.to_string());
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (listing, id);
    }
}

/// Ban the record's user and flip its row to banned.
fn ban<E: Entity>(listing: RwSignal<Listing<E>>, id: RecordId) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::ban_user(&BrowserSession, id).await;
            let Some(applied) = listing.try_update(|l| l.apply_banned(id, result)) else {
                return;
            };
            if let Err(err) = applied {
                show_alert(&err.to_string());
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (listing, id);
    }
}
