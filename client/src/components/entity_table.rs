//! Record table with per-row action buttons.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rows come from [`Listing::rows`]; each `<tr>` carries the record id in
//! `data-rowid`. Buttons report `(action, id)` through a callback so the
//! rendering never decides what an action does.

use leptos::prelude::*;
use records::{Entity, RecordId, RowAction};

use crate::state::listing::Listing;

/// Table over `listing`, with one button column per row action of `E`.
pub fn entity_table<E: Entity>(
    listing: RwSignal<Listing<E>>,
    on_action: Callback<(RowAction, RecordId)>,
) -> impl IntoView {
    let headers = E::columns()
        .iter()
        .map(|column| view! { <th class={column.align.class()}>{column.label}</th> })
        .collect::<Vec<_>>();
    let action_headers = E::row_actions()
        .iter()
        .map(|_| view! { <th></th> })
        .collect::<Vec<_>>();

    view! {
        <table class="table entity-table">
            <thead>
                <tr>
                    {headers}
                    {action_headers}
                </tr>
            </thead>
            <tbody>
                {move || {
                    listing
                        .with(Listing::rows)
                        .into_iter()
                        .map(|row| {
                            let id = row.id;
                            let cells = row
                                .cells
                                .into_iter()
                                .map(|cell| view! { <td class={cell.align.class()}>{cell.text}</td> })
                                .collect::<Vec<_>>();
                            let buttons = row
                                .actions
                                .iter()
                                .copied()
                                .map(|action| {
                                    view! {
                                        <td>
                                            <button
                                                class={action.class()}
                                                on:click=move |_| on_action.run((action, id))
                                            >
                                                {action.label()}
                                            </button>
                                        </td>
                                    }
                                })
                                .collect::<Vec<_>>();
                            view! {
                                <tr class="table-secondary" data-rowid={row.lookup}>
                                    {cells}
                                    {buttons}
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}
