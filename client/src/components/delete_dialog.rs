//! Delete confirmation modal.

use leptos::prelude::*;

use crate::state::dialog::DeleteDialog;

#[component]
pub fn DeleteDialogView(
    noun: &'static str,
    dialog: RwSignal<DeleteDialog>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let prompt = move || {
        dialog.with(|d| {
            d.id
                .map(|id| format!("Delete {noun} #{id}? This cannot be undone."))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{format!("Delete {noun}")}</h2>
                <p class="dialog__danger">{prompt}</p>
                <Show when=move || dialog.with(|d| d.error.is_some())>
                    <p class="dialog__error">{move || dialog.with(|d| d.error.clone().unwrap_or_default())}</p>
                </Show>
                <div class="dialog__actions">
                    <button
                        class="btn"
                        disabled=move || dialog.with(DeleteDialog::is_submitting)
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                    <button
                        class="btn btn-danger"
                        disabled=move || dialog.with(DeleteDialog::is_submitting)
                        on:click=move |_| on_confirm.run(())
                    >
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
