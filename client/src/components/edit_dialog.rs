//! Create/edit modal generated from the entity's form fields.

use leptos::prelude::*;
use records::Entity;

use crate::state::dialog::EditDialog;

pub fn edit_dialog<E: Entity>(
    dialog: RwSignal<EditDialog>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let inputs = E::form_fields()
        .iter()
        .map(|field| {
            let name = field.name;
            view! {
                <label class="dialog__label">
                    {field.label}
                    <input
                        class="dialog__input"
                        id={name}
                        name={name}
                        type={field.kind.input_type()}
                        prop:value=move || dialog.with(|d| d.values.get(name).to_owned())
                        on:input=move |ev| {
                            dialog.update(|d| d.set_value(name, event_target_value(&ev)));
                        }
                    />
                </label>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form
                class="dialog"
                on:click=move |ev| ev.stop_propagation()
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.run(());
                }
            >
                <h2>{move || dialog.with(|d| d.title(E::NOUN))}</h2>
                <input type="hidden" name="id" prop:value=move || dialog.with(|d| d.id_field.clone())/>
                {inputs}
                <Show when=move || dialog.with(|d| d.error.is_some())>
                    <p class="dialog__error">{move || dialog.with(|d| d.error.clone().unwrap_or_default())}</p>
                </Show>
                <div class="dialog__actions">
                    <button
                        class="btn"
                        type="button"
                        disabled=move || dialog.with(EditDialog::is_submitting)
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || dialog.with(EditDialog::is_submitting)
                    >
                        "Save"
                    </button>
                </div>
            </form>
        </div>
    }
}
