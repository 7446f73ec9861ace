//! Confirm Dialog Component
//!
//! Modal for the prompt currently awaited by [`ConfirmService`].
//!
//! [`ConfirmService`]: crate::context::ConfirmService

use leptos::prelude::*;

use crate::context::use_app_context;

/// Yes/no modal; renders nothing while no prompt is pending
#[component]
pub fn ConfirmDialog() -> impl IntoView {
    let confirm = use_app_context().confirm;

    move || {
        confirm.prompt.get().map(|prompt| {
            view! {
                <div class="modal-backdrop">
                    <div class="modal warning" role="alertdialog">
                        <h3>{prompt.title}</h3>
                        <p>{prompt.text}</p>
                        <div class="modal-actions">
                            <button class="btn btn-secondary" on:click=move |_| confirm.answer(false)>
                                {prompt.cancel_label}
                            </button>
                            <button class="btn btn-danger" on:click=move |_| confirm.answer(true)>
                                {prompt.confirm_label}
                            </button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
