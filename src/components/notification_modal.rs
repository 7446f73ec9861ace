//! Notification Modal Component
//!
//! Shows the store's current notification until dismissed. Success messages
//! also close themselves after a short delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use inventory_core::{Level, Notification};

use crate::store::{store_dismiss, store_dismiss_notice, use_app_store, AppStateStoreFields};

const SUCCESS_DISMISS_MS: u32 = 3_000;

#[component]
pub fn NotificationModal() -> impl IntoView {
    let store = use_app_store();

    // Auto-dismiss successes, unless a newer notification replaced this one
    Effect::new(move |_| {
        let Some(shown) = store.notification().get() else { return };
        if shown.level != Level::Success {
            return;
        }
        let notice_id = store.notice_id().get_untracked();
        spawn_local(async move {
            TimeoutFuture::new(SUCCESS_DISMISS_MS).await;
            store_dismiss_notice(&store, notice_id);
        });
    });

    move || {
        store.notification().get().map(|Notification { level, title, text }| {
            let class = match level {
                Level::Success => "modal success",
                Level::Error => "modal error",
            };
            view! {
                <div class="modal-backdrop">
                    <div class=class role="alert">
                        <h3>{title}</h3>
                        {text.map(|text| view! { <p>{text}</p> })}
                        <div class="modal-actions">
                            <button class="btn btn-primary" on:click=move |_| store_dismiss(&store)>"OK"</button>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
