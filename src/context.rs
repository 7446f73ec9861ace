//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use async_trait::async_trait;
use futures::channel::oneshot;
use leptos::prelude::*;

use inventory_core::{Confirm, ConfirmPrompt, HttpInventoryApi};

use crate::config::AppConfig;
use crate::store::{AppStore, InventoryHandle};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    pub confirm: ConfirmService,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(store: AppStore, config: AppConfig) -> Self {
        Self {
            store,
            confirm: ConfirmService::new(),
            config: StoredValue::new(config),
        }
    }

    /// Client for the configured backend
    pub fn api(&self) -> HttpInventoryApi {
        HttpInventoryApi::new(self.config.with_value(|config| config.api.clone()))
    }

    /// The store as seen by the core flows
    pub fn inventory(&self) -> InventoryHandle {
        InventoryHandle(self.store)
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

/// Yes/no dialog driven as a future
///
/// `confirm` publishes the prompt and waits; the dialog component calls
/// `answer`. A newer prompt drops the older responder, which reads as "no".
#[derive(Clone, Copy)]
pub struct ConfirmService {
    pub prompt: RwSignal<Option<ConfirmPrompt>>,
    responder: StoredValue<Option<oneshot::Sender<bool>>>,
}

impl ConfirmService {
    fn new() -> Self {
        Self {
            prompt: RwSignal::new(None),
            responder: StoredValue::new(None),
        }
    }

    pub fn answer(&self, yes: bool) {
        self.prompt.set(None);
        if let Some(responder) = self.responder.try_update_value(|r| r.take()).flatten() {
            let _ = responder.send(yes);
        }
    }
}

#[async_trait(?Send)]
impl Confirm for ConfirmService {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        let (tx, rx) = oneshot::channel();
        self.responder.set_value(Some(tx));
        self.prompt.set(Some(prompt.clone()));
        rx.await.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use futures::poll;

    use super::*;

    fn setup() -> (Owner, ConfirmService, ConfirmPrompt) {
        let owner = Owner::new();
        owner.set();
        (owner, ConfirmService::new(), ConfirmPrompt::delete())
    }

    #[test]
    fn test_answer_resolves_and_clears_prompt() {
        let (_owner, confirm, prompt) = setup();
        block_on(async {
            let mut pending = confirm.confirm(&prompt);
            assert!(poll!(&mut pending).is_pending());
            assert_eq!(confirm.prompt.get_untracked(), Some(prompt.clone()));

            confirm.answer(true);
            assert_eq!(confirm.prompt.get_untracked(), None);
            assert!(pending.await);
        });
    }

    #[test]
    fn test_no_answer_resolves_false() {
        let (_owner, confirm, prompt) = setup();
        block_on(async {
            let mut pending = confirm.confirm(&prompt);
            assert!(poll!(&mut pending).is_pending());
            confirm.answer(false);
            assert!(!pending.await);
        });
    }

    #[test]
    fn test_newer_prompt_cancels_older() {
        let (_owner, confirm, prompt) = setup();
        block_on(async {
            let mut first = confirm.confirm(&prompt);
            assert!(poll!(&mut first).is_pending());
            let mut second = confirm.confirm(&prompt);
            assert!(poll!(&mut second).is_pending());

            assert!(!first.await);
            confirm.answer(true);
            assert!(second.await);
            assert_eq!(confirm.prompt.get_untracked(), None);
        });
    }
}
