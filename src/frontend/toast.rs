use std::time::Duration;

use leptos::prelude::*;

const SUCCESS_TIMEOUT: Duration = Duration::from_millis(3000);
const ERROR_TIMEOUT: Duration = Duration::from_millis(5000);

/// Success and error notifications, cleared after a timeout.
#[derive(Clone, Copy)]
pub struct Toasts {
    pub success: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            success: RwSignal::new(None),
            error: RwSignal::new(None),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        show(self.success, message.into(), SUCCESS_TIMEOUT);
    }

    pub fn error(&self, message: impl Into<String>) {
        show(self.error, message.into(), ERROR_TIMEOUT);
    }

    pub fn dismiss(&self) {
        self.success.set(None);
        self.error.set(None);
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

fn show(slot: RwSignal<Option<String>>, message: String, timeout: Duration) {
    slot.set(Some(message.clone()));
    // a newer message keeps its own timer
    set_timeout(
        move || {
            if slot.with_untracked(|current| current.as_deref() == Some(message.as_str())) {
                slot.set(None);
            }
        },
        timeout,
    );
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts::new();
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}
