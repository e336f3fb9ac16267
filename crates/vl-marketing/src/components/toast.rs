//! Transient notifications that dismiss themselves

use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use vl_core::timing::TOAST_DISMISS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Toast {
    id: u64,
    kind: ToastKind,
    message: String,
}

/// App-wide toast queue
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    timers: StoredValue<Vec<(u64, TimeoutHandle)>>,
}

impl Toasts {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|t| t.id != id));
        self.timers.update_value(|timers| {
            timers.retain(|(timer_id, handle)| {
                if *timer_id == id {
                    handle.clear();
                    false
                } else {
                    true
                }
            })
        });
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| items.push(Toast { id, kind, message }));

        let toasts = *self;
        match set_timeout_with_handle(move || toasts.dismiss(id), TOAST_DISMISS) {
            Ok(handle) => self.timers.update_value(|timers| timers.push((id, handle))),
            Err(_) => tracing::debug!("Toast will not auto-dismiss"),
        }
    }

    fn clear_timers(&self) {
        self.timers.update_value(|timers| {
            for (_, handle) in timers.drain(..) {
                handle.clear();
            }
        });
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts {
        items: create_rw_signal(Vec::new()),
        next_id: store_value(0),
        timers: store_value(Vec::new()),
    };
    on_cleanup(move || toasts.clear_timers());
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="fixed top-20 right-4 z-50 space-y-3 w-80" aria-live="polite">
            <For
                each=move || toasts.items.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "flex items-start justify-between rounded-lg shadow-lg px-4 py-3 bg-emerald-600 text-white",
                        ToastKind::Info => "flex items-start justify-between rounded-lg shadow-lg px-4 py-3 bg-gray-900 text-white",
                    };
                    view! {
                        <div class=class>
                            <p class="text-sm">{toast.message}</p>
                            <button class="ml-4 text-white/80 hover:text-white" aria-label="Dismiss" on:click=move |_| toasts.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
