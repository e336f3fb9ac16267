//! Shared form plumbing
//!
//! Every page form goes through a [`FormController`]: it owns the
//! submission state machine, applies the simulated latency with a timer
//! that is cleared if the page goes away, and hands the form to the
//! submitter.

use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use vl_core::forms::NextStep;
use vl_core::timing::SUBMIT_LATENCY;
use vl_core::{FormMachine, FormSpec, Preferences, Receipt, SimulatedSubmitter, Submitter, Violation};

use crate::config::SiteConfig;

#[derive(Clone, Copy)]
pub struct FormController {
    machine: RwSignal<FormMachine>,
    pending: StoredValue<Option<TimeoutHandle>>,
}

/// Create a controller scoped to the calling component
pub fn use_form_controller() -> FormController {
    let machine = create_rw_signal(FormMachine::new());
    let pending = store_value(None::<TimeoutHandle>);

    on_cleanup(move || {
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }
    });

    FormController { machine, pending }
}

impl FormController {
    pub fn is_validating(&self) -> Signal<bool> {
        let machine = self.machine;
        Signal::derive(move || machine.with(|m| m.is_validating()))
    }

    pub fn is_success(&self) -> Signal<bool> {
        let machine = self.machine;
        Signal::derive(move || machine.with(|m| m.is_success()))
    }

    pub fn error(&self) -> Signal<Option<Violation>> {
        let machine = self.machine;
        Signal::derive(move || machine.with(|m| m.error().cloned()))
    }

    pub fn receipt(&self) -> Signal<Option<Receipt>> {
        let machine = self.machine;
        Signal::derive(move || machine.with(|m| m.receipt().cloned()))
    }

    /// Call from field input handlers so a failure turns back into an
    /// editable form that still shows the last error
    pub fn edited(&self) {
        if self.machine.with_untracked(|m| m.error().is_some()) {
            self.machine.update(|m| m.edit());
        }
    }

    pub fn reset(&self) {
        self.cancel_pending();
        self.machine.update(|m| m.reset());
    }

    /// Submit `form` after the simulated latency. `on_success` runs once
    /// the submission is accepted.
    pub fn submit<F>(&self, form: F, prefs: Preferences, on_success: impl FnOnce(Receipt) + 'static)
    where
        F: FormSpec + 'static,
    {
        let started = self.machine.try_update(|m| m.begin()).unwrap_or(false);
        if !started {
            return;
        }

        let machine = self.machine;
        let pending = self.pending;
        let run = move || {
            pending.set_value(None);
            spawn_local(async move {
                let outcome = SimulatedSubmitter::new(prefs).submit(&form).await;
                if let Ok(receipt) = &outcome {
                    on_success(receipt.clone());
                }
                machine.update(|m| m.resolve(outcome));
            });
        };

        match set_timeout_with_handle(run, SUBMIT_LATENCY) {
            Ok(handle) => self.pending.set_value(Some(handle)),
            Err(_) => {
                tracing::warn!(form = F::NAME, "Could not schedule submission");
                self.machine.update(|m| m.reset());
            }
        }
    }

    fn cancel_pending(&self) {
        if let Some(handle) = self.pending.get_value() {
            handle.clear();
        }
        self.pending.set_value(None);
    }
}

/// Inline error with the follow-up the visitor should take
#[component]
pub fn FormError(#[prop(into)] error: Signal<Option<Violation>>) -> impl IntoView {
    let support_email = use_context::<SiteConfig>()
        .map(|c| c.support_email)
        .unwrap_or_else(|| crate::config::DEFAULT_SUPPORT_EMAIL.to_string());

    move || {
        error.get().map(|violation| {
            let follow_up = match violation.next_step() {
                NextStep::Retry => None,
                NextStep::ContactSupport => Some(view! {
                    <a href=format!("mailto:{}", support_email) class="block mt-1 font-medium underline">
                        "Contact support"
                    </a>
                }),
                NextStep::ContactSales => Some(view! {
                    <a href=format!("mailto:{}", crate::config::SALES_EMAIL) class="block mt-1 font-medium underline">
                        "Talk to sales"
                    </a>
                }),
            };
            view! {
                <div class="rounded-lg bg-red-50 border border-red-200 px-4 py-3 text-sm text-red-700" role="alert">
                    <p>{violation.to_string()}</p>
                    {follow_up}
                </div>
            }
        })
    }
}

#[component]
pub fn SubmitButton(
    #[prop(into)] label: String,
    #[prop(into)] busy: Signal<bool>,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let class = class.unwrap_or_else(|| {
        "w-full py-3 bg-emerald-600 hover:bg-emerald-700 disabled:opacity-60 text-white font-semibold rounded-lg transition".to_string()
    });

    view! {
        <button type="submit" class=class disabled=move || busy.get()>
            {move || if busy.get() { "Sending...".to_string() } else { label.clone() }}
        </button>
    }
}
