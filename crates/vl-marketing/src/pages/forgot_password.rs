//! Forgot password page with a resend cooldown

use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::*;
use vl_core::forms::ForgotPasswordForm;
use vl_core::timing::{Countdown, COUNTDOWN_TICK, RESEND_COOLDOWN_SECS};

use crate::components::*;
use crate::storage::use_preferences;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let prefs = use_preferences();
    let toasts = use_toasts();
    let controller = use_form_controller();
    let (email, set_email) = create_signal(String::new());
    let sent_to = create_rw_signal(None::<String>);
    let countdown = create_rw_signal(Countdown::idle());
    let ticker = store_value(None::<IntervalHandle>);

    let stop_ticker = move || {
        if let Some(handle) = ticker.get_value() {
            handle.clear();
        }
        ticker.set_value(None);
    };

    on_cleanup(stop_ticker);

    let start_cooldown = move || {
        stop_ticker();
        countdown.update(|c| c.start(RESEND_COOLDOWN_SECS));
        let tick = move || {
            let mut finished = false;
            countdown.update(|c| finished = c.tick());
            if finished {
                stop_ticker();
            }
        };
        match set_interval_with_handle(tick, COUNTDOWN_TICK) {
            Ok(handle) => ticker.set_value(Some(handle)),
            Err(_) => countdown.update(|c| c.cancel()),
        }
    };

    let send = move |address: String| {
        let form = ForgotPasswordForm { email: address.clone() };
        controller.submit(form, prefs.clone(), move |_| {
            sent_to.set(Some(address.trim().to_string()));
            start_cooldown();
        });
    };

    let send_first = send.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        send_first(email.get_untracked());
    };

    let on_resend = move |_: ev::MouseEvent| {
        if countdown.with_untracked(|c| c.is_running()) {
            return;
        }
        if let Some(address) = sent_to.get_untracked() {
            controller.reset();
            send(address);
            toasts.info("Sending another reset link");
        }
    };

    view! {
        <section class="py-16 bg-gray-50 min-h-screen">
            <div class="container mx-auto px-4 max-w-md">
                <div class="bg-white rounded-xl shadow-lg p-8">
                    <Show
                        when=move || sent_to.with(|s| s.is_none())
                        fallback=move || view! {
                            <div class="text-center">
                                <div class="text-5xl mb-4">"📬"</div>
                                <h1 class="text-2xl font-bold text-gray-900 mb-2">"Check your inbox"</h1>
                                <p class="text-gray-600 mb-6">
                                    "If an account exists for "
                                    <strong>{move || sent_to.get().unwrap_or_default()}</strong>
                                    ", a reset link is on its way."
                                </p>
                                <button
                                    class="px-4 py-2 border border-gray-300 rounded-lg disabled:opacity-50"
                                    disabled=move || countdown.with(|c| c.is_running()) || controller.is_validating().get()
                                    on:click=on_resend.clone()
                                >
                                    {move || {
                                        let remaining = countdown.with(|c| c.remaining());
                                        if remaining > 0 {
                                            format!("Resend in {}s", remaining)
                                        } else {
                                            "Resend link".to_string()
                                        }
                                    }}
                                </button>
                                <FormError error=controller.error()/>
                            </div>
                        }
                    >
                        <h1 class="text-2xl font-bold text-gray-900 mb-2">"Reset your password"</h1>
                        <p class="text-gray-600 mb-6">"Enter the email you signed up with and we'll send you a reset link."</p>
                        <form on:submit=on_submit.clone() class="space-y-5" novalidate>
                            <input
                                type="email"
                                class="w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-emerald-500 focus:border-emerald-500"
                                placeholder="you@company.com"
                                prop:value=email
                                on:input=move |ev| {
                                    set_email.set(event_target_value(&ev));
                                    controller.edited();
                                }
                            />
                            <FormError error=controller.error()/>
                            <SubmitButton label="Send Reset Link" busy=controller.is_validating()/>
                        </form>
                    </Show>
                    <p class="text-center text-sm text-gray-600 mt-6">
                        "New here? "
                        <a href="/signup" class="text-emerald-600 underline">"Create an account"</a>
                    </p>
                </div>
            </div>
        </section>
    }
}
