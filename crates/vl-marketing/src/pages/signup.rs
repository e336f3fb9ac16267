//! Sign-up page
//!
//! An accepted sign-up leaves a draft in local storage and moves on to plan
//! selection, carrying over a `?plan=` picked on the pricing page.

use leptos::*;
use leptos_router::*;
use vl_core::forms::{SignupForm, MIN_PASSWORD_LEN};
use vl_core::signup_flow::plan_selection_path;

use crate::components::*;
use crate::storage::use_preferences;

#[component]
pub fn SignupPage() -> impl IntoView {
    let prefs = use_preferences();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let query = use_query_map();
    let controller = use_form_controller();
    let form = create_rw_signal(SignupForm::default());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let destination = query.with_untracked(|q| plan_selection_path(q.get("plan").map(String::as_str)));
        let navigate = navigate.clone();
        controller.submit(form.get_untracked(), prefs.clone(), move |_| {
            toasts.success("Account created. Now pick a plan.");
            navigate(&destination, Default::default());
        });
    };

    let edit = move |apply: fn(&mut SignupForm, String)| {
        move |ev: ev::Event| {
            let value = event_target_value(&ev);
            form.update(|f| apply(f, value));
            controller.edited();
        }
    };

    let input_class = "w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-emerald-500 focus:border-emerald-500";

    view! {
        <section class="py-16 bg-gray-50 min-h-screen">
            <div class="container mx-auto px-4 max-w-lg">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold text-gray-900 mb-2">"Create your Vaultline account"</h1>
                    <p class="text-gray-600">"Free forever for small workloads. No credit card required."</p>
                </div>
                <form on:submit=on_submit class="bg-white rounded-xl shadow-lg p-8 space-y-5" novalidate>
                    <div class="grid grid-cols-2 gap-4">
                        <input
                            type="text"
                            class=input_class
                            placeholder="First name"
                            prop:value=move || form.with(|f| f.first_name.clone())
                            on:input=edit(|f, v| f.first_name = v)
                        />
                        <input
                            type="text"
                            class=input_class
                            placeholder="Last name"
                            prop:value=move || form.with(|f| f.last_name.clone())
                            on:input=edit(|f, v| f.last_name = v)
                        />
                    </div>
                    <input
                        type="email"
                        class=input_class
                        placeholder="Work email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=edit(|f, v| f.email = v)
                    />
                    <input
                        type="text"
                        class=input_class
                        placeholder="Company (optional)"
                        prop:value=move || form.with(|f| f.company.clone())
                        on:input=edit(|f, v| f.company = v)
                    />
                    <input
                        type="password"
                        class=input_class
                        placeholder=format!("Password ({}+ characters)", MIN_PASSWORD_LEN)
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=edit(|f, v| f.password = v)
                    />
                    <input
                        type="password"
                        class=input_class
                        placeholder="Confirm password"
                        prop:value=move || form.with(|f| f.confirm_password.clone())
                        on:input=edit(|f, v| f.confirm_password = v)
                    />
                    <label class="flex items-start gap-3 text-sm text-gray-700">
                        <input
                            type="checkbox"
                            class="mt-1 accent-emerald-600"
                            prop:checked=move || form.with(|f| f.accept_terms)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                form.update(|f| f.accept_terms = checked);
                                controller.edited();
                            }
                        />
                        <span>
                            "I accept the "
                            <a href="/terms" class="text-emerald-600 underline">"Terms of Service"</a>
                            " and "
                            <a href="/privacy" class="text-emerald-600 underline">"Privacy Policy"</a>
                        </span>
                    </label>
                    <label class="flex items-start gap-3 text-sm text-gray-700">
                        <input
                            type="checkbox"
                            class="mt-1 accent-emerald-600"
                            prop:checked=move || form.with(|f| f.marketing_opt_in)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                form.update(|f| f.marketing_opt_in = checked);
                            }
                        />
                        <span>"Send me product updates and backup tips"</span>
                    </label>
                    <FormError error=controller.error()/>
                    <SubmitButton label="Create Account" busy=controller.is_validating()/>
                    <p class="text-center text-sm text-gray-600">
                        "Already have an account? "
                        <a href="/forgot-password" class="text-emerald-600 underline">"Reset your password"</a>
                    </p>
                </form>
            </div>
        </section>
    }
}
