//! Site footer with the newsletter sign-up

use leptos::*;
use vl_core::forms::NewsletterForm;

use crate::components::{use_form_controller, use_toasts, FormError, SubmitButton};
use crate::storage::use_preferences;

const COLUMNS: &[(&str, &[(&str, &str)])] = &[
    (
        "Product",
        &[
            ("/pricing", "Pricing"),
            ("/integrations", "Integrations"),
            ("/security", "Security"),
            ("/guides", "Setup Guides"),
        ],
    ),
    (
        "Resources",
        &[
            ("/help", "Help Center"),
            ("/docs", "Documentation"),
            ("/blog", "Blog"),
        ],
    ),
    (
        "Company",
        &[
            ("/careers", "Careers"),
            ("/privacy", "Privacy Policy"),
            ("/terms", "Terms of Service"),
            ("/cookies", "Cookie Policy"),
        ],
    ),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-gray-400">
            <div class="container mx-auto px-4 py-16">
                <div class="grid md:grid-cols-5 gap-12">
                    <div class="md:col-span-2">
                        <div class="flex items-center mb-4">
                            <span class="text-2xl mr-2">"🛡"</span>
                            <span class="text-xl font-bold text-white">"Vaultline"</span>
                        </div>
                        <p class="mb-6">"Automated, encrypted backups for the databases and apps your business runs on."</p>
                        <NewsletterSignup/>
                    </div>
                    {COLUMNS.iter().map(|(heading, links)| view! {
                        <div>
                            <h4 class="text-white font-semibold mb-4">{*heading}</h4>
                            <ul class="space-y-2">
                                {links.iter().map(|(href, label)| view! {
                                    <li><a href=*href class="hover:text-white transition">{*label}</a></li>
                                }).collect_view()}
                            </ul>
                        </div>
                    }).collect_view()}
                </div>
                <div class="border-t border-gray-800 mt-12 pt-8 text-sm text-center">
                    "© 2026 Vaultline. All rights reserved."
                </div>
            </div>
        </footer>
    }
}

#[component]
fn NewsletterSignup() -> impl IntoView {
    let prefs = use_preferences();
    let toasts = use_toasts();
    let controller = use_form_controller();
    let (email, set_email) = create_signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let form = NewsletterForm { email: email.get_untracked() };
        controller.submit(form, prefs.clone(), move |_| {
            set_email.set(String::new());
            toasts.success("Thanks for subscribing! Check your inbox to confirm.");
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-3" novalidate>
            <label class="block text-sm text-gray-300">"Product news, once a month"</label>
            <div class="flex gap-2">
                <input
                    type="email"
                    class="flex-grow px-4 py-2 rounded-lg bg-gray-800 border border-gray-700 text-white placeholder-gray-500 focus:ring-2 focus:ring-emerald-500"
                    placeholder="you@company.com"
                    prop:value=email
                    on:input=move |ev| {
                        set_email.set(event_target_value(&ev));
                        controller.edited();
                    }
                />
                <SubmitButton
                    label="Subscribe"
                    busy=controller.is_validating()
                    class="px-4 py-2 bg-emerald-600 hover:bg-emerald-700 disabled:opacity-60 text-white font-medium rounded-lg transition"
                />
            </div>
            <FormError error=controller.error()/>
        </form>
    }
}
