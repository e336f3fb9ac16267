//! Documentation page
//!
//! The full reference is still being written; visitors can ask for a topic
//! to be prioritised in the meantime.

use leptos::*;
use vl_core::content::HELP_TOPICS;
use vl_core::forms::DocsRequestForm;

use crate::components::*;
use crate::storage::use_preferences;

#[component]
pub fn DocsPage() -> impl IntoView {
    let prefs = use_preferences();
    let controller = use_form_controller();
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (topic, set_topic) = create_signal(String::new());
    let (details, set_details) = create_signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let form = DocsRequestForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            topic: topic.get_untracked(),
            details: details.get_untracked(),
        };
        controller.submit(form, prefs.clone(), |_| ());
    };

    let input_class = "w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-emerald-500 focus:border-emerald-500";

    view! {
        <div>
            <section class="bg-gradient-to-br from-gray-900 to-gray-800 text-white py-20">
                <div class="container mx-auto px-4 text-center max-w-3xl">
                    <h1 class="text-4xl md:text-5xl font-bold mb-6">"Documentation"</h1>
                    <p class="text-xl text-gray-300">
                        "The complete API and agent reference is on its way. Until then, the "
                        <a href="/help" class="underline">"help center"</a>
                        " and "
                        <a href="/guides" class="underline">"setup guides"</a>
                        " cover the essentials."
                    </p>
                </div>
            </section>

            <section class="py-16 bg-gray-50">
                <div class="container mx-auto px-4 max-w-2xl">
                    <div class="bg-white rounded-xl shadow-lg p-8">
                        <Show
                            when=move || !controller.is_success().get()
                            fallback=move || view! {
                                <div class="text-center py-12">
                                    <div class="text-5xl mb-4">"✓"</div>
                                    <h3 class="text-2xl font-bold text-gray-900 mb-2">"Request Received"</h3>
                                    <p class="text-gray-600">"We'll email you when that page is published."</p>
                                </div>
                            }
                        >
                            <h2 class="text-2xl font-bold text-gray-900 mb-6">"Request a topic"</h2>
                            <form on:submit=on_submit.clone() class="space-y-5" novalidate>
                                <input
                                    type="text"
                                    class=input_class
                                    placeholder="Your name"
                                    prop:value=name
                                    on:input=move |ev| {
                                        set_name.set(event_target_value(&ev));
                                        controller.edited();
                                    }
                                />
                                <input
                                    type="email"
                                    class=input_class
                                    placeholder="you@company.com"
                                    prop:value=email
                                    on:input=move |ev| {
                                        set_email.set(event_target_value(&ev));
                                        controller.edited();
                                    }
                                />
                                <select
                                    class=input_class
                                    prop:value=topic
                                    on:change=move |ev| {
                                        set_topic.set(event_target_value(&ev));
                                        controller.edited();
                                    }
                                >
                                    <option value="">"Select a topic"</option>
                                    {HELP_TOPICS.iter().map(|t| view! {
                                        <option value=t.slug>{t.title}</option>
                                    }).collect_view()}
                                    <option value="other">"Something else"</option>
                                </select>
                                <textarea
                                    class=input_class
                                    rows="4"
                                    placeholder="What would you like documented?"
                                    prop:value=details
                                    on:input=move |ev| set_details.set(event_target_value(&ev))
                                ></textarea>
                                <FormError error=controller.error()/>
                                <SubmitButton label="Send Request" busy=controller.is_validating()/>
                            </form>
                        </Show>
                    </div>
                </div>
            </section>
        </div>
    }
}
