//! Careers page and job application form

use leptos::*;
use vl_core::content::{find_job, JOB_OPENINGS};
use vl_core::forms::{JobApplicationForm, MIN_COVER_LETTER_LEN};

use crate::components::*;
use crate::storage::use_preferences;

#[component]
pub fn CareersPage() -> impl IntoView {
    let (job_id, set_job_id) = create_signal(String::new());

    view! {
        <div>
            <section class="bg-gradient-to-br from-emerald-900 to-gray-900 text-white py-20">
                <div class="container mx-auto px-4 text-center max-w-3xl">
                    <h1 class="text-4xl md:text-5xl font-bold mb-6">"Help Us Keep the World's Data Safe"</h1>
                    <p class="text-xl text-gray-300">"A small, remote-friendly team building boring, reliable infrastructure."</p>
                </div>
            </section>

            <section class="py-16 bg-white">
                <div class="container mx-auto px-4 max-w-4xl">
                    <h2 class="text-3xl font-bold text-gray-900 mb-8">"Open Positions"</h2>
                    <div class="space-y-4">
                        {JOB_OPENINGS.iter().map(|job| view! {
                            <div class="border border-gray-200 rounded-xl p-6 md:flex md:items-center md:justify-between gap-6">
                                <div>
                                    <h3 class="text-xl font-semibold text-gray-900">{job.title}</h3>
                                    <p class="text-sm text-gray-500 mb-2">{job.team}" · "{job.location}" · "{job.kind}</p>
                                    <p class="text-gray-600">{job.summary}</p>
                                </div>
                                <a
                                    href="#apply"
                                    class="mt-4 md:mt-0 inline-block px-5 py-2 bg-emerald-600 hover:bg-emerald-700 text-white rounded-lg whitespace-nowrap"
                                    on:click=move |_| set_job_id.set(job.id.to_string())
                                >
                                    "Apply"
                                </a>
                            </div>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            <section id="apply" class="py-16 bg-gray-50">
                <div class="container mx-auto px-4 max-w-2xl">
                    <ApplicationForm job_id=job_id set_job_id=set_job_id/>
                </div>
            </section>
        </div>
    }
}

#[component]
fn ApplicationForm(job_id: ReadSignal<String>, set_job_id: WriteSignal<String>) -> impl IntoView {
    let prefs = use_preferences();
    let controller = use_form_controller();
    let (full_name, set_full_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (portfolio_url, set_portfolio_url) = create_signal(String::new());
    let (cover_letter, set_cover_letter) = create_signal(String::new());
    let (privacy_consent, set_privacy_consent) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let form = JobApplicationForm {
            job_id: job_id.get_untracked(),
            full_name: full_name.get_untracked(),
            email: email.get_untracked(),
            portfolio_url: portfolio_url.get_untracked(),
            cover_letter: cover_letter.get_untracked(),
            privacy_consent: privacy_consent.get_untracked(),
        };
        controller.submit(form, prefs.clone(), |_| ());
    };

    let start_over = move |_: ev::MouseEvent| {
        set_cover_letter.set(String::new());
        controller.reset();
    };

    let input_class = "w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-emerald-500 focus:border-emerald-500";
    let position = move || job_id.with(|id| find_job(id).map(|job| job.title));

    view! {
        <div class="bg-white rounded-xl shadow-lg p-8">
            <Show
                when=move || !controller.is_success().get()
                fallback=move || view! {
                    <div class="text-center py-12">
                        <div class="text-5xl mb-4">"✓"</div>
                        <h3 class="text-2xl font-bold text-gray-900 mb-2">"Application Received"</h3>
                        <p class="text-gray-600 mb-2">"We reply to every applicant within two weeks."</p>
                        <p class="text-sm text-gray-500 mb-6">
                            "Reference "
                            {move || controller.receipt().get().map(|r| r.short_reference())}
                        </p>
                        <button class="text-emerald-600 underline" on:click=start_over>"Apply for another role"</button>
                    </div>
                }
            >
                <h2 class="text-2xl font-bold text-gray-900 mb-1">"Apply"</h2>
                <p class="text-gray-600 mb-6">
                    {move || position().unwrap_or("Choose a position to get started")}
                </p>
                <form on:submit=on_submit.clone() class="space-y-5" novalidate>
                    <select
                        class=input_class
                        prop:value=job_id
                        on:change=move |ev| {
                            set_job_id.set(event_target_value(&ev));
                            controller.edited();
                        }
                    >
                        <option value="">"Select a position"</option>
                        {JOB_OPENINGS.iter().map(|job| view! {
                            <option value=job.id>{job.title}</option>
                        }).collect_view()}
                    </select>
                    <input
                        type="text"
                        class=input_class
                        placeholder="Full name"
                        prop:value=full_name
                        on:input=move |ev| {
                            set_full_name.set(event_target_value(&ev));
                            controller.edited();
                        }
                    />
                    <input
                        type="email"
                        class=input_class
                        placeholder="you@example.com"
                        prop:value=email
                        on:input=move |ev| {
                            set_email.set(event_target_value(&ev));
                            controller.edited();
                        }
                    />
                    <input
                        type="url"
                        class=input_class
                        placeholder="Portfolio or GitHub URL (optional)"
                        prop:value=portfolio_url
                        on:input=move |ev| {
                            set_portfolio_url.set(event_target_value(&ev));
                            controller.edited();
                        }
                    />
                    <div>
                        <textarea
                            class=input_class
                            rows="6"
                            placeholder="Why Vaultline?"
                            prop:value=cover_letter
                            on:input=move |ev| {
                                set_cover_letter.set(event_target_value(&ev));
                                controller.edited();
                            }
                        ></textarea>
                        <p class="text-xs text-gray-500 mt-1">
                            {move || cover_letter.with(|c| c.trim().chars().count())}
                            " / " {MIN_COVER_LETTER_LEN} " characters minimum"
                        </p>
                    </div>
                    <label class="flex items-start gap-3 text-sm text-gray-700">
                        <input
                            type="checkbox"
                            class="mt-1 accent-emerald-600"
                            prop:checked=privacy_consent
                            on:change=move |ev| {
                                set_privacy_consent.set(event_target_checked(&ev));
                                controller.edited();
                            }
                        />
                        <span>
                            "I agree that Vaultline may store my application for this hiring round, as described in the "
                            <a href="/privacy" class="text-emerald-600 underline">"privacy policy"</a>"."
                        </span>
                    </label>
                    <FormError error=controller.error()/>
                    <SubmitButton label="Submit Application" busy=controller.is_validating()/>
                </form>
            </Show>
        </div>
    }
}
