//! Help center and help topic pages

use leptos::*;
use leptos_router::*;
use vl_core::content::{help_topic, FaqCategory, HELP_FAQS, HELP_TOPICS};
use vl_core::filter::filter_records;
use vl_core::{FilterCriteria, HelpRouter};

use crate::components::*;

/// Search box routes straight to a topic; the FAQ below filters in place
#[component]
pub fn HelpCenterPage() -> impl IntoView {
    let navigate = use_navigate();
    let router = HelpRouter::new();
    let (query, set_query) = create_signal(String::new());

    let on_search = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let destination = router.route(&query.get_untracked());
        navigate(destination, Default::default());
    };

    let criteria = create_rw_signal(FilterCriteria::<FaqCategory>::default());
    let results = move || criteria.with(|c| filter_records(HELP_FAQS, c));
    let chip_options = FaqCategory::ALL.iter().map(|c| (*c, c.label())).collect::<Vec<_>>();

    view! {
        <div>
            <section class="bg-gradient-to-br from-gray-900 to-emerald-900 text-white py-20">
                <div class="container mx-auto px-4">
                    <div class="max-w-2xl mx-auto text-center">
                        <h1 class="text-4xl md:text-5xl font-bold mb-6">"How can we help?"</h1>
                        <form on:submit=on_search class="flex gap-2">
                            <input
                                type="search"
                                class="flex-grow px-4 py-3 rounded-lg text-gray-900"
                                placeholder="Try \"restore a database\" or \"billing\""
                                prop:value=query
                                on:input=move |ev| set_query.set(event_target_value(&ev))
                            />
                            <button type="submit" class="px-6 py-3 bg-emerald-500 hover:bg-emerald-400 font-semibold rounded-lg transition">
                                "Search"
                            </button>
                        </form>
                    </div>
                </div>
            </section>

            <section class="py-16 bg-white">
                <div class="container mx-auto px-4">
                    <div class="grid md:grid-cols-3 gap-6 max-w-5xl mx-auto">
                        {HELP_TOPICS.iter().map(|topic| view! {
                            <a
                                href=format!("/jhelp/{}", topic.slug)
                                class="block bg-gray-50 hover:bg-emerald-50 rounded-xl p-6 transition"
                            >
                                <h3 class="text-lg font-semibold text-gray-900 mb-1">{topic.title}</h3>
                                <p class="text-sm text-gray-600">{topic.summary}</p>
                            </a>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            <section class="py-16 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto">
                        <h2 class="text-3xl font-bold text-gray-900 text-center mb-8">"Frequently Asked Questions"</h2>
                        <div class="space-y-4 mb-8">
                            <SearchInput criteria=criteria placeholder="Filter questions"/>
                            <CategoryChips criteria=criteria options=chip_options/>
                        </div>
                        {move || {
                            let faqs = results();
                            if faqs.is_empty() {
                                view! {
                                    <EmptyState
                                        message="No questions match your search."
                                        on_reset=move |_: ()| criteria.update(|c| c.reset())
                                    />
                                }
                                .into_view()
                            } else {
                                faqs.into_iter()
                                    .map(|faq| view! { <FaqItem question=faq.question answer=faq.answer/> })
                                    .collect_view()
                            }
                        }}
                    </div>
                </div>
            </section>
        </div>
    }
}

/// `/jhelp/:topic`; unknown slugs show the documentation index
#[component]
pub fn HelpTopicPage() -> impl IntoView {
    let params = use_params_map();
    let topic = move || params.with(|p| help_topic(p.get("topic").map(String::as_str).unwrap_or_default()));

    view! {
        <div class="py-16 bg-white">
            <div class="container mx-auto px-4">
                {move || {
                    let topic = topic();
                    view! {
                        <article class="max-w-3xl mx-auto">
                            <a href="/help" class="text-sm text-emerald-600 hover:underline">"← Help center"</a>
                            <h1 class="text-4xl font-bold text-gray-900 mt-4 mb-2">{topic.title}</h1>
                            <p class="text-lg text-gray-600 mb-10">{topic.summary}</p>
                            {topic.sections.iter().map(|(heading, body)| view! {
                                <section class="mb-8">
                                    <h2 class="text-xl font-semibold text-gray-900 mb-2">{*heading}</h2>
                                    <p class="text-gray-700">{*body}</p>
                                </section>
                            }).collect_view()}
                        </article>
                    }
                }}
            </div>
        </div>
    }
}
