//! Integrations directory with favorites and feature voting

use leptos::*;
use vl_core::content::{Integration, IntegrationCategory, INTEGRATIONS};
use vl_core::filter::filter_records;
use vl_core::forms::IntegrationVoteForm;
use vl_core::{FavoriteRecord, Favorites, FilterCriteria};

use crate::components::*;
use crate::storage::use_preferences;

#[component]
pub fn IntegrationsPage() -> impl IntoView {
    let prefs = use_preferences();
    let toasts = use_toasts();
    let criteria = create_rw_signal(FilterCriteria::<IntegrationCategory>::default());
    let favorites = create_rw_signal(Favorites::new());

    let load_prefs = prefs.clone();
    create_effect(move |_| favorites.set(Favorites::load(&load_prefs)));

    let toggle_favorite = move |integration: &'static Integration| {
        let mut added = false;
        favorites.update(|f| {
            added = f.toggle(FavoriteRecord::from(integration));
            f.save(&prefs);
        });
        if added {
            toasts.success(format!("{} added to favorites", integration.name));
        } else {
            toasts.info(format!("{} removed from favorites", integration.name));
        }
    };

    let matching = move || criteria.with(|c| filter_records(INTEGRATIONS, c));
    let chip_options = IntegrationCategory::ALL.iter().map(|c| (*c, c.label())).collect::<Vec<_>>();

    view! {
        <div>
            <section class="bg-gradient-to-br from-gray-900 to-gray-800 text-white py-16">
                <div class="container mx-auto px-4 text-center">
                    <h1 class="text-4xl md:text-5xl font-bold mb-4">"Integrations"</h1>
                    <p class="text-xl text-gray-300">
                        "Back up the tools you already use. Star the ones you care about and vote for what's next."
                    </p>
                </div>
            </section>

            <section class="py-12 bg-gray-50">
                <div class="container mx-auto px-4 max-w-6xl">
                    <div class="md:flex md:items-end md:justify-between gap-6 mb-10">
                        <div class="flex-grow space-y-4">
                            <SearchInput criteria=criteria placeholder="Search integrations"/>
                            <CategoryChips criteria=criteria options=chip_options/>
                        </div>
                        <p class="mt-4 md:mt-0 text-sm text-gray-600 whitespace-nowrap">
                            "★ " {move || favorites.with(|f| f.len())} " favorites"
                        </p>
                    </div>

                    {move || {
                        let items = matching();
                        if items.is_empty() {
                            return view! {
                                <EmptyState
                                    message="No integrations match your search. Vote for it below!"
                                    on_reset=move |_: ()| criteria.update(|c| c.reset())
                                />
                            }
                            .into_view();
                        }
                        let toggle = toggle_favorite.clone();
                        view! {
                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                                {items.into_iter().map(|integration| {
                                    let toggle = toggle.clone();
                                    view! {
                                        <IntegrationCard
                                            integration=integration
                                            starred=Signal::derive(move || favorites.with(|f| f.contains(integration.id)))
                                            on_star=move |_: ()| toggle(integration)
                                        />
                                    }
                                }).collect_view()}
                            </div>
                        }
                        .into_view()
                    }}
                </div>
            </section>

            <section class="py-16 bg-white">
                <div class="container mx-auto px-4 max-w-2xl">
                    <h2 class="text-3xl font-bold text-gray-900 text-center mb-2">"Missing something?"</h2>
                    <p class="text-gray-600 text-center mb-8">"Tell us what to build next. The most requested integrations ship first."</p>
                    <VoteForm/>
                </div>
            </section>
        </div>
    }
}

#[component]
fn IntegrationCard(
    integration: &'static Integration,
    #[prop(into)] starred: Signal<bool>,
    #[prop(into)] on_star: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow p-6 flex flex-col">
            <div class="flex justify-between items-start mb-2">
                <h3 class="text-lg font-semibold text-gray-900">{integration.name}</h3>
                <button
                    class=move || if starred.get() { "text-2xl text-amber-400" } else { "text-2xl text-gray-300 hover:text-amber-400" }
                    aria-label="Toggle favorite"
                    on:click=move |_| on_star.call(())
                >
                    {move || if starred.get() { "★" } else { "☆" }}
                </button>
            </div>
            <p class="text-sm text-gray-600 flex-grow">{integration.description}</p>
            <div class="mt-4 flex justify-between text-xs text-gray-500">
                <span>{integration.category.label()}</span>
                {if integration.available {
                    view! { <span class="text-emerald-600 font-medium">"Available"</span> }
                } else {
                    view! { <span>{format!("Coming soon · {} votes", integration.votes)}</span> }
                }}
            </div>
        </div>
    }
}

#[component]
fn VoteForm() -> impl IntoView {
    let prefs = use_preferences();
    let toasts = use_toasts();
    let controller = use_form_controller();
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (use_case, set_use_case) = create_signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let form = IntegrationVoteForm {
            integration_name: name.get_untracked(),
            email: email.get_untracked(),
            use_case: use_case.get_untracked(),
        };
        let voted_for = form.integration_name.trim().to_string();
        controller.submit(form, prefs.clone(), move |_| {
            set_name.set(String::new());
            set_use_case.set(String::new());
            toasts.success(format!("Thanks! Your vote for {} is in.", voted_for));
        });
    };

    let input_class = "w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-emerald-500 focus:border-emerald-500";

    view! {
        <form on:submit=on_submit class="space-y-4 bg-gray-50 rounded-xl p-8" novalidate>
            <input
                type="text"
                class=input_class
                placeholder="Integration name"
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
            <textarea
                class=input_class
                rows="3"
                placeholder="How would you use it? (optional)"
                prop:value=use_case
                on:input=move |ev| set_use_case.set(event_target_value(&ev))
            ></textarea>
            <FormError error=controller.error()/>
            <SubmitButton label="Submit Vote" busy=controller.is_validating()/>
        </form>
    }
}
