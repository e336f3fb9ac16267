//! Plan selection after sign-up

use leptos::*;
use leptos_router::*;
use vl_core::content::{find_plan, BillingCycle, PLANS};
use vl_core::forms::PlanSelectionForm;
use vl_core::SignupDraft;

use crate::components::*;
use crate::storage::use_preferences;

const DEFAULT_PLAN: &str = "starter";

#[component]
pub fn SelectPlanPage() -> impl IntoView {
    let prefs = use_preferences();
    let toasts = use_toasts();
    let navigate = use_navigate();
    let query = use_query_map();
    let controller = use_form_controller();

    let draft = create_rw_signal(None::<SignupDraft>);
    let plan_id = create_rw_signal(
        query.with_untracked(|q| q.get("plan").cloned()).unwrap_or_else(|| DEFAULT_PLAN.to_string()),
    );
    let (billing, set_billing) = create_signal(BillingCycle::Monthly);
    let (accept_terms, set_accept_terms) = create_signal(false);

    // The draft only exists in the browser
    let load_prefs = prefs.clone();
    create_effect(move |_| draft.set(SignupDraft::load(&load_prefs)));

    let submit_prefs = prefs.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let form = PlanSelectionForm {
            plan_id: plan_id.get_untracked(),
            billing: billing.get_untracked(),
            accept_terms: accept_terms.get_untracked(),
        };
        controller.submit(form, submit_prefs.clone(), move |_| {
            toasts.success("Plan confirmed. Welcome aboard!");
        });
    };

    let start_over = move |_: ev::MouseEvent| {
        SignupDraft::discard(&prefs);
        draft.set(None);
        navigate("/signup", Default::default());
    };

    let greeting = move || {
        draft.with(|d| match d {
            Some(d) if !d.display_name().is_empty() => format!("Welcome, {}!", d.first_name),
            _ => "Choose your plan".to_string(),
        })
    };

    let chosen = move || plan_id.with(|id| find_plan(id));

    view! {
        <section class="py-16 bg-gray-50 min-h-screen">
            <div class="container mx-auto px-4 max-w-5xl">
                <div class="text-center mb-10">
                    <h1 class="text-3xl font-bold text-gray-900 mb-2">{greeting}</h1>
                    <p class="text-gray-600">
                        {move || draft.with(|d| d.as_ref().map(|d| format!("Setting up Vaultline for {}", d.email)))
                            .unwrap_or_else(|| "You can change plans at any time.".to_string())}
                    </p>
                </div>

                <Show
                    when=move || !controller.is_success().get()
                    fallback=move || view! {
                        <div class="bg-white rounded-xl shadow-lg p-10 text-center max-w-lg mx-auto">
                            <div class="text-5xl mb-4">"🎉"</div>
                            <h2 class="text-2xl font-bold text-gray-900 mb-2">
                                {move || chosen().map(|p| format!("You're on {}", p.name)).unwrap_or_default()}
                            </h2>
                            <p class="text-gray-600 mb-6">
                                {move || chosen().map(|p| format!("{} billed {}", p.price_label(billing.get()), billing.get().label().to_lowercase())).unwrap_or_default()}
                            </p>
                            <a href="/jhelp/quick-start" class="inline-block px-6 py-3 bg-emerald-600 hover:bg-emerald-700 text-white font-semibold rounded-lg">
                                "Set up your first backup"
                            </a>
                        </div>
                    }
                >
                    <form on:submit=on_submit.clone() novalidate>
                        <div class="flex justify-center mb-8">
                            <button
                                type="button"
                                class="px-4 py-2 rounded-full bg-white shadow text-sm font-medium"
                                on:click=move |_| set_billing.update(|b| *b = b.toggled())
                            >
                                {move || format!("Billing: {} (switch)", billing.get().label())}
                            </button>
                        </div>
                        <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
                            {PLANS.iter().map(|plan| {
                                let selected = move || plan_id.with(|id| id == plan.id);
                                view! {
                                    <label class=move || if selected() {
                                        "block cursor-pointer bg-white rounded-xl p-6 ring-2 ring-emerald-500 shadow-lg"
                                    } else {
                                        "block cursor-pointer bg-white rounded-xl p-6 shadow hover:shadow-md"
                                    }>
                                        <input
                                            type="radio"
                                            name="plan"
                                            class="sr-only"
                                            value=plan.id
                                            prop:checked=selected
                                            on:change=move |_| {
                                                plan_id.set(plan.id.to_string());
                                                controller.edited();
                                            }
                                        />
                                        <h3 class="text-lg font-semibold text-gray-900">{plan.name}</h3>
                                        <p class="text-3xl font-bold text-gray-900 my-2">
                                            {move || plan.price_label(billing.get())}
                                        </p>
                                        <p class="text-sm text-gray-600">{plan.tagline}</p>
                                    </label>
                                }
                            }).collect_view()}
                        </div>
                        <div class="max-w-lg mx-auto space-y-4">
                            <label class="flex items-start gap-3 text-sm text-gray-700">
                                <input
                                    type="checkbox"
                                    class="mt-1 accent-emerald-600"
                                    prop:checked=accept_terms
                                    on:change=move |ev| {
                                        set_accept_terms.set(event_target_checked(&ev));
                                        controller.edited();
                                    }
                                />
                                <span>"I agree to the subscription terms and authorise recurring billing"</span>
                            </label>
                            <FormError error=controller.error()/>
                            <SubmitButton label="Confirm Plan" busy=controller.is_validating()/>
                            <p class="text-center text-sm text-gray-600">
                                "Not you? "
                                <button type="button" class="text-emerald-600 underline" on:click=start_over.clone()>
                                    "Start over"
                                </button>
                            </p>
                        </div>
                    </form>
                </Show>
            </div>
        </section>
    }
}
