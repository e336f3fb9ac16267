//! Pricing page

use leptos::*;
use vl_core::content::{BillingCycle, PLANS, PRICING_FAQS};

use crate::components::*;

#[component]
pub fn PricingPage() -> impl IntoView {
    let (cycle, set_cycle) = create_signal(BillingCycle::Monthly);
    let best_saving = PLANS.iter().filter_map(|p| p.yearly_savings_percent()).max();

    let toggle_class = move |option: BillingCycle| {
        if cycle.get() == option {
            "px-5 py-2 rounded-full text-sm font-medium bg-white text-gray-900 shadow"
        } else {
            "px-5 py-2 rounded-full text-sm font-medium text-gray-300 hover:text-white"
        }
    };

    view! {
        <div>
            // Hero
            <section class="bg-gradient-to-br from-gray-900 to-gray-800 text-white py-20">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center">
                        <h1 class="text-4xl md:text-5xl font-bold mb-6">"Simple, Predictable Pricing"</h1>
                        <p class="text-xl text-gray-300 mb-8">
                            "Start free and upgrade when your data grows. Every paid plan includes a 14-day trial."
                        </p>
                        <div class="inline-flex items-center bg-white/10 rounded-full p-1">
                            <button
                                class=move || toggle_class(BillingCycle::Monthly)
                                on:click=move |_| set_cycle.set(BillingCycle::Monthly)
                            >
                                {BillingCycle::Monthly.label()}
                            </button>
                            <button
                                class=move || toggle_class(BillingCycle::Yearly)
                                on:click=move |_| set_cycle.set(BillingCycle::Yearly)
                            >
                                {BillingCycle::Yearly.label()}
                                {best_saving.map(|pct| view! {
                                    <span class="ml-2 text-xs text-emerald-500">{format!("save up to {}%", pct)}</span>
                                })}
                            </button>
                        </div>
                    </div>
                </div>
            </section>

            // Pricing Cards
            <section class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8 max-w-7xl mx-auto">
                        {PLANS.iter().map(|plan| view! {
                            <PlanCard plan=plan cycle=cycle/>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // FAQ
            <section class="py-20 bg-white">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto">
                        <h2 class="text-3xl font-bold text-gray-900 text-center mb-12">"Frequently Asked Questions"</h2>
                        {PRICING_FAQS.iter().map(|faq| view! {
                            <FaqItem question=faq.question answer=faq.answer/>
                        }).collect_view()}
                    </div>
                </div>
            </section>
        </div>
    }
}
