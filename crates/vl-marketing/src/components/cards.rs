//! Card components for marketing pages

use leptos::*;
use vl_core::content::{BillingCycle, BlogPost, Plan, SetupGuide};

#[component]
pub fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-lg p-6">
            <div class="text-4xl mb-4">{icon}</div>
            <h3 class="text-xl font-semibold text-gray-900 mb-2">{title}</h3>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}

#[component]
pub fn StepCard(
    number: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="w-12 h-12 bg-emerald-600 text-white rounded-full flex items-center justify-center text-xl font-bold mx-auto mb-4">
                {number}
            </div>
            <h3 class="text-xl font-semibold text-gray-900 mb-2">{title}</h3>
            <p class="text-gray-600">{description}</p>
        </div>
    }
}

#[component]
pub fn TestimonialCard(
    quote: &'static str,
    author: &'static str,
    role: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-lg p-8">
            <p class="text-gray-700 italic mb-6">"\""{ quote }"\""</p>
            <div>
                <p class="font-semibold text-gray-900">{author}</p>
                <p class="text-sm text-gray-600">{role}</p>
            </div>
        </div>
    }
}

#[component]
pub fn StatCard(
    value: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class="text-4xl font-bold text-emerald-600">{value}</div>
            <div class="text-gray-600 mt-1">{label}</div>
        </div>
    }
}

#[component]
pub fn PricingFeature(text: &'static str, #[prop(optional)] inverted: bool) -> impl IntoView {
    let (mark, text_style) = if inverted {
        ("text-emerald-200", "text-white")
    } else {
        ("text-emerald-600", "text-gray-700")
    };

    view! {
        <li class="flex items-center">
            <span class=format!("{} mr-3 font-bold", mark)>"✓"</span>
            <span class=text_style>{text}</span>
        </li>
    }
}

/// One pricing tier. The price follows the billing toggle.
#[component]
pub fn PlanCard(
    plan: &'static Plan,
    #[prop(into)] cycle: Signal<BillingCycle>,
) -> impl IntoView {
    let href = if plan.monthly_price.is_some() {
        format!("/signup?plan={}", plan.id)
    } else {
        "/docs".to_string()
    };
    let cta = if plan.monthly_price.is_some() { "Get Started" } else { "Contact Sales" };

    let (card, muted, button) = if plan.highlighted {
        (
            "bg-gradient-to-b from-emerald-600 to-teal-700 rounded-xl shadow-xl p-8 text-white transform md:scale-105",
            "text-emerald-100",
            "block w-full py-3 text-center bg-white text-emerald-700 font-semibold rounded-lg hover:bg-gray-100 transition",
        )
    } else {
        (
            "bg-white rounded-xl shadow-lg p-8",
            "text-gray-500",
            "block w-full py-3 text-center bg-gray-100 hover:bg-gray-200 text-gray-900 font-semibold rounded-lg transition",
        )
    };

    view! {
        <div class=card>
            <div class="text-center mb-8">
                <Show when=move || plan.highlighted>
                    <span class="inline-block px-3 py-1 bg-white/20 rounded-full text-sm font-medium mb-4">"Most Popular"</span>
                </Show>
                <h3 class="text-xl font-semibold mb-2">{plan.name}</h3>
                <div class="text-4xl font-bold mb-1">
                    {move || plan.price_label(cycle.get())}
                    <Show when=move || plan.price(cycle.get()).map_or(false, |p| p > 0)>
                        <span class=format!("text-lg font-normal {}", muted)>{move || cycle.get().suffix()}</span>
                    </Show>
                </div>
                <p class=muted>{plan.tagline}</p>
            </div>
            <ul class="space-y-4 mb-8">
                {plan.features.iter().map(|text| view! {
                    <PricingFeature text=*text inverted=plan.highlighted/>
                }).collect_view()}
            </ul>
            <a href=href class=button>{cta}</a>
        </div>
    }
}

#[component]
pub fn BlogCard(post: &'static BlogPost) -> impl IntoView {
    view! {
        <article class="bg-white rounded-xl shadow hover:shadow-lg transition p-6 flex flex-col">
            <span class="text-xs font-semibold uppercase tracking-wide text-emerald-600 mb-2">
                {post.category.label()}
            </span>
            <h3 class="text-xl font-semibold text-gray-900 mb-2">{post.title}</h3>
            <p class="text-gray-600 flex-grow">{post.excerpt}</p>
            <div class="mt-6 text-sm text-gray-500">
                {post.author}" · "{post.published}" · "{post.read_minutes}" min read"
            </div>
        </article>
    }
}

#[component]
pub fn GuideCard(guide: &'static SetupGuide) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-6 border-l-4 border-emerald-500">
            <div class="flex justify-between items-start mb-2">
                <h3 class="font-semibold text-gray-900">{guide.title}</h3>
                <span class="text-xs px-2 py-1 rounded bg-gray-100 text-gray-600">{guide.difficulty.to_string()}</span>
            </div>
            <p class="text-sm text-gray-600 mb-4">{guide.summary}</p>
            <p class="text-xs text-gray-500">{guide.category.label()}" · "{guide.minutes}" min setup"</p>
        </div>
    }
}

/// Question with a collapsible answer
#[component]
pub fn FaqItem(question: &'static str, answer: &'static str) -> impl IntoView {
    let (open, set_open) = create_signal(false);

    view! {
        <div class="border-b border-gray-200 py-4">
            <button
                class="w-full flex justify-between items-center text-left"
                on:click=move |_| set_open.update(|v| *v = !*v)
            >
                <h3 class="text-lg font-semibold text-gray-900">{question}</h3>
                <span class="text-gray-500 ml-4">{move || if open.get() { "−" } else { "+" }}</span>
            </button>
            <Show when=move || open.get()>
                <p class="text-gray-600 mt-3">{answer}</p>
            </Show>
        </div>
    }
}
