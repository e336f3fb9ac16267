//! Search box, category chips and the empty state shared by listing pages

use leptos::*;
use vl_core::{CategoryFilter, FilterCriteria};

#[component]
pub fn SearchInput<C>(
    criteria: RwSignal<FilterCriteria<C>>,
    #[prop(into)] placeholder: String,
) -> impl IntoView
where
    C: Clone + PartialEq + 'static,
{
    view! {
        <div class="relative">
            <span class="absolute inset-y-0 left-0 pl-4 flex items-center text-gray-400">"🔍"</span>
            <input
                type="search"
                class="w-full pl-12 pr-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-emerald-500 focus:border-emerald-500"
                placeholder=placeholder
                prop:value=move || criteria.with(|c| c.query.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    criteria.update(|c| c.query = value);
                }
            />
        </div>
    }
}

#[component]
pub fn CategoryChips<C>(
    criteria: RwSignal<FilterCriteria<C>>,
    options: Vec<(C, &'static str)>,
) -> impl IntoView
where
    C: Clone + PartialEq + 'static,
{
    let chip_class = |active: bool| {
        if active {
            "px-4 py-2 rounded-full text-sm font-medium bg-emerald-600 text-white"
        } else {
            "px-4 py-2 rounded-full text-sm font-medium bg-gray-100 text-gray-700 hover:bg-gray-200"
        }
    };

    view! {
        <div class="flex flex-wrap gap-2">
            <button
                class=move || chip_class(criteria.with(|c| c.category.is_all()))
                on:click=move |_| criteria.update(|c| c.category = CategoryFilter::All)
            >
                "All"
            </button>
            {options.into_iter().map(|(category, label)| {
                let active = category.clone();
                view! {
                    <button
                        class=move || chip_class(criteria.with(|c| c.category == CategoryFilter::Only(active.clone())))
                        on:click=move |_| {
                            let selected = category.clone();
                            criteria.update(|c| c.category = CategoryFilter::Only(selected));
                        }
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Shown when a filter leaves nothing; the button restores the defaults
#[component]
pub fn EmptyState(
    #[prop(into)] message: String,
    #[prop(into)] on_reset: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="text-center py-16">
            <div class="text-5xl mb-4">"🗂"</div>
            <p class="text-gray-600 mb-6">{message}</p>
            <button
                class="px-6 py-2 bg-gray-900 hover:bg-gray-800 text-white rounded-lg transition"
                on:click=move |_| on_reset.call(())
            >
                "Clear filters"
            </button>
        </div>
    }
}

#[component]
pub fn LoadMore(
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="text-center mt-10">
                <button
                    class="px-6 py-3 border border-gray-300 hover:border-gray-400 rounded-lg font-medium text-gray-700 transition"
                    on:click=move |_| on_click.call(())
                >
                    "Load more"
                </button>
            </div>
        </Show>
    }
}
