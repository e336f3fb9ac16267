//! Cookie consent banner and preference panel
//!
//! Both write the same `cookie-consent` record; whichever saves last wins.

use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use vl_core::consent::{ConsentCategory, ConsentPreference};
use vl_core::timing::CONSENT_REVEAL_DELAY;

use crate::components::use_toasts;
use crate::storage::use_preferences;

#[component]
pub fn CookieBanner() -> impl IntoView {
    let prefs = use_preferences();
    let toasts = use_toasts();
    let (visible, set_visible) = create_signal(false);
    let (customizing, set_customizing) = create_signal(false);
    let reveal = store_value(None::<TimeoutHandle>);

    // Effects only run in the browser, where the stored consent is readable
    let check_prefs = prefs.clone();
    create_effect(move |_| {
        if !ConsentPreference::needs_prompt(&check_prefs) {
            return;
        }
        match set_timeout_with_handle(move || set_visible.set(true), CONSENT_REVEAL_DELAY) {
            Ok(handle) => reveal.set_value(Some(handle)),
            Err(_) => set_visible.set(true),
        }
    });

    on_cleanup(move || {
        if let Some(handle) = reveal.get_value() {
            handle.clear();
        }
    });

    let accept_prefs = prefs.clone();
    let accept_all = Callback::new(move |_: ev::MouseEvent| {
        ConsentPreference::accept_all().save(&accept_prefs);
        set_visible.set(false);
        toasts.success("Cookie preferences saved");
    });

    let reject_all = Callback::new(move |_: ev::MouseEvent| {
        ConsentPreference::reject_all().save(&prefs);
        set_visible.set(false);
        toasts.info("Only essential cookies will be used");
    });

    let on_saved = Callback::new(move |_: ()| {
        set_customizing.set(false);
        set_visible.set(false);
    });

    view! {
        <Show when=move || visible.get()>
            <div class="fixed bottom-0 inset-x-0 z-40 p-4">
                <div class="max-w-4xl mx-auto bg-white rounded-xl shadow-2xl border border-gray-200 p-6">
                    <Show
                        when=move || customizing.get()
                        fallback=move || view! {
                            <div class="md:flex md:items-center md:justify-between gap-6">
                                <p class="text-gray-700 text-sm mb-4 md:mb-0">
                                    "We use cookies to keep the site working and, with your permission, to measure "
                                    "usage and campaigns. Read our "
                                    <a href="/cookies" class="text-emerald-600 underline">"cookie policy"</a>"."
                                </p>
                                <div class="flex flex-shrink-0 gap-2">
                                    <button
                                        class="px-4 py-2 text-sm border border-gray-300 rounded-lg hover:bg-gray-50"
                                        on:click=move |_| set_customizing.set(true)
                                    >
                                        "Customize"
                                    </button>
                                    <button
                                        class="px-4 py-2 text-sm border border-gray-300 rounded-lg hover:bg-gray-50"
                                        on:click=move |ev| reject_all.call(ev)
                                    >
                                        "Reject all"
                                    </button>
                                    <button
                                        class="px-4 py-2 text-sm bg-emerald-600 hover:bg-emerald-700 text-white rounded-lg"
                                        on:click=move |ev| accept_all.call(ev)
                                    >
                                        "Accept all"
                                    </button>
                                </div>
                            </div>
                        }
                    >
                        <ConsentPanel on_saved=on_saved/>
                    </Show>
                </div>
            </div>
        </Show>
    }
}

/// Per-category switches; essential is shown but locked on
#[component]
pub fn ConsentPanel(#[prop(into, optional)] on_saved: Option<Callback<()>>) -> impl IntoView {
    let prefs = use_preferences();
    let toasts = use_toasts();
    let choices = create_rw_signal(ConsentPreference::default());

    let load_prefs = prefs.clone();
    create_effect(move |_| {
        if let Some(stored) = ConsentPreference::load(&load_prefs) {
            choices.set(stored);
        }
    });

    let save = move |_: ev::MouseEvent| {
        let saved = choices.get_untracked().save(&prefs);
        choices.set(saved);
        toasts.success("Cookie preferences saved");
        if let Some(cb) = on_saved {
            cb.call(());
        }
    };

    view! {
        <div class="space-y-4">
            <h3 class="text-lg font-semibold text-gray-900">"Cookie preferences"</h3>
            {ConsentCategory::ALL.into_iter().map(|category| view! {
                <label class="flex items-start justify-between gap-4 py-3 border-b border-gray-100">
                    <div>
                        <p class="font-medium text-gray-900">
                            {category.title()}
                            {category.is_required().then(|| view! {
                                <span class="ml-2 text-xs text-gray-500">"(always on)"</span>
                            })}
                        </p>
                        <p class="text-sm text-gray-600">{category.description()}</p>
                    </div>
                    <input
                        type="checkbox"
                        class="mt-1 h-5 w-5 accent-emerald-600"
                        prop:checked=move || choices.with(|c| c.allows(category))
                        disabled=category.is_required()
                        on:change=move |_| choices.update(|c| c.toggle(category))
                    />
                </label>
            }).collect_view()}
            <div class="flex justify-end">
                <button
                    class="px-4 py-2 bg-emerald-600 hover:bg-emerald-700 text-white rounded-lg"
                    on:click=save
                >
                    "Save preferences"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vl_core::Preferences;

    #[test]
    fn test_banner_choice_survives_view_rebuilds() {
        let runtime = create_runtime();
        let prefs = Preferences::in_memory();
        let (visible, set_visible) = create_signal(true);

        let save_prefs = prefs.clone();
        let reject_all = Callback::new(move |_: ()| {
            ConsentPreference::reject_all().save(&save_prefs);
            set_visible.set(false);
        });

        // Every rebuilt fallback view captures its own copy of the handler
        let first_view = move || reject_all.call(());
        let second_view = move || reject_all.call(());
        first_view();
        set_visible.set(true);
        second_view();

        assert!(!visible.get_untracked());
        assert!(!ConsentPreference::needs_prompt(&prefs));
        runtime.dispose();
    }
}
