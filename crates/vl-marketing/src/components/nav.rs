//! Marketing navigation component

use leptos::*;

const LINKS: &[(&str, &str)] = &[
    ("/pricing", "Pricing"),
    ("/security", "Security"),
    ("/guides", "Guides"),
    ("/blog", "Blog"),
    ("/help", "Help"),
];

const START_FREE: (&str, &str) = ("/signup", "Start Free");

#[component]
pub fn MarketingNav() -> impl IntoView {
    let (mobile_open, set_mobile_open) = create_signal(false);

    view! {
        <nav class="bg-white shadow-sm sticky top-0 z-50">
            <div class="container mx-auto px-4">
                <div class="flex justify-between h-16">
                    // Logo
                    <div class="flex items-center">
                        <a href="/" class="flex items-center">
                            <span class="text-2xl mr-2">"🛡"</span>
                            <span class="text-xl font-bold text-gray-900">"Vaultline"</span>
                        </a>
                    </div>

                    // Desktop Nav
                    <div class="hidden md:flex items-center space-x-8">
                        {LINKS.iter().map(|(href, label)| view! {
                            <a href=*href class="text-gray-600 hover:text-gray-900 transition">{*label}</a>
                        }).collect_view()}
                        <div class="flex items-center space-x-4 ml-4">
                            <a href=START_FREE.0 class="px-4 py-2 bg-emerald-600 hover:bg-emerald-700 text-white font-medium rounded-lg transition">
                                {START_FREE.1}
                            </a>
                        </div>
                    </div>

                    // Mobile menu button
                    <div class="md:hidden flex items-center">
                        <button
                            class="p-2 rounded-md text-gray-600 hover:text-gray-900 hover:bg-gray-100"
                            aria-label="Toggle menu"
                            on:click=move |_| set_mobile_open.update(|v| *v = !*v)
                        >
                            <Show
                                when=move || mobile_open.get()
                                fallback=|| view! {
                                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                    </svg>
                                }
                            >
                                <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                                </svg>
                            </Show>
                        </button>
                    </div>
                </div>
            </div>

            // Mobile menu
            <Show when=move || mobile_open.get()>
                <div class="md:hidden border-t border-gray-200">
                    <div class="px-4 py-4 space-y-3">
                        {LINKS.iter().map(|(href, label)| view! {
                            <a
                                href=*href
                                class="block text-gray-600 hover:text-gray-900"
                                on:click=move |_| set_mobile_open.set(false)
                            >
                                {*label}
                            </a>
                        }).collect_view()}
                        <div class="pt-4 border-t border-gray-200 space-y-3">
                            <a href=START_FREE.0 class="block w-full text-center px-4 py-2 bg-emerald-600 text-white font-medium rounded-lg">
                                {START_FREE.1}
                            </a>
                        </div>
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_has_no_account_recovery_link() {
        let targets = LINKS.iter().chain(std::iter::once(&START_FREE));
        for (href, label) in targets {
            assert!(href.starts_with('/'));
            assert_ne!(*href, "/forgot-password");
            assert!(!label.eq_ignore_ascii_case("sign in"));
        }
        assert_eq!(START_FREE.0, "/signup");
    }
}
