//! Setup guides

use leptos::*;
use vl_core::content::{GuideCategory, SETUP_GUIDES};
use vl_core::filter::filter_records;
use vl_core::FilterCriteria;

use crate::components::*;

#[component]
pub fn GuidesPage() -> impl IntoView {
    let criteria = create_rw_signal(FilterCriteria::<GuideCategory>::default());
    let guides = move || criteria.with(|c| filter_records(SETUP_GUIDES, c));
    let chip_options = GuideCategory::ALL.iter().map(|c| (*c, c.label())).collect::<Vec<_>>();

    view! {
        <div>
            <section class="bg-gradient-to-br from-gray-900 to-gray-800 text-white py-16">
                <div class="container mx-auto px-4 text-center">
                    <h1 class="text-4xl md:text-5xl font-bold mb-4">"Setup Guides"</h1>
                    <p class="text-xl text-gray-300">"Step-by-step instructions for every source Vaultline protects."</p>
                </div>
            </section>

            <section class="py-12 bg-gray-50">
                <div class="container mx-auto px-4 max-w-5xl">
                    <div class="space-y-4 mb-10">
                        <SearchInput criteria=criteria placeholder="Search guides, e.g. postgres"/>
                        <CategoryChips criteria=criteria options=chip_options/>
                    </div>
                    {move || {
                        let matching = guides();
                        if matching.is_empty() {
                            view! {
                                <EmptyState
                                    message="No guides match your search."
                                    on_reset=move |_: ()| criteria.update(|c| c.reset())
                                />
                            }
                            .into_view()
                        } else {
                            view! {
                                <div class="grid md:grid-cols-2 gap-6">
                                    {matching.into_iter().map(|guide| view! { <GuideCard guide=guide/> }).collect_view()}
                                </div>
                            }
                            .into_view()
                        }
                    }}
                </div>
            </section>
        </div>
    }
}
