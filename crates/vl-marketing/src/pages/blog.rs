//! Blog index

use leptos::*;
use vl_core::content::{BlogCategory, BLOG_POSTS};
use vl_core::filter::filter_records;
use vl_core::{FilterCriteria, VisibleWindow};

use crate::components::*;

#[component]
pub fn BlogPage() -> impl IntoView {
    let criteria = create_rw_signal(FilterCriteria::<BlogCategory>::default());
    let window = create_rw_signal(VisibleWindow::default());

    let matching = create_memo(move |_| criteria.with(|c| filter_records(BLOG_POSTS, c)));
    let has_more = Signal::derive(move || {
        let total = matching.with(|posts| posts.len());
        window.with(|w| w.has_more(total))
    });
    let chip_options = BlogCategory::ALL.iter().map(|c| (*c, c.label())).collect::<Vec<_>>();

    view! {
        <div>
            <section class="bg-gray-900 text-white py-16">
                <div class="container mx-auto px-4 text-center">
                    <h1 class="text-4xl md:text-5xl font-bold mb-4">"The Vaultline Blog"</h1>
                    <p class="text-xl text-gray-300">"Backup engineering, product news and hard-won recovery lessons."</p>
                </div>
            </section>

            <section class="py-12 bg-gray-50">
                <div class="container mx-auto px-4 max-w-6xl">
                    <div class="space-y-4 mb-10">
                        <SearchInput criteria=criteria placeholder="Search articles"/>
                        <CategoryChips criteria=criteria options=chip_options/>
                    </div>

                    {move || {
                        let posts = matching.get();
                        if posts.is_empty() {
                            return view! {
                                <EmptyState
                                    message="No articles match your search."
                                    on_reset=move |_: ()| criteria.update(|c| c.reset())
                                />
                            }
                            .into_view();
                        }
                        let shown = window.with(|w| w.visible(&posts).to_vec());
                        view! {
                            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                                {shown.into_iter().map(|post| view! { <BlogCard post=post/> }).collect_view()}
                            </div>
                        }
                        .into_view()
                    }}

                    <LoadMore visible=has_more on_click=move |_: ()| window.update(|w| w.load_more())/>
                </div>
            </section>
        </div>
    }
}
