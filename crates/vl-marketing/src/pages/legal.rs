//! Privacy, terms and cookie policy pages

use leptos::*;

use crate::components::ConsentPanel;

#[component]
fn LegalLayout(title: &'static str, updated: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="py-16 bg-white">
            <div class="container mx-auto px-4">
                <article class="max-w-3xl mx-auto prose prose-gray">
                    <h1 class="text-4xl font-bold text-gray-900 mb-2">{title}</h1>
                    <p class="text-sm text-gray-500 mb-10">"Last updated " {updated}</p>
                    {children()}
                </article>
            </div>
        </div>
    }
}

#[component]
fn Clause(heading: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <section class="mb-8">
            <h2 class="text-xl font-semibold text-gray-900 mb-2">{heading}</h2>
            <p class="text-gray-700">{body}</p>
        </section>
    }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <LegalLayout title="Privacy Policy" updated="March 1, 2026">
            <Clause
                heading="What we collect"
                body="Account details you give us, billing information handled by our payment processor, and usage metadata about backup jobs. We never inspect the contents of your backups."
            />
            <Clause
                heading="How we use it"
                body="To run the service, bill you, answer support requests and, if you opt in, send product news."
            />
            <Clause
                heading="Where it lives"
                body="Account data is stored in the EU. Backup data stays in the region you select."
            />
            <Clause
                heading="Your rights"
                body="You can export or delete your account data at any time from Settings or by writing to support."
            />
        </LegalLayout>
    }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <LegalLayout title="Terms of Service" updated="March 1, 2026">
            <Clause
                heading="The service"
                body="Vaultline provides scheduled, encrypted backups of the sources you connect. You remain responsible for choosing what to back up."
            />
            <Clause
                heading="Accounts"
                body="Keep your credentials safe. You are responsible for activity under your account."
            />
            <Clause
                heading="Billing"
                body="Paid plans renew automatically each billing period until cancelled. Fees are not refundable except where required by law."
            />
            <Clause
                heading="Cancellation"
                body="You can cancel at any time. Snapshots remain restorable for 30 days after cancellation."
            />
        </LegalLayout>
    }
}

#[component]
pub fn CookiesPage() -> impl IntoView {
    view! {
        <LegalLayout title="Cookie Policy" updated="March 1, 2026">
            <Clause
                heading="What we store"
                body="Essential cookies keep you signed in and remember your consent choice. Optional cookies help us understand how the site is used and measure campaigns."
            />
            <Clause
                heading="Your choice"
                body="Optional categories are off until you allow them. Change your mind at any time below."
            />
            <div class="not-prose bg-gray-50 rounded-xl p-6 mt-8">
                <ConsentPanel/>
            </div>
        </LegalLayout>
    }
}
