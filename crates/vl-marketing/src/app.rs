//! Main application component

use leptos::*;
use leptos_router::*;
use crate::pages::*;
use crate::components::*;
use crate::config::SiteConfig;
use crate::storage::provide_preferences;

#[component]
pub fn App() -> impl IntoView {
    provide_context(SiteConfig::default());
    provide_preferences();
    provide_toasts();

    view! {
        <Router>
            <div class="min-h-screen bg-white">
                <MarketingNav/>
                <main>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/pricing" view=PricingPage/>
                        <Route path="/security" view=SecurityPage/>
                        <Route path="/privacy" view=PrivacyPage/>
                        <Route path="/terms" view=TermsPage/>
                        <Route path="/cookies" view=CookiesPage/>
                        <Route path="/help" view=HelpCenterPage/>
                        <Route path="/jhelp/:topic" view=HelpTopicPage/>
                        <Route path="/blog" view=BlogPage/>
                        <Route path="/guides" view=GuidesPage/>
                        <Route path="/integrations" view=IntegrationsPage/>
                        <Route path="/careers" view=CareersPage/>
                        <Route path="/docs" view=DocsPage/>
                        <Route path="/signup" view=SignupPage/>
                        <Route path="/forgot-password" view=ForgotPasswordPage/>
                        <Route path="/select-plan" view=SelectPlanPage/>
                        <Route path="/*any" view=NotFound/>
                    </Routes>
                </main>
                <Footer/>
                <CookieBanner/>
                <ToastHost/>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="py-32 text-center">
            <h1 class="text-4xl font-bold text-gray-900 mb-4">"Page not found"</h1>
            <p class="text-gray-600 mb-8">"The page you're looking for has moved or never existed."</p>
            <a href="/" class="px-6 py-3 bg-emerald-600 hover:bg-emerald-700 text-white rounded-lg">"Back home"</a>
        </section>
    }
}
