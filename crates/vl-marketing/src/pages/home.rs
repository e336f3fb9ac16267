//! Home page

use leptos::*;
use vl_core::content::{FEATURES, TESTIMONIALS};

use crate::components::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div>
            // Hero Section
            <section class="bg-gradient-to-br from-gray-900 via-emerald-900 to-gray-900 text-white">
                <div class="container mx-auto px-4 py-24">
                    <div class="max-w-4xl mx-auto text-center">
                        <h1 class="text-5xl md:text-6xl font-bold mb-6">
                            "Backups You Never "
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-emerald-400 to-teal-300">
                                "Think About"
                            </span>
                        </h1>
                        <p class="text-xl md:text-2xl text-gray-300 mb-8">
                            "Vaultline schedules, encrypts and verifies backups of your databases, servers "
                            "and SaaS tools, then restores them in minutes when you need them."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center">
                            <a href="/signup" class="px-8 py-4 bg-emerald-500 hover:bg-emerald-400 text-white font-semibold rounded-lg transition">
                                "Start Free"
                            </a>
                            <a href="/pricing" class="px-8 py-4 bg-white/10 hover:bg-white/20 text-white font-semibold rounded-lg border border-white/30 transition">
                                "See Pricing"
                            </a>
                        </div>
                    </div>
                </div>
            </section>

            // Stats
            <section class="py-12 bg-white border-b border-gray-100">
                <div class="container mx-auto px-4">
                    <div class="grid grid-cols-2 md:grid-cols-4 gap-8">
                        <StatCard value="12k+" label="Teams protected"/>
                        <StatCard value="99.99%" label="Restore success rate"/>
                        <StatCard value="40+" label="Supported sources"/>
                        <StatCard value="< 5 min" label="Median restore time"/>
                    </div>
                </div>
            </section>

            // Features
            <section class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center mb-16">
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-4">"Everything a Backup Should Be"</h2>
                        <p class="text-lg text-gray-600">
                            "Set it up once. Vaultline handles the schedule, the storage and the proof that it worked."
                        </p>
                    </div>
                    <div class="grid md:grid-cols-3 gap-8">
                        {FEATURES.iter().map(|f| view! {
                            <FeatureCard icon=f.icon title=f.title description=f.description/>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // How It Works
            <section class="py-20 bg-white">
                <div class="container mx-auto px-4">
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 text-center mb-16">"How It Works"</h2>
                    <div class="grid md:grid-cols-3 gap-12 max-w-5xl mx-auto">
                        <StepCard
                            number="1"
                            title="Connect"
                            description="Add a database, server or SaaS account with read-only credentials."
                        />
                        <StepCard
                            number="2"
                            title="Schedule"
                            description="Pick a frequency and retention policy, or start from a recommended preset."
                        />
                        <StepCard
                            number="3"
                            title="Relax"
                            description="Every backup is encrypted, verified and ready for one-click restore."
                        />
                    </div>
                </div>
            </section>

            // Testimonials
            <section class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900 text-center mb-16">"Trusted by Busy Teams"</h2>
                    <div class="grid md:grid-cols-3 gap-8">
                        {TESTIMONIALS.iter().map(|t| view! {
                            <TestimonialCard quote=t.quote author=t.author role=t.role/>
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // CTA
            <section class="py-20 bg-gradient-to-r from-emerald-600 to-teal-600 text-white">
                <div class="container mx-auto px-4 text-center">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Your First Backup Is Five Minutes Away"</h2>
                    <p class="text-xl text-emerald-100 mb-8">"Free plan, no credit card required."</p>
                    <a href="/signup" class="inline-block px-8 py-4 bg-white text-emerald-700 font-semibold rounded-lg hover:bg-gray-100 transition">
                        "Create Your Account"
                    </a>
                </div>
            </section>
        </div>
    }
}
