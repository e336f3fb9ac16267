//! Security and compliance page

use leptos::*;
use vl_core::content::CERTIFICATES;

use crate::components::*;

#[component]
pub fn SecurityPage() -> impl IntoView {
    view! {
        <div>
            <section class="bg-gradient-to-br from-gray-900 to-gray-800 text-white py-20">
                <div class="container mx-auto px-4">
                    <div class="max-w-3xl mx-auto text-center">
                        <h1 class="text-4xl md:text-5xl font-bold mb-6">"Security Without Compromise"</h1>
                        <p class="text-xl text-gray-300">
                            "Your backups are encrypted before they leave your infrastructure and stay that way."
                        </p>
                    </div>
                </div>
            </section>

            <section class="py-20 bg-white">
                <div class="container mx-auto px-4">
                    <div class="grid md:grid-cols-3 gap-8 max-w-6xl mx-auto">
                        <FeatureCard
                            icon="🔑"
                            title="Your keys, your data"
                            description="Encryption keys are derived on your machines. Vaultline staff cannot read your backups."
                        />
                        <FeatureCard
                            icon="🌍"
                            title="Regional residency"
                            description="Choose the EU, US or APAC region at sign-up. Data stays there unless you replicate it."
                        />
                        <FeatureCard
                            icon="🛰"
                            title="Immutable copies"
                            description="Object-lock storage keeps snapshots safe from deletion, even with stolen credentials."
                        />
                    </div>
                </div>
            </section>

            <section class="py-20 bg-gray-50">
                <div class="container mx-auto px-4">
                    <h2 class="text-3xl font-bold text-gray-900 text-center mb-12">"Certifications and Compliance"</h2>
                    <div class="grid md:grid-cols-2 gap-6 max-w-4xl mx-auto">
                        {CERTIFICATES.iter().map(|cert| view! {
                            <div class="bg-white rounded-xl shadow p-6">
                                <h3 class="text-xl font-semibold text-gray-900">{cert.name}</h3>
                                <p class="text-sm text-emerald-600 mb-3">{cert.issuer}</p>
                                <p class="text-gray-600">{cert.description}</p>
                            </div>
                        }).collect_view()}
                    </div>
                    <p class="text-center text-gray-600 mt-12">
                        "Need our SOC 2 report or a signed DPA? "
                        <a href="/help" class="text-emerald-600 underline">"Ask the help center"</a>
                        "."
                    </p>
                </div>
            </section>
        </div>
    }
}
