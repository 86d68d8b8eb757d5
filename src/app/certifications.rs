use leptos::{either::Either, prelude::*};

use super::section::{use_content, Placeholder, Reveal, Section};
use crate::content::{ContentItem, Certification, LoadState};

#[component]
pub fn CertificationsSection() -> impl IntoView {
    let state = use_content::<Certification>();
    view! {
        <Section id="certifications" title="CERTIFICATIONS 🏆">
            {move || match state.get() {
                LoadState::Loading => {
                    Either::Left(view! { <Placeholder label="Loading certifications..." /> })
                }
                LoadState::Loaded(loaded) => {
                    let fallback = loaded.is_fallback();
                    let items = loaded.into_items();
                    Either::Right(
                        view! {
                            <Reveal fallback>
                                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                                    <For
                                        each=move || items.clone().into_iter().enumerate()
                                        key=|(i, item)| (*i, item.key())
                                        children=|(_, cert)| view! { <CertificationCard cert /> }
                                    />
                                </div>
                            </Reveal>
                        },
                    )
                }
            }}
        </Section>
    }
}

#[component]
fn CertificationCard(cert: Certification) -> impl IntoView {
    let color = cert.color().to_string();
    view! {
        <div class="cert-card card p-6 relative overflow-hidden">
            <div class=format!(
                "absolute top-0 right-0 w-20 h-20 bg-gradient-to-br {color} opacity-20 rounded-bl-full",
            )></div>
            <div class="flex items-center justify-between mb-4">
                <div class=format!(
                    "w-16 h-16 bg-gradient-to-br {color} rounded-full flex items-center justify-center text-2xl",
                )>{cert.icon().to_string()}</div>
                <a
                    href=cert.credential_url().to_string()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="icon-button"
                    aria-label="View credential"
                >
                    "↗"
                </a>
            </div>
            <h3 class="text-xl font-bold text-white mb-2 font-display">
                {cert.title().to_string()}
            </h3>
            <p class="text-green-400 mb-3 font-body">{cert.issuer().to_string()}</p>
            <p class="text-gray-300 text-sm mb-4 font-body">{cert.description().to_string()}</p>
            <div class="text-sm text-gray-400">"📅 " {cert.date().to_string()}</div>
        </div>
    }
}
