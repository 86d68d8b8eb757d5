use leptos::{either::Either, prelude::*};

use super::section::{use_content, Placeholder, Reveal, Section};
use crate::content::{ContentItem, Experience, LoadState};

#[component]
pub fn ExperienceSection() -> impl IntoView {
    let state = use_content::<Experience>();
    view! {
        <Section id="experience" title="EXPERIENCE 💼" subtitle="Where I have worked">
            {move || match state.get() {
                LoadState::Loading => {
                    Either::Left(view! { <Placeholder label="Loading experience..." /> })
                }
                LoadState::Loaded(loaded) => {
                    let fallback = loaded.is_fallback();
                    let items = loaded.into_items();
                    Either::Right(
                        view! {
                            <Reveal fallback>
                                <div class="max-w-4xl mx-auto space-y-8 timeline">
                                    <For
                                        each=move || items.clone().into_iter().enumerate()
                                        key=|(i, item)| (*i, item.key())
                                        children=|(_, exp)| view! { <ExperienceCard exp /> }
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
fn ExperienceCard(exp: Experience) -> impl IntoView {
    view! {
        <div class="experience-card card p-8 relative">
            <div class="flex items-start gap-4 mb-4">
                <div class="text-4xl">{exp.icon().to_string()}</div>
                <div>
                    <h3 class="text-2xl font-bold text-white font-display">
                        {exp.title().to_string()}
                    </h3>
                    <p class="text-green-400 text-lg font-body">{exp.company().to_string()}</p>
                    <div class="flex flex-wrap gap-4 text-sm text-gray-400 mt-2">
                        <span>"📅 " {exp.period().to_string()}</span>
                        <span>"📍 " {exp.location().to_string()}</span>
                    </div>
                </div>
            </div>
            <p class="text-gray-300 mb-4 leading-relaxed font-body">
                {exp.description().to_string()}
            </p>
            <ul class="space-y-2">
                {exp
                    .achievements
                    .iter()
                    .map(|a| {
                        view! {
                            <li class="flex items-start gap-2 text-gray-300 text-sm">
                                <span class="text-green-400">"▹"</span>
                                {a.clone()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
