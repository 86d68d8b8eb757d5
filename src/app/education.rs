use leptos::{either::Either, prelude::*};

use super::section::{use_content, Placeholder, Reveal, Section};
use crate::content::{ContentItem, Education, LoadState};

#[component]
pub fn EducationSection() -> impl IntoView {
    let state = use_content::<Education>();
    view! {
        <Section id="education" title="EDUCATION 🎓">
            {move || match state.get() {
                LoadState::Loading => {
                    Either::Left(view! { <Placeholder label="Loading education..." /> })
                }
                LoadState::Loaded(loaded) => {
                    let fallback = loaded.is_fallback();
                    let items = loaded.into_items();
                    Either::Right(
                        view! {
                            <Reveal fallback>
                                <div class="max-w-4xl mx-auto space-y-8">
                                    <For
                                        each=move || items.clone().into_iter().enumerate()
                                        key=|(i, item)| (*i, item.key())
                                        children=|(_, edu)| view! { <EducationCard edu /> }
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
fn EducationCard(edu: Education) -> impl IntoView {
    let gpa = edu
        .gpa()
        .map(|gpa| {
            let gpa = gpa.to_string();
            view! { <span class="tag">"GPA " {gpa}</span> }
        });
    view! {
        <div class="education-card card p-8">
            <div class="flex items-start justify-between gap-4 mb-4">
                <div>
                    <h3 class="text-2xl font-bold text-white font-display">
                        {edu.degree().to_string()}
                    </h3>
                    <p class="text-green-400 text-lg font-body">
                        {edu.institution().to_string()}
                    </p>
                    <p class="text-sm text-gray-400 mt-1">{edu.location_line()}</p>
                </div>
                <div class=format!(
                    "w-12 h-12 bg-gradient-to-br {} rounded-full flex items-center justify-center text-xl flex-shrink-0",
                    edu.color(),
                )>{edu.icon().to_string()}</div>
            </div>
            <p class="text-gray-300 mb-4 leading-relaxed font-body">
                {edu.description().to_string()}
            </p>
            <ul class="space-y-2 mb-4">
                {edu
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
            {gpa}
        </div>
    }
}
