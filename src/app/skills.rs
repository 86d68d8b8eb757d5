use leptos::{either::Either, prelude::*};

use super::section::{use_content, Placeholder, Reveal, Section};
use crate::content::{ContentItem, LoadState, SkillGroup};

#[component]
pub fn SkillsSection() -> impl IntoView {
    let state = use_content::<SkillGroup>();
    view! {
        <Section
            id="skills"
            title="TECH SKILLS 🖥️"
            subtitle="The tools I reach for, and how well I know them"
        >
            {move || match state.get() {
                LoadState::Loading => Either::Left(view! { <Placeholder label="Loading skills..." /> }),
                LoadState::Loaded(loaded) => {
                    let fallback = loaded.is_fallback();
                    let items = loaded.into_items();
                    Either::Right(
                        view! {
                            <Reveal fallback>
                                <div class="grid lg:grid-cols-3 gap-8">
                                    <For
                                        each=move || items.clone().into_iter().enumerate()
                                        key=|(i, item)| (*i, item.key())
                                        children=|(_, group)| view! { <SkillCard group /> }
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
fn SkillCard(group: SkillGroup) -> impl IntoView {
    view! {
        <div class="skill-card card p-8">
            <h3 class="text-2xl font-bold text-green-400 mb-6 text-center font-display">
                {group.title().to_string()}
            </h3>
            <div class="space-y-6">
                {group
                    .skills
                    .iter()
                    .map(|skill| {
                        let level = skill.level();
                        view! {
                            <div class="skill-item">
                                <div class="flex items-center justify-between mb-2">
                                    <div class="flex items-center gap-2">
                                        <span class="text-xl">{skill.icon().to_string()}</span>
                                        <span class="text-white font-medium font-body">
                                            {skill.name().to_string()}
                                        </span>
                                    </div>
                                    <span class="text-green-400 font-bold font-display">
                                        {format!("{level}%")}
                                    </span>
                                </div>
                                <div class="skill-bar h-3 bg-gray-700 rounded-full overflow-hidden">
                                    <div
                                        class="skill-bar-fill h-full rounded-full"
                                        style=format!("--level: {level}%")
                                    ></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
