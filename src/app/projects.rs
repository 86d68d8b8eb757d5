use leptos::{either::Either, prelude::*};

use super::section::{use_content, Placeholder, Reveal, Section};
use crate::content::{ContentItem, LoadState, Project};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let state = use_content::<Project>();
    view! {
        <Section id="projects" title="PROJECTS 🚀" subtitle="Things I have built and shipped">
            {move || match state.get() {
                LoadState::Loading => {
                    Either::Left(view! { <Placeholder label="Loading projects..." /> })
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
                                        children=|(_, project)| view! { <ProjectCard project /> }
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
fn ProjectCard(project: Project) -> impl IntoView {
    let homepage = project.homepage().map(|href| {
        let href = href.to_string();
        view! {
            <a
                href=href
                target="_blank"
                rel="noopener noreferrer"
                class="icon-button"
                aria-label="Live site"
            >
                "↗"
            </a>
        }
    });
    view! {
        <div class="project-card card tilt p-6 group">
            <div class="flex items-start justify-between mb-4">
                <div class="flex items-center gap-2">
                    <div
                        class="w-3 h-3 rounded-full"
                        style=format!("background-color: {}", project.language_color())
                    ></div>
                    <span class="text-sm text-gray-400 font-display">
                        {project.language().to_string()}
                    </span>
                </div>
                <div class="flex gap-2">
                    <a
                        href=project.repo_url().to_string()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="icon-button"
                        aria-label="Source code"
                    >
                        <i class="devicon-github-plain"></i>
                    </a>
                    {homepage}
                </div>
            </div>
            <h3 class="text-xl font-bold text-white mb-3 group-hover:text-green-400 transition-colors duration-300 font-display">
                {project.name().to_string()}
            </h3>
            <p class="text-gray-300 mb-4 text-sm leading-relaxed font-body">
                {project.description().to_string()}
            </p>
            <div class="flex flex-wrap gap-2 mb-4">
                {project
                    .topics()
                    .iter()
                    .map(|topic| view! { <span class="tag">{topic.clone()}</span> })
                    .collect_view()}
            </div>
            <div class="flex items-center gap-4 text-sm text-gray-400">
                <span class="text-yellow-400">"★ " {project.stars()}</span>
                <span class="text-blue-400">"⑂ " {project.forks()}</span>
            </div>
        </div>
    }
}
