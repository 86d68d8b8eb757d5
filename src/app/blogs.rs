use leptos::{either::Either, prelude::*};

use super::{
    section::{use_content, Placeholder, Reveal, Section},
    timer::TimerSlot,
};
use crate::{
    content::{
        items::{CARD_TAGS, CAROUSEL_TAGS},
        BlogPost, ContentItem, LoadState,
    },
    rotation::Rotation,
};

/// Sleeps until the rotation next needs attention, then lets that much time
/// pass and goes back to sleep.
fn drive(rotation: RwSignal<Rotation>, slot: TimerSlot) {
    let Some(delay) = rotation.try_with_untracked(Rotation::next_wakeup).flatten() else {
        slot.cancel();
        return;
    };
    slot.arm(delay, move || {
        if rotation.try_update(|r| r.elapse(delay)).is_some() {
            drive(rotation, slot);
        }
    });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    Carousel,
    Grid,
}

#[component]
pub fn BlogsSection() -> impl IntoView {
    let state = use_content::<BlogPost>();
    let layout = RwSignal::new(Layout::Carousel);
    view! {
        <Section id="blogs" title="BLOGS ✍️" subtitle="Notes on what I have been learning">
            <div class="flex justify-center gap-2 mb-8">
                <LayoutButton layout current=Layout::Carousel label="Featured" />
                <LayoutButton layout current=Layout::Grid label="All posts" />
            </div>
            {move || match state.get() {
                LoadState::Loading => Either::Left(view! { <Placeholder label="Loading blogs..." /> }),
                LoadState::Loaded(loaded) => {
                    let fallback = loaded.is_fallback();
                    let posts = loaded.into_items();
                    // switching layouts unmounts the carousel and its timer
                    let body = move || match layout.get() {
                        Layout::Carousel => Either::Left(view! { <Carousel posts=posts.clone() /> }),
                        Layout::Grid => Either::Right(view! { <Grid posts=posts.clone() /> }),
                    };
                    Either::Right(view! { <Reveal fallback>{body}</Reveal> })
                }
            }}
        </Section>
    }
}

#[component]
fn LayoutButton(layout: RwSignal<Layout>, current: Layout, label: &'static str) -> impl IntoView {
    view! {
        <button
            class="layout-toggle"
            class:active=move || layout.get() == current
            on:click=move |_| layout.set(current)
        >
            {label}
        </button>
    }
}

#[component]
fn Grid(posts: Vec<BlogPost>) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
            <For
                each=move || posts.clone().into_iter().enumerate()
                key=|(i, post)| (*i, post.key())
                children=|(_, post)| view! { <BlogGridCard post /> }
            />
        </div>
    }
}

#[component]
fn Carousel(posts: Vec<BlogPost>) -> impl IntoView {
    let len = posts.len();
    let rotation = RwSignal::new(Rotation::new(len));
    let slot = TimerSlot::new();

    Effect::watch(
        || (),
        move |_, _, _| {
            if rotation.try_update(Rotation::start).unwrap_or(false) {
                drive(rotation, slot);
            }
        },
        true,
    );

    let navigate = move |f: &dyn Fn(&mut Rotation)| {
        rotation.update(|r| f(r));
        drive(rotation, slot);
    };
    let current = move || rotation.with(Rotation::current);
    let controls = (len > 1).then(|| {
        view! {
            <button
                class="carousel-arrow left-0"
                aria-label="Previous post"
                on:click=move |_| navigate(&Rotation::previous)
            >
                "‹"
            </button>
            <button
                class="carousel-arrow right-0"
                aria-label="Next post"
                on:click=move |_| navigate(&Rotation::next)
            >
                "›"
            </button>
            <div class="flex justify-center gap-2 mt-8">
                {(0..len)
                    .map(|i| {
                        view! {
                            <button
                                class="carousel-dot"
                                class:active=move || current() == i
                                aria-label=format!("Show post {}", i + 1)
                                on:click=move |_| {
                                    navigate(&|r: &mut Rotation| {
                                        r.go_to(i);
                                    })
                                }
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        }
    });

    view! {
        <div class="relative max-w-4xl mx-auto">
            <div class="overflow-hidden rounded-xl">
                <div
                    class="flex transition-transform duration-500 ease-in-out"
                    style:transform=move || format!("translateX(-{}%)", current() * 100)
                >
                    {posts.into_iter().map(|post| view! { <BlogCard post /> }).collect_view()}
                </div>
            </div>
            {controls}
        </div>
    }
}

#[component]
fn BlogCard(post: BlogPost) -> impl IntoView {
    view! {
        <article class="blog-card card w-full flex-shrink-0 overflow-hidden">
            <div class="relative h-64 overflow-hidden">
                <img
                    src=post.image().to_string()
                    alt=post.title().to_string()
                    class="w-full h-full object-cover"
                    loading="lazy"
                />
                <CategoryBadge post=post.clone() />
            </div>
            <div class="p-8">
                <div class="flex flex-wrap gap-4 text-sm text-gray-400 mb-4">
                    <span>"📅 " {post.date_label()}</span>
                    <span>"⏱ " {post.read_time().to_string()}</span>
                </div>
                <h3 class="text-2xl font-bold text-white mb-4 font-display">
                    {post.title().to_string()}
                </h3>
                <p class="text-gray-300 mb-6 leading-relaxed font-body">
                    {post.excerpt().to_string()}
                </p>
                <div class="flex flex-wrap items-center justify-between gap-4">
                    <div class="flex flex-wrap gap-2">
                        {post
                            .tags(CAROUSEL_TAGS)
                            .iter()
                            .map(|tag| view! { <span class="tag">"#" {tag.clone()}</span> })
                            .collect_view()}
                    </div>
                    <a
                        href=post.url().to_string()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="button-primary"
                    >
                        "Read More"
                    </a>
                </div>
            </div>
        </article>
    }
}

#[component]
fn CategoryBadge(post: BlogPost) -> impl IntoView {
    view! {
        <span class=format!(
            "absolute top-4 left-4 px-3 py-1 rounded-full text-xs font-bold text-white font-display {}",
            post.category_classes(),
        )>{post.category().to_string()}</span>
    }
}

#[component]
fn BlogGridCard(post: BlogPost) -> impl IntoView {
    view! {
        <article class="blog-card card tilt overflow-hidden group">
            <div class="relative overflow-hidden">
                <img
                    src=post.image().to_string()
                    alt=post.title().to_string()
                    class="w-full h-48 object-cover transition-transform duration-300 group-hover:scale-110"
                    loading="lazy"
                />
                <CategoryBadge post=post.clone() />
            </div>
            <div class="p-6">
                <h3 class="text-xl font-bold text-white mb-3 line-clamp-2 group-hover:text-green-400 transition-colors font-display">
                    {post.title().to_string()}
                </h3>
                <p class="text-gray-300 mb-4 text-sm leading-relaxed line-clamp-3 font-body">
                    {post.excerpt().to_string()}
                </p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {post
                        .tags(CARD_TAGS)
                        .iter()
                        .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
                        .collect_view()}
                </div>
                <div class="flex items-center justify-between text-xs text-gray-400">
                    <div class="flex items-center gap-4">
                        <span>"📅 " {post.date_label()}</span>
                        <span>"⏱ " {post.read_time().to_string()}</span>
                    </div>
                    <a
                        href=post.url().to_string()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-green-400 hover:text-green-300 transition-colors"
                    >
                        "Read"
                    </a>
                </div>
            </div>
        </article>
    }
}
