use leptos::{html, prelude::*, server_fn::codec::GetUrl};
use leptos_use::use_element_visibility;

use crate::content::{load_into, Category, ContentItem, ContentSource, LoadError, LoadState, SectionScope};

#[server(input = GetUrl, endpoint = "fetch_content")]
pub async fn fetch_content(category: Category) -> Result<String, ServerFnError> {
    use crate::content::remote;

    let source = remote::installed().ok_or_else(|| ServerFnError::new(LoadError::Unconfigured))?;
    source.fetch(category).await.map_err(|e| {
        tracing::warn!(%category, error = %e, "content fetch failed");
        ServerFnError::new(e)
    })
}

/// Requests content through the site's own server, which talks to the
/// content API on the browser's behalf.
struct ServerFnSource;

impl ContentSource for ServerFnSource {
    async fn fetch(&self, category: Category) -> Result<String, LoadError> {
        fetch_content(category)
            .await
            .map_err(|e| LoadError::Server(e.to_string()))
    }
}

/// Loads `T`'s category once per mount. Starts out `Loading` and always
/// ends `Loaded`; a response arriving after unmount is dropped.
pub fn use_content<T: ContentItem>() -> ReadSignal<LoadState<T>> {
    let (state, set_state) = signal(LoadState::<T>::Loading);
    let scope = SectionScope::new();
    on_cleanup({
        let scope = scope.clone();
        move || scope.close()
    });

    Effect::watch(
        || (),
        move |_, _, _| {
            let scope = scope.clone();
            leptos::task::spawn_local(async move {
                load_into::<T, _, _>(&ServerFnSource, &scope, |s| {
                    set_state.try_set(s);
                })
                .await;
            });
        },
        true,
    );

    state
}

#[component]
pub fn Section(
    id: &'static str,
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class="py-20 relative section-bg">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16">
                    <h2 class="text-4xl lg:text-5xl font-bold mb-6 font-display gradient-text">
                        {title}
                    </h2>
                    {subtitle
                        .map(|s| {
                            view! {
                                <p class="text-xl text-gray-300 max-w-2xl mx-auto font-body">{s}</p>
                            }
                        })}
                </div>
                {children()}
            </div>
        </section>
    }
}

#[component]
pub fn Placeholder(label: &'static str) -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto space-y-4 text-center">
            <p class="text-gray-300 font-body">{label}</p>
            <div class="loading-skeleton h-8 rounded"></div>
            <div class="loading-skeleton h-6 rounded w-3/4 mx-auto"></div>
            <div class="loading-skeleton h-8 rounded"></div>
        </div>
    }
}

/// Fades its children in while they are on screen.
///
/// `fallback` is only rendered as `data-fallback`; it marks default content
/// for a future visual indicator and nothing reads it yet.
#[component]
pub fn Reveal(#[prop(optional)] fallback: bool, children: Children) -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(el);
    view! {
        <div
            node_ref=el
            class="reveal"
            class:revealed=move || visible.get()
            data-fallback=fallback.to_string()
        >
            {children()}
        </div>
    }
}
