use std::{
    future::Future,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use super::{decode, Category, ContentItem, Decoded, LoadError, LoadState, Loaded};

/// Somewhere content bodies can be requested from, one category at a time.
pub trait ContentSource {
    fn fetch(&self, category: Category) -> impl Future<Output = Result<String, LoadError>>;
}

/// Turns the outcome of a content request into displayable items.
///
/// Failures and unusable bodies are logged and replaced by the category's
/// defaults; the result is never empty.
pub fn resolve<T: ContentItem>(body: Result<String, LoadError>) -> Loaded<T> {
    let category = T::CATEGORY;
    let body = match body {
        Ok(body) => body,
        Err(e) => {
            log::error!("couldn't load {category}, showing defaults: {e}");
            return Loaded::fallback();
        }
    };
    match decode::<T>(&body) {
        Decoded::Invalid => {
            log::warn!("{category} response is unusable, showing defaults");
            Loaded::fallback()
        }
        decoded => Loaded::live(decoded.into_items()).unwrap_or_else(|| {
            log::warn!("{category} response is empty, showing defaults");
            Loaded::fallback()
        }),
    }
}

/// Requests `T`'s category once and resolves the outcome.
pub async fn load<T, S>(source: &S) -> Loaded<T>
where
    T: ContentItem,
    S: ContentSource + ?Sized,
{
    resolve(source.fetch(T::CATEGORY).await)
}

/// Liveness of a mounted section. Closed when the section unmounts.
#[derive(Debug, Clone)]
pub struct SectionScope(Arc<AtomicBool>);

impl SectionScope {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn close(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for SectionScope {
    fn default() -> Self {
        Self::new()
    }
}

/// Loads `T` and hands the resulting state to `apply`, unless `scope` was
/// closed while the request was in flight. Returns whether `apply` ran.
pub async fn load_into<T, S, F>(source: &S, scope: &SectionScope, apply: F) -> bool
where
    T: ContentItem,
    S: ContentSource + ?Sized,
    F: FnOnce(LoadState<T>),
{
    let loaded = load::<T, S>(source).await;
    if !scope.is_active() {
        log::debug!("{} section closed before content arrived", T::CATEGORY);
        return false;
    }
    apply(LoadState::Loaded(loaded));
    true
}

#[cfg(test)]
mod tests {
    use std::{
        sync::Mutex,
        time::Duration,
    };

    use http::StatusCode;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::content::{defaults, BlogPost, Certification, Education, Experience, Project, SkillGroup};

    struct Fixed(Result<String, LoadError>);

    impl ContentSource for Fixed {
        async fn fetch(&self, _category: Category) -> Result<String, LoadError> {
            self.0.clone()
        }
    }

    fn body(s: &str) -> Fixed {
        Fixed(Ok(s.to_string()))
    }

    struct Slow {
        delay: Duration,
        body: String,
    }

    impl ContentSource for Slow {
        async fn fetch(&self, _category: Category) -> Result<String, LoadError> {
            tokio::time::sleep(self.delay).await;
            Ok(self.body.clone())
        }
    }

    struct Recording(Mutex<Vec<Category>>);

    impl ContentSource for Recording {
        async fn fetch(&self, category: Category) -> Result<String, LoadError> {
            self.0.lock().unwrap().push(category);
            Ok("[]".to_string())
        }
    }

    #[tokio::test]
    async fn test_valid_array_is_used_verbatim() {
        let loaded = load::<Project, _>(&body(r#"[{"id": 9, "name": "live"}]"#)).await;
        assert!(!loaded.is_fallback());
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.items()[0].name(), "live");
    }

    #[tokio::test]
    async fn test_empty_array_falls_back() {
        let loaded = load::<BlogPost, _>(&body("[]")).await;
        assert!(loaded.is_fallback());
        assert_eq!(loaded.into_items(), defaults::<BlogPost>());
    }

    #[tokio::test]
    async fn test_single_object_is_wrapped() {
        let loaded = load::<Experience, _>(&body(r#"{"title": "Only job"}"#)).await;
        assert!(!loaded.is_fallback());
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.items()[0].title(), "Only job");
    }

    #[tokio::test]
    async fn test_null_body_falls_back() {
        let loaded = load::<Education, _>(&body("null")).await;
        assert!(loaded.is_fallback());
        assert_eq!(loaded.into_items(), defaults::<Education>());
    }

    #[tokio::test]
    async fn test_status_failure_falls_back() {
        let source = Fixed(Err(LoadError::Status(StatusCode::INTERNAL_SERVER_ERROR)));
        let loaded = load::<Certification, _>(&source).await;
        assert!(loaded.is_fallback());
        assert!(!loaded.items().is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_falls_back() {
        let source = Fixed(Err(LoadError::Transport("connection refused".into())));
        let loaded = load::<SkillGroup, _>(&source).await;
        assert!(loaded.is_fallback());
        assert_eq!(loaded.into_items(), defaults::<SkillGroup>());
    }

    #[tokio::test]
    async fn test_array_of_unusable_elements_falls_back() {
        let loaded = load::<Project, _>(&body("[1, 2, 3]")).await;
        assert!(loaded.is_fallback());
    }

    #[test]
    fn test_live_data_with_loose_types_is_not_replaced() {
        let edu = resolve::<Education>(Ok(r#"[{"id": 1, "degree": "B.E. CSE", "gpa": 8.5}]"#.into()));
        assert!(!edu.is_fallback());
        assert_eq!(edu.items()[0].degree(), "B.E. CSE");

        let skills = resolve::<SkillGroup>(Ok(
            r#"[{"title": "Backend", "skills": [{"name": "Django", "level": "95.00"}]}]"#.into(),
        ));
        assert!(!skills.is_fallback());
        assert_eq!(skills.items()[0].skills[0].level(), 95);

        let posts = resolve::<BlogPost>(Ok(r#"[{"title": "Live post", "readTime": 5}]"#.into()));
        assert!(!posts.is_fallback());
        assert_eq!(posts.items()[0].title(), "Live post");
        assert_eq!(posts.items()[0].read_time(), "5");
    }

    #[tokio::test]
    async fn test_requests_the_item_category() {
        let source = Recording(Mutex::new(Vec::new()));
        let _ = load::<BlogPost, _>(&source).await;
        let _ = load::<Education, _>(&source).await;
        assert_eq!(
            *source.0.lock().unwrap(),
            vec![Category::Blogs, Category::Education]
        );
    }

    #[tokio::test]
    async fn test_load_into_applies_loaded_state() {
        let scope = SectionScope::new();
        let state = Mutex::new(LoadState::<Project>::Loading);
        let applied = load_into(&body("[]"), &scope, |s| *state.lock().unwrap() = s).await;
        assert!(applied);
        let state = state.into_inner().unwrap();
        assert!(state.loaded().is_some_and(|l| l.is_fallback()));
    }

    #[tokio::test]
    async fn test_closed_scope_discards_late_response() {
        let source = Slow {
            delay: Duration::from_millis(50),
            body: r#"[{"name": "late"}]"#.to_string(),
        };
        let scope = SectionScope::new();
        let writes = Mutex::new(Vec::<LoadState<Project>>::new());

        let (applied, _) = tokio::join!(
            load_into(&source, &scope, |s| writes.lock().unwrap().push(s)),
            async {
                tokio::time::sleep(Duration::from_millis(5)).await;
                scope.close();
            }
        );

        assert!(!applied);
        assert!(writes.lock().unwrap().is_empty());
    }

    #[test]
    fn test_scope_clones_share_liveness() {
        let scope = SectionScope::default();
        let other = scope.clone();
        assert!(other.is_active());
        scope.close();
        assert!(!other.is_active());
    }
}
