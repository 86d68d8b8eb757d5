mod decode;
mod defaults;
#[cfg(feature = "ssr")]
pub mod remote;
pub mod items;
mod lenient;
mod loader;

use std::{fmt, str::FromStr, time::Duration};

use ::http::StatusCode;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

pub use decode::{decode, Decoded};
pub use defaults::{defaults, DefaultContent};
pub use items::{BlogPost, Certification, Education, Experience, ItemId, Project, Skill, SkillGroup};
pub use loader::{load, load_into, resolve, ContentSource, SectionScope};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Skills,
    Projects,
    Experience,
    Certifications,
    Blogs,
    Education,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Skills,
        Category::Projects,
        Category::Experience,
        Category::Certifications,
        Category::Blogs,
        Category::Education,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Skills => "skills",
            Category::Projects => "projects",
            Category::Experience => "experience",
            Category::Certifications => "certifications",
            Category::Blogs => "blogs",
            Category::Education => "education",
        }
    }

    /// Path of the category's resource, relative to the content API base.
    pub fn default_path(&self) -> &'static str {
        match self {
            Category::Skills => "skills/",
            Category::Projects => "projects/",
            Category::Experience => "experience/",
            Category::Certifications => "certifications/",
            Category::Blogs => "blog/",
            Category::Education => "education/",
        }
    }

    pub(crate) fn default_file(&self) -> &'static str {
        match self {
            Category::Skills => "skills.json",
            Category::Projects => "projects.json",
            Category::Experience => "experience.json",
            Category::Certifications => "certifications.json",
            Category::Blogs => "blogs.json",
            Category::Education => "education.json",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown content category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A displayable record belonging to one content category.
///
/// Every field of an item is optional on the wire; the item types expose
/// accessors that substitute a display default for anything missing.
pub trait ContentItem: Clone + Default + Serialize + DeserializeOwned + Send + Sync + 'static {
    const CATEGORY: Category;

    /// Stable identity used for list keys: the `id` when present, else the
    /// item's title or name.
    fn key(&self) -> String;
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("unexpected response status {0}")]
    Status(StatusCode),
    #[error("content server error: {0}")]
    Server(String),
    #[error("no content source configured")]
    Unconfigured,
}

/// Items ready for display. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    items: Vec<T>,
    is_fallback: bool,
}

impl<T> Loaded<T> {
    /// Wraps items from the remote source, or `None` when there are none.
    pub fn live(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self {
            items,
            is_fallback: false,
        })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn is_fallback(&self) -> bool {
        self.is_fallback
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<T: ContentItem> Loaded<T> {
    pub fn fallback() -> Self {
        Self {
            items: defaults::<T>(),
            is_fallback: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(Loaded<T>),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&Loaded<T>> {
        match self {
            LoadState::Loading => None,
            LoadState::Loaded(l) => Some(l),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_name() {
        for c in Category::ALL {
            assert_eq!(c.as_str().parse::<Category>(), Ok(c));
        }
        assert_eq!(
            "blog".parse::<Category>(),
            Err(UnknownCategory("blog".to_string()))
        );
    }

    #[test]
    fn test_blog_category_uses_singular_path() {
        assert_eq!(Category::Blogs.default_path(), "blog/");
        assert_eq!(Category::Skills.default_path(), "skills/");
    }

    #[test]
    fn test_loaded_rejects_empty_live_items() {
        assert!(Loaded::<Project>::live(vec![]).is_none());
        let loaded = Loaded::live(vec![Project::default()]).unwrap();
        assert!(!loaded.is_fallback());
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn test_fallback_is_flagged_and_non_empty() {
        let loaded = Loaded::<BlogPost>::fallback();
        assert!(loaded.is_fallback());
        assert!(!loaded.items().is_empty());
    }

    #[test]
    fn test_load_state_starts_loading() {
        let state = LoadState::<Education>::default();
        assert!(state.is_loading());
        assert!(state.loaded().is_none());
    }
}
