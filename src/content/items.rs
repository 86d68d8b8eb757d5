use std::fmt;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{lenient, Category, ContentItem};

/// Tags shown on a blog grid card.
pub const CARD_TAGS: usize = 2;
/// Tags shown on a blog carousel slide.
pub const CAROUSEL_TAGS: usize = 3;
pub const PROJECT_TOPICS: usize = 3;

const DEFAULT_BLOG_IMAGE: &str =
    "https://images.pexels.com/photos/2004161/pexels-photo-2004161.jpeg?auto=compress&cs=tinysrgb&w=800";
const ACCENT: &str = "#00FF41";

/// Content APIs hand out either numeric or string ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{n}"),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

// empty strings count as missing, same as absent fields
fn text_or<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value.as_deref().filter(|s| !s.is_empty()).unwrap_or(default)
}

fn key_of(id: &Option<ItemId>, name: &Option<String>) -> String {
    match id {
        Some(id) => id.to_string(),
        None => name.clone().unwrap_or_default(),
    }
}

fn truncated(values: &[String], n: usize) -> &[String] {
    &values[..values.len().min(n)]
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub level: Option<f64>,
    #[serde(deserialize_with = "lenient::text")]
    pub icon: Option<String>,
}

impl Skill {
    pub fn name(&self) -> &str {
        text_or(&self.name, "Skill")
    }

    pub fn icon(&self) -> &str {
        text_or(&self.icon, "💻")
    }

    /// Proficiency as a whole percentage.
    pub fn level(&self) -> u8 {
        self.level
            .filter(|l| l.is_finite())
            .map(|l| l.round().clamp(0.0, 100.0) as u8)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    #[serde(deserialize_with = "lenient::id")]
    pub id: Option<ItemId>,
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::objects")]
    pub skills: Vec<Skill>,
}

impl SkillGroup {
    pub fn title(&self) -> &str {
        text_or(&self.title, "Skills Category")
    }
}

impl ContentItem for SkillGroup {
    const CATEGORY: Category = Category::Skills;

    fn key(&self) -> String {
        key_of(&self.id, &self.title)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "lenient::id")]
    pub id: Option<ItemId>,
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub html_url: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub homepage: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub language: Option<String>,
    #[serde(deserialize_with = "lenient::count")]
    pub stargazers_count: Option<u64>,
    #[serde(deserialize_with = "lenient::count")]
    pub forks_count: Option<u64>,
    #[serde(deserialize_with = "lenient::strings")]
    pub topics: Vec<String>,
}

impl Project {
    pub fn name(&self) -> &str {
        text_or(&self.name, "Untitled Project")
    }

    pub fn description(&self) -> &str {
        text_or(&self.description, "No description available")
    }

    pub fn language(&self) -> &str {
        text_or(&self.language, "Unknown")
    }

    pub fn repo_url(&self) -> &str {
        text_or(&self.html_url, "#")
    }

    pub fn homepage(&self) -> Option<&str> {
        self.homepage.as_deref().filter(|s| !s.is_empty())
    }

    pub fn stars(&self) -> u64 {
        self.stargazers_count.unwrap_or(0)
    }

    pub fn forks(&self) -> u64 {
        self.forks_count.unwrap_or(0)
    }

    pub fn topics(&self) -> &[String] {
        truncated(&self.topics, PROJECT_TOPICS)
    }

    pub fn language_color(&self) -> &'static str {
        match self.language.as_deref() {
            Some("JavaScript") => "#F7DF1E",
            Some("TypeScript") => "#3178C6",
            Some("Python") => "#3776AB",
            Some("React") => "#61DAFB",
            Some("Node.js") => "#339933",
            _ => ACCENT,
        }
    }
}

impl ContentItem for Project {
    const CATEGORY: Category = Category::Projects;

    fn key(&self) -> String {
        key_of(&self.id, &self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    #[serde(deserialize_with = "lenient::id")]
    pub id: Option<ItemId>,
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub company: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub period: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::strings")]
    pub achievements: Vec<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub icon: Option<String>,
}

impl Experience {
    pub fn title(&self) -> &str {
        text_or(&self.title, "Position Not Specified")
    }

    pub fn company(&self) -> &str {
        text_or(&self.company, "Unknown Company")
    }

    pub fn location(&self) -> &str {
        text_or(&self.location, "Unknown Location")
    }

    pub fn period(&self) -> &str {
        text_or(&self.period, "Unknown Period")
    }

    pub fn description(&self) -> &str {
        text_or(&self.description, "No description available")
    }

    pub fn icon(&self) -> &str {
        text_or(&self.icon, "💼")
    }
}

impl ContentItem for Experience {
    const CATEGORY: Category = Category::Experience;

    fn key(&self) -> String {
        key_of(&self.id, &self.title)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    #[serde(deserialize_with = "lenient::id")]
    pub id: Option<ItemId>,
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub issuer: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(rename = "credentialUrl")]
    #[serde(deserialize_with = "lenient::text")]
    pub credential_url: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub icon: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub color: Option<String>,
}

impl Certification {
    pub fn title(&self) -> &str {
        text_or(&self.title, "Untitled Certification")
    }

    pub fn issuer(&self) -> &str {
        text_or(&self.issuer, "Unknown Issuer")
    }

    pub fn date(&self) -> &str {
        text_or(&self.date, "Unknown Date")
    }

    pub fn description(&self) -> &str {
        text_or(&self.description, "No description available")
    }

    pub fn credential_url(&self) -> &str {
        text_or(&self.credential_url, "#")
    }

    pub fn icon(&self) -> &str {
        text_or(&self.icon, "🟨")
    }

    /// Tailwind gradient stops for the badge.
    pub fn color(&self) -> &str {
        text_or(&self.color, "from-yellow-400 to-yellow-600")
    }
}

impl ContentItem for Certification {
    const CATEGORY: Category = Category::Certifications;

    fn key(&self) -> String {
        key_of(&self.id, &self.title)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogPost {
    #[serde(deserialize_with = "lenient::id")]
    pub id: Option<ItemId>,
    #[serde(deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub excerpt: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub date: Option<String>,
    #[serde(rename = "readTime")]
    #[serde(deserialize_with = "lenient::text")]
    pub read_time: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub category: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub image: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient::strings")]
    pub tags: Vec<String>,
}

impl BlogPost {
    pub fn title(&self) -> &str {
        text_or(&self.title, "Untitled Blog Post")
    }

    pub fn excerpt(&self) -> &str {
        text_or(&self.excerpt, "No excerpt available")
    }

    /// Publication date as shown on cards. Dates that do not parse are shown
    /// verbatim.
    pub fn date_label(&self) -> String {
        let Some(raw) = self.date.as_deref().filter(|s| !s.is_empty()) else {
            return "Unknown date".to_string();
        };
        if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return d.format("%b %e, %Y").to_string();
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return dt.format("%b %e, %Y").to_string();
        }
        raw.to_string()
    }

    pub fn read_time(&self) -> &str {
        text_or(&self.read_time, "Unknown")
    }

    pub fn category(&self) -> &str {
        text_or(&self.category, "Uncategorized")
    }

    pub fn image(&self) -> &str {
        text_or(&self.image, DEFAULT_BLOG_IMAGE)
    }

    pub fn url(&self) -> &str {
        text_or(&self.url, "#")
    }

    pub fn tags(&self, n: usize) -> &[String] {
        truncated(&self.tags, n)
    }

    /// Background classes for the category badge.
    pub fn category_classes(&self) -> String {
        format!("bg-gradient-to-r {}", self.category_color())
    }

    /// Tailwind gradient stops for the category.
    pub fn category_color(&self) -> &'static str {
        match self.category.as_deref() {
            Some("Frontend") => "from-blue-400 to-blue-600",
            Some("Backend") => "from-green-400 to-green-600",
            Some("DevOps") => "from-orange-400 to-orange-600",
            Some("JavaScript") => "from-yellow-400 to-yellow-600",
            Some("Full Stack") => "from-purple-400 to-purple-600",
            Some("Database") => "from-red-400 to-red-600",
            _ => "from-gray-400 to-gray-600",
        }
    }
}

impl ContentItem for BlogPost {
    const CATEGORY: Category = Category::Blogs;

    fn key(&self) -> String {
        key_of(&self.id, &self.title)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    #[serde(deserialize_with = "lenient::id")]
    pub id: Option<ItemId>,
    #[serde(deserialize_with = "lenient::text")]
    pub degree: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub institution: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub period: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::strings")]
    pub achievements: Vec<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub gpa: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub icon: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub color: Option<String>,
}

impl Education {
    pub fn degree(&self) -> &str {
        text_or(&self.degree, "Degree Not Specified")
    }

    pub fn institution(&self) -> &str {
        text_or(&self.institution, "Unknown Institution")
    }

    /// `location • period`, or just the period when there is no location.
    pub fn location_line(&self) -> String {
        let period = text_or(&self.period, "");
        match self.location.as_deref().filter(|s| !s.is_empty()) {
            Some(location) => format!("{location} • {period}"),
            None => period.to_string(),
        }
    }

    pub fn description(&self) -> &str {
        text_or(&self.description, "No description available")
    }

    pub fn gpa(&self) -> Option<&str> {
        self.gpa.as_deref().filter(|s| !s.is_empty())
    }

    pub fn icon(&self) -> &str {
        text_or(&self.icon, "🎓")
    }

    pub fn color(&self) -> &str {
        text_or(&self.color, "from-gray-400 to-gray-600")
    }
}

impl ContentItem for Education {
    const CATEGORY: Category = Category::Education;

    fn key(&self) -> String {
        key_of(&self.id, &self.degree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_fields_fall_back_to_display_defaults() {
        let post = BlogPost::default();
        assert_eq!(post.title(), "Untitled Blog Post");
        assert_eq!(post.category(), "Uncategorized");
        assert_eq!(post.date_label(), "Unknown date");
        assert_eq!(post.read_time(), "Unknown");
        assert_eq!(post.url(), "#");
        assert_eq!(post.image(), DEFAULT_BLOG_IMAGE);

        let project = Project::default();
        assert_eq!(project.name(), "Untitled Project");
        assert_eq!(project.language(), "Unknown");
        assert_eq!(project.stars(), 0);
        assert_eq!(project.homepage(), None);

        let cert = Certification::default();
        assert_eq!(cert.issuer(), "Unknown Issuer");
        assert_eq!(cert.date(), "Unknown Date");
    }

    #[test]
    fn test_empty_strings_count_as_missing() {
        let exp: Experience =
            serde_json::from_str(r#"{"title": "", "company": "Acme"}"#).unwrap();
        assert_eq!(exp.title(), "Position Not Specified");
        assert_eq!(exp.company(), "Acme");
    }

    #[test]
    fn test_key_prefers_id_over_title() {
        let with_id: BlogPost = serde_json::from_str(r#"{"id": 7, "title": "x"}"#).unwrap();
        assert_eq!(with_id.key(), "7");
        let text_id: BlogPost = serde_json::from_str(r#"{"id": "abc"}"#).unwrap();
        assert_eq!(text_id.key(), "abc");
        let no_id: BlogPost = serde_json::from_str(r#"{"title": "Hello"}"#).unwrap();
        assert_eq!(no_id.key(), "Hello");
        assert_eq!(BlogPost::default().key(), "");
    }

    #[test]
    fn test_tags_and_topics_are_truncated() {
        let post = BlogPost {
            tags: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            ..Default::default()
        };
        assert_eq!(post.tags(CARD_TAGS), ["a", "b"]);
        assert_eq!(post.tags(CAROUSEL_TAGS), ["a", "b", "c"]);

        let project = Project {
            topics: vec!["x".into()],
            ..Default::default()
        };
        assert_eq!(project.topics(), ["x"]);
    }

    #[test]
    fn test_blog_date_formats() {
        let mut post = BlogPost {
            date: Some("2023-12-15".into()),
            ..Default::default()
        };
        assert_eq!(post.date_label(), "Dec 15, 2023");
        post.date = Some("2023-11-02T10:00:00Z".into());
        assert_eq!(post.date_label(), "Nov  2, 2023");
        post.date = Some("last spring".into());
        assert_eq!(post.date_label(), "last spring");
    }

    #[test]
    fn test_skill_level_is_clamped() {
        let skill: Skill = serde_json::from_str(r#"{"level": 140}"#).unwrap();
        assert_eq!(skill.level(), 100);
        let skill: Skill = serde_json::from_str(r#"{"level": 87.6}"#).unwrap();
        assert_eq!(skill.level(), 88);
        assert_eq!(Skill::default().level(), 0);
        assert_eq!(Skill::default().icon(), "💻");
    }

    #[test]
    fn test_education_location_line() {
        let mut edu = Education {
            period: Some("2015 - 2019".into()),
            ..Default::default()
        };
        assert_eq!(edu.location_line(), "2015 - 2019");
        edu.location = Some("Earth".into());
        assert_eq!(edu.location_line(), "Earth • 2015 - 2019");
    }

    #[test]
    fn test_color_tables() {
        let project = Project {
            language: Some("Rust".into()),
            ..Default::default()
        };
        assert_eq!(project.language_color(), ACCENT);
        let post = BlogPost {
            category: Some("Backend".into()),
            ..Default::default()
        };
        assert_eq!(post.category_color(), "from-green-400 to-green-600");
    }

    #[test]
    fn test_category_badge_is_a_gradient_class() {
        let post = BlogPost {
            category: Some("Frontend".into()),
            ..Default::default()
        };
        assert_eq!(post.category_classes(), "bg-gradient-to-r from-blue-400 to-blue-600");
        assert_eq!(
            BlogPost::default().category_classes(),
            "bg-gradient-to-r from-gray-400 to-gray-600"
        );
    }

    #[test]
    fn test_loosely_typed_items_keep_their_fields() {
        let edu: Education =
            serde_json::from_str(r#"{"degree": "B.E. CSE", "gpa": 8.5, "achievements": null}"#)
                .unwrap();
        assert_eq!(edu.gpa(), Some("8.5"));
        assert!(edu.achievements.is_empty());

        let skill: Skill = serde_json::from_str(r#"{"name": "Go", "level": "95.00"}"#).unwrap();
        assert_eq!(skill.level(), 95);

        let post: BlogPost = serde_json::from_str(r#"{"readTime": 5, "date": 2024}"#).unwrap();
        assert_eq!(post.read_time(), "5");
        assert_eq!(post.date_label(), "2024");

        let project: Project =
            serde_json::from_str(r#"{"name": "p", "stargazers_count": "12", "topics": "cli"}"#)
                .unwrap();
        assert_eq!(project.stars(), 12);
        assert_eq!(project.topics(), ["cli"]);

        let group: SkillGroup =
            serde_json::from_str(r#"{"title": "Tools", "skills": [{"name": "Git"}, "vim"]}"#)
                .unwrap();
        assert_eq!(group.skills.len(), 1);
    }
}
