use rust_embed::Embed;

use super::ContentItem;

/// Hand-authored content shown whenever the content API cannot be used.
#[derive(Embed)]
#[folder = "content"]
pub struct DefaultContent;

/// The embedded default items for `T`'s category. Never empty.
pub fn defaults<T: ContentItem>() -> Vec<T> {
    let file = T::CATEGORY.default_file();
    let items = match DefaultContent::get(file) {
        Some(f) => serde_json::from_slice::<Vec<T>>(&f.data).unwrap_or_else(|e| {
            log::error!("couldn't parse default content {file}: {e}");
            Vec::new()
        }),
        None => {
            log::error!("default content {file} is missing");
            Vec::new()
        }
    };
    if items.is_empty() {
        // a blank item still renders with every display default
        return vec![T::default()];
    }
    items
}
