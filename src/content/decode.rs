use serde::de::DeserializeOwned;
use serde_json::Value;

/// Shape of a content response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded<T> {
    Array(Vec<T>),
    Single(T),
    Invalid,
}

impl<T> Decoded<T> {
    /// The items this body contributes. `Invalid` and empty arrays yield none.
    pub fn into_items(self) -> Vec<T> {
        match self {
            Decoded::Array(items) => items,
            Decoded::Single(item) => vec![item],
            Decoded::Invalid => Vec::new(),
        }
    }
}

/// Classifies a response body as a list, a single object, or unusable.
///
/// Array elements that aren't objects are dropped; the rest of the list is
/// kept. Item fields are lenient, so a mistyped field never drops an object.
pub fn decode<T: DeserializeOwned>(body: &str) -> Decoded<T> {
    let value = match serde_json::from_str::<Value>(body) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("content body is not valid JSON: {e}");
            return Decoded::Invalid;
        }
    };
    match value {
        Value::Array(values) => {
            let total = values.len();
            let items = values
                .into_iter()
                .enumerate()
                .filter_map(|(i, v)| match v {
                    Value::Object(_) => serde_json::from_value::<T>(v)
                        .map_err(|e| log::warn!("dropping content item {i}: {e}"))
                        .ok(),
                    _ => {
                        log::warn!("dropping content item {i}: not an object");
                        None
                    }
                })
                .collect::<Vec<_>>();
            if items.len() < total {
                log::debug!("kept {} of {total} content items", items.len());
            }
            Decoded::Array(items)
        }
        Value::Object(_) => match serde_json::from_value::<T>(value) {
            Ok(item) => Decoded::Single(item),
            Err(e) => {
                log::warn!("content object does not match item shape: {e}");
                Decoded::Invalid
            }
        },
        other => {
            log::warn!("unexpected content body: {other}");
            Decoded::Invalid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{BlogPost, Education, Project};

    #[test]
    fn test_array_body() {
        let d = decode::<Project>(r#"[{"name": "a"}, {"name": "b"}]"#);
        let items = d.into_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name(), "b");
    }

    #[test]
    fn test_empty_array_body() {
        assert_eq!(decode::<Project>("[]"), Decoded::Array(vec![]));
    }

    #[test]
    fn test_single_object_body() {
        match decode::<BlogPost>(r#"{"title": "solo"}"#) {
            Decoded::Single(post) => assert_eq!(post.title(), "solo"),
            other => panic!("expected a single item, got {other:?}"),
        }
    }

    #[test]
    fn test_scalar_and_null_bodies_are_invalid() {
        assert_eq!(decode::<Project>("null"), Decoded::Invalid);
        assert_eq!(decode::<Project>("42"), Decoded::Invalid);
        assert_eq!(decode::<Project>(r#""text""#), Decoded::Invalid);
        assert_eq!(decode::<Project>("<html>oops</html>"), Decoded::Invalid);
        assert_eq!(decode::<Project>(""), Decoded::Invalid);
    }

    #[test]
    fn test_mistyped_fields_keep_the_element() {
        let d = decode::<Project>(
            r#"[{"name": "ok"}, {"name": "counts", "stargazers_count": "many", "forks_count": -1}]"#,
        );
        let items = d.into_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name(), "counts");
        assert_eq!(items[1].stars(), 0);
        assert_eq!(items[1].forks(), 0);
    }

    #[test]
    fn test_non_object_elements_are_dropped() {
        let items = decode::<Project>(r#"[{"name": "ok"}, 3, "text", null]"#).into_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name(), "ok");
    }

    #[test]
    fn test_stringly_typed_payload_is_kept() {
        let items = decode::<Education>(
            r#"[{"id": 1, "degree": "B.E. CSE", "gpa": 8.5, "period": 2024, "achievements": "Dean's list"}]"#,
        )
        .into_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].degree(), "B.E. CSE");
        assert_eq!(items[0].gpa(), Some("8.5"));
        assert_eq!(items[0].location_line(), "2024");
        assert_eq!(items[0].achievements, ["Dean's list"]);
    }

    #[test]
    fn test_mistyped_single_object_is_kept() {
        match decode::<BlogPost>(r#"{"title": "solo", "readTime": 5, "tags": [1, "rust"]}"#) {
            Decoded::Single(post) => {
                assert_eq!(post.read_time(), "5");
                assert_eq!(post.tags(3), ["1", "rust"]);
            }
            other => panic!("expected a single item, got {other:?}"),
        }
    }
}
