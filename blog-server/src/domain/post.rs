use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::error::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub publish_date: DateTime<Utc>,
}

impl Post {
    pub fn new(fields: PostFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: fields.title,
            content: fields.content,
            author: fields.author,
            publish_date: Utc::now(),
        }
    }

    /// Replaces the caller-editable fields. `id` and `publish_date` never change.
    pub fn apply(&mut self, fields: PostFields) {
        self.title = fields.title;
        self.content = fields.content;
        self.author = fields.author;
    }
}

/// The caller-supplied part of a post, checked for presence.
#[derive(Debug, Clone, PartialEq)]
pub struct PostFields {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl PostFields {
    pub fn new(
        title: Option<String>,
        content: Option<String>,
        author: Option<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            title: require("title", title)?,
            content: require("content", content)?,
            author: require("author", author)?,
        })
    }
}

fn require(field: &'static str, value: Option<String>) -> Result<String, DomainError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(DomainError::Validation { field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn names_the_first_missing_field() {
        let err = PostFields::new(some("t"), None, None).unwrap_err();
        assert!(matches!(err, DomainError::Validation { field: "content" }));

        let err = PostFields::new(some("t"), some("c"), some("")).unwrap_err();
        assert!(matches!(err, DomainError::Validation { field: "author" }));
    }

    #[test]
    fn apply_keeps_identity_and_publish_date() {
        let fields = PostFields::new(some("a"), some("b"), some("c")).unwrap();
        let mut post = Post::new(fields);
        let (id, published) = (post.id, post.publish_date);

        post.apply(PostFields::new(some("x"), some("y"), some("z")).unwrap());

        assert_eq!(post.id, id);
        assert_eq!(post.publish_date, published);
        assert_eq!(post.title, "x");
        assert_eq!(post.author, "z");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let post = Post::new(PostFields::new(some("a"), some("b"), some("c")).unwrap());
        let value = serde_json::to_value(&post).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, ["author", "content", "id", "publishDate", "title"]);
    }
}
