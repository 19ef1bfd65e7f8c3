use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

mod error;
mod http_client;

pub use error::BlogClientError;
pub use http_client::BlogClientHttp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub publish_date: DateTime<Utc>,
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}] {}", self.id, self.title)?;
        writeln!(f, "by {} on {}", self.author, self.publish_date.to_rfc3339())?;
        write!(f, "{}", self.content)
    }
}

#[async_trait]
pub trait BlogClientTrait {
    async fn list_posts(&self) -> Result<Vec<Post>, BlogClientError>;
    async fn get_post(&self, id: Uuid) -> Result<Post, BlogClientError>;
    async fn create_post(
        &self,
        title: String,
        content: String,
        author: String,
    ) -> Result<Post, BlogClientError>;
    async fn update_post(
        &self,
        id: Uuid,
        title: String,
        content: String,
        author: String,
    ) -> Result<(), BlogClientError>;
    async fn delete_post(&self, id: Uuid) -> Result<(), BlogClientError>;
}
