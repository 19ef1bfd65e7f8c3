use crate::BlogClientTrait;
use crate::Post;
use crate::error::BlogClientError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct BlogClientHttp {
    client: Arc<Client>,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct PostBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<Uuid>,
    title: &'a str,
    content: &'a str,
    author: &'a str,
}

impl BlogClientHttp {
    pub fn connect(endpoint: &str) -> Result<Self, BlogClientError> {
        let base_url = endpoint.trim_end_matches('/').to_string();
        Ok(Self {
            client: Arc::new(Client::builder().build()?),
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn posts_url(&self) -> String {
        format!("{}/blog-posts", self.base_url)
    }

    fn post_url(&self, id: Uuid) -> String {
        format!("{}/blog-posts/{}", self.base_url, id)
    }
}

#[async_trait]
impl BlogClientTrait for BlogClientHttp {
    async fn list_posts(&self) -> Result<Vec<Post>, BlogClientError> {
        let resp = self.client.get(self.posts_url()).send().await?;

        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            Err(BlogClientError::from_http_response(resp).await)
        }
    }

    async fn get_post(&self, id: Uuid) -> Result<Post, BlogClientError> {
        let resp = self.client.get(self.post_url(id)).send().await?;

        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            Err(BlogClientError::from_http_response(resp).await)
        }
    }

    async fn create_post(
        &self,
        title: String,
        content: String,
        author: String,
    ) -> Result<Post, BlogClientError> {
        let resp = self
            .client
            .post(self.posts_url())
            .json(&PostBody {
                id: None,
                title: &title,
                content: &content,
                author: &author,
            })
            .send()
            .await?;

        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            Err(BlogClientError::from_http_response(resp).await)
        }
    }

    async fn update_post(
        &self,
        id: Uuid,
        title: String,
        content: String,
        author: String,
    ) -> Result<(), BlogClientError> {
        let resp = self
            .client
            .put(self.post_url(id))
            .json(&PostBody {
                id: Some(id),
                title: &title,
                content: &content,
                author: &author,
            })
            .send()
            .await?;

        if resp.status().is_success() {
            Ok(())
        } else {
            Err(BlogClientError::from_http_response(resp).await)
        }
    }

    async fn delete_post(&self, id: Uuid) -> Result<(), BlogClientError> {
        let resp = self.client.delete(self.post_url(id)).send().await?;

        if resp.status().is_success() {
            Ok(())
        } else {
            Err(BlogClientError::from_http_response(resp).await)
        }
    }
}
