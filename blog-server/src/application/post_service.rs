use std::sync::Arc;

use crate::data::post_repository::{InMemoryPostRepository, PostRepository};
use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostFields};
use crate::presentation::dto::{CreatePostRequest, UpdatePostRequest};
use crate::presentation::utils::parse_post_id;
use tracing::instrument;
use uuid::Uuid;

/// The service the HTTP layer is wired against.
pub type BlogPostService = PostService<InMemoryPostRepository>;

pub struct PostService<R: PostRepository + 'static> {
    repo: Arc<R>,
}

impl<R: PostRepository + 'static> Clone for PostService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R> PostService<R>
where
    R: PostRepository + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn get_post(&self, id: Uuid) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::PostNotFound(id.to_string()))
    }

    pub async fn get_posts(&self) -> Result<Vec<Post>, DomainError> {
        self.repo.get_posts().await
    }

    #[instrument(skip(self))]
    pub async fn create_post(&self, request: CreatePostRequest) -> Result<Post, DomainError> {
        let fields = PostFields::new(request.title, request.content, request.author)?;
        self.repo.create(Post::new(fields)).await
    }

    /// `path_id` is the raw path segment: an id mismatch is reported before
    /// the path is looked up, even when the path is not a UUID.
    #[instrument(skip(self))]
    pub async fn update_post(
        &self,
        path_id: &str,
        update: UpdatePostRequest,
    ) -> Result<Post, DomainError> {
        ensure_matching_id(path_id, update.id.as_deref())?;
        let fields = PostFields::new(update.title, update.content, update.author)?;
        let post_id = parse_post_id(path_id)?;

        self.repo
            .update_post(post_id, fields)
            .await?
            .ok_or_else(|| DomainError::PostNotFound(post_id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn delete_post(&self, post_id: Uuid) -> Result<(), DomainError> {
        if self.repo.delete_post(post_id).await? {
            Ok(())
        } else {
            Err(DomainError::PostNotFound(post_id.to_string()))
        }
    }
}

fn ensure_matching_id(path_id: &str, body_id: Option<&str>) -> Result<(), DomainError> {
    let Some(body_id) = body_id else {
        return Err(DomainError::InvalidRequest(
            "request body must include the post id".into(),
        ));
    };
    let matches = match (Uuid::parse_str(path_id), Uuid::parse_str(body_id)) {
        (Ok(path), Ok(body)) => path == body,
        _ => path_id == body_id,
    };
    if matches {
        Ok(())
    } else {
        Err(DomainError::InvalidRequest(format!(
            "request path id ({path_id}) and request body id ({body_id}) must match"
        )))
    }
}
