use crate::domain::error::DomainError;
use crate::domain::post::{Post, PostFields};
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, post: Post) -> Result<Post, DomainError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError>;
    async fn update_post(&self, id: Uuid, fields: PostFields)
    -> Result<Option<Post>, DomainError>;
    /// Returns `false` when no post had the given id.
    async fn delete_post(&self, id: Uuid) -> Result<bool, DomainError>;
    async fn get_posts(&self) -> Result<Vec<Post>, DomainError>;
}

/// Posts kept in insertion order for the life of the process.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: Post) -> Result<Post, DomainError> {
        let mut posts = self.posts.write().await;
        if posts.iter().any(|p| p.id == post.id) {
            return Err(DomainError::Internal(format!("duplicate post id {}", post.id)));
        }
        posts.push(post.clone());

        info!(post_id = %post.id, author = %post.author, "post created");
        Ok(post)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, DomainError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn update_post(
        &self,
        id: Uuid,
        fields: PostFields,
    ) -> Result<Option<Post>, DomainError> {
        let mut posts = self.posts.write().await;
        let Some(post) = posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        post.apply(fields);

        info!(post_id = %id, "post updated");
        Ok(Some(post.clone()))
    }

    async fn delete_post(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut posts = self.posts.write().await;
        let Some(index) = posts.iter().position(|p| p.id == id) else {
            return Ok(false);
        };
        posts.remove(index);

        info!(post_id = %id, "post deleted");
        Ok(true)
    }

    async fn get_posts(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str) -> Post {
        Post::new(PostFields {
            title: title.into(),
            content: "content".into(),
            author: "author".into(),
        })
    }

    #[tokio::test]
    async fn lists_in_insertion_order() {
        let repo = InMemoryPostRepository::new();
        for title in ["first", "second", "third"] {
            repo.create(post(title)).await.unwrap();
        }

        let titles: Vec<_> = repo
            .get_posts()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn update_in_place_keeps_position() {
        let repo = InMemoryPostRepository::new();
        let a = repo.create(post("a")).await.unwrap();
        repo.create(post("b")).await.unwrap();

        let fields = PostFields {
            title: "a2".into(),
            content: "c2".into(),
            author: "x".into(),
        };
        let updated = repo.update_post(a.id, fields).await.unwrap().unwrap();
        assert_eq!(updated.publish_date, a.publish_date);

        let posts = repo.get_posts().await.unwrap();
        assert_eq!(posts[0].id, a.id);
        assert_eq!(posts[0].title, "a2");
    }

    #[tokio::test]
    async fn missing_ids_are_reported() {
        let repo = InMemoryPostRepository::new();
        let id = Uuid::new_v4();
        assert!(repo.find_by_id(id).await.unwrap().is_none());
        assert!(!repo.delete_post(id).await.unwrap());
        let fields = PostFields {
            title: "t".into(),
            content: "c".into(),
            author: "a".into(),
        };
        assert!(repo.update_post(id, fields).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn rejects_duplicate_ids() {
        let repo = InMemoryPostRepository::new();
        let p = repo.create(post("a")).await.unwrap();
        assert!(matches!(
            repo.create(p).await,
            Err(DomainError::Internal(_))
        ));
        assert_eq!(repo.get_posts().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_only_target() {
        let repo = InMemoryPostRepository::with_posts(vec![post("a"), post("b")]);
        let target = repo.get_posts().await.unwrap()[0].id;

        assert!(repo.delete_post(target).await.unwrap());
        let posts = repo.get_posts().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "b");
    }
}
