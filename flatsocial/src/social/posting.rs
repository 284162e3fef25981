use log::info;

use crate::{
    client::Client,
    errors::RepoError,
    id::next_id,
    keys::collections,
    models::{Post, User},
    social::feed::EnrichedPost,
    store::CollectionStore,
    types::Timestamp,
    validators::require_content,
};

impl<S> Client<S>
where
    S: CollectionStore,
{
    /// Publish a post authored by `user_id`. Blank content fails with `empty_content`.
    pub async fn create_post(&self, user_id: u64, content: &str) -> Result<EnrichedPost, RepoError> {
        let content = require_content("content", "empty_content", content)?;

        let _guard = self.lock(&[collections::POSTS]).await;
        let mut posts: Vec<Post> = self.try_load().await?;
        let post = Post {
            id: next_id(&posts),
            user_id,
            content,
            image: None,
            created_at: Timestamp::now(),
            likes: 0,
            comments: Vec::new(),
        };
        posts.push(post.clone());
        self.persist(&posts).await?;
        info!("user {user_id} created post {}", post.id);

        let users: Vec<User> = self.load().await;
        Ok(EnrichedPost::new(post, &users, user_id, &[]))
    }
}
