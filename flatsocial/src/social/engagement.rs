//! Likes and comments on existing posts.

use log::{error, info};
use serde::Serialize;

use crate::{
    client::Client,
    errors::{RepoError, ValidationError},
    id::next_id,
    keys::collections,
    models::{Comment, CommentAuthor, Post, PostLike, User},
    store::CollectionStore,
    types::Timestamp,
    validators::require_content,
};

/// Where the acting user's id may come from. The first one present wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActorRef {
    pub query: Option<u64>,
    pub body: Option<u64>,
    pub session: Option<u64>,
}

impl ActorRef {
    pub fn user(user_id: u64) -> Self {
        Self {
            query: Some(user_id),
            ..Self::default()
        }
    }

    pub fn resolve(&self) -> Result<u64, RepoError> {
        self.query.or(self.body).or(self.session).ok_or_else(|| {
            ValidationError::single("userId", "user_id_required", "a user id is required").into()
        })
    }
}

/// State of a post's likes after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LikeToggle {
    pub likes: u64,
    pub liked: bool,
}

impl<S> Client<S>
where
    S: CollectionStore,
{
    /// Like the post if the actor has not, unlike it otherwise.
    ///
    /// Posts are written before likes. When the likes write fails the previous posts
    /// document is written back so the counter keeps matching the like records.
    pub async fn toggle_like(&self, post_id: u64, actor: ActorRef) -> Result<LikeToggle, RepoError> {
        let user_id = actor.resolve()?;

        let _guard = self.lock(&[collections::POSTS, collections::POST_LIKES]).await;
        let mut posts: Vec<Post> = self.try_load().await?;
        let mut likes: Vec<PostLike> = self.try_load().await?;
        let previous = posts.clone();
        let post = posts
            .iter_mut()
            .find(|post| post.id == post_id)
            .ok_or_else(|| RepoError::not_found("post"))?;

        let liked = match likes.iter().position(|like| like.matches(post_id, user_id)) {
            Some(index) => {
                likes.remove(index);
                post.likes = post.likes.saturating_sub(1);
                false
            }
            None => {
                likes.push(PostLike {
                    id: next_id(&likes),
                    post_id,
                    user_id,
                    created_at: Timestamp::now(),
                });
                post.likes += 1;
                true
            }
        };
        let toggle = LikeToggle {
            likes: post.likes,
            liked,
        };

        self.persist(&posts).await?;
        if let Err(err) = self.persist(&likes).await {
            if !self.save(&previous).await {
                error!("post {post_id} kept a like counter that its like records do not match");
            }
            return Err(err);
        }
        info!("user {user_id} {} post {post_id}", if liked { "liked" } else { "unliked" });
        Ok(toggle)
    }

    /// Append a comment. Nothing is written unless both the post and the author exist.
    pub async fn add_comment(&self, post_id: u64, user_id: u64, content: &str) -> Result<Comment, RepoError> {
        let content = require_content("content", "empty_comment", content)?;

        let _guard = self.lock(&[collections::POSTS]).await;
        let mut posts: Vec<Post> = self.try_load().await?;
        let users: Vec<User> = self.try_load().await?;
        let post = posts
            .iter_mut()
            .find(|post| post.id == post_id)
            .ok_or_else(|| RepoError::not_found("post"))?;
        let author = users
            .iter()
            .find(|user| user.id == user_id)
            .ok_or_else(|| RepoError::not_found("user"))?;

        let comment = Comment {
            id: next_id(&post.comments),
            user_id,
            content,
            created_at: Timestamp::now(),
            author: Some(CommentAuthor::from(author)),
        };
        post.comments.push(comment.clone());

        self.persist(&posts).await?;
        info!("user {user_id} commented on post {post_id}");
        Ok(comment)
    }
}
