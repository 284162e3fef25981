//! News feed: the viewer's posts and their friends' posts, newest first.

use log::debug;
use serde::Serialize;

use crate::{
    client::Client,
    errors::RepoError,
    models::{Friendship, Post, PostLike, User},
    social::relations::{friend_ids_of, like_state_of},
    store::CollectionStore,
};

/// A post joined with its author and the viewer's like state.
///
/// Serializes flat: the post's own fields plus `author` and `liked`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedPost {
    #[serde(flatten)]
    pub post: Post,
    /// Absent when the author's account no longer exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<User>,
    pub liked: bool,
}

impl EnrichedPost {
    pub fn new(post: Post, users: &[User], viewer_id: u64, likes: &[PostLike]) -> Self {
        let author = users.iter().find(|user| user.id == post.user_id).cloned();
        let liked = like_state_of(post.id, viewer_id, likes);
        Self { post, author, liked }
    }
}

/// The news page: viewer, their feed and how many friends they have.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsPage {
    pub user: User,
    pub posts: Vec<EnrichedPost>,
    pub friends_count: usize,
}

/// Select, order and enrich the posts visible to `viewer_id`.
///
/// Sorting is stable, so posts with equal `created_at` keep their stored order.
pub fn rank_feed(
    viewer_id: u64,
    users: &[User],
    friendships: &[Friendship],
    posts: Vec<Post>,
    likes: &[PostLike],
) -> Vec<EnrichedPost> {
    let friend_ids = friend_ids_of(viewer_id, friendships);
    let mut visible: Vec<Post> = posts
        .into_iter()
        .filter(|post| post.user_id == viewer_id || friend_ids.contains(&post.user_id))
        .collect();
    visible.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    visible
        .into_iter()
        .map(|post| EnrichedPost::new(post, users, viewer_id, likes))
        .collect()
}

impl<S> Client<S>
where
    S: CollectionStore,
{
    /// Feed for `viewer_id`. Unreadable collections count as empty.
    pub async fn build_feed(&self, viewer_id: u64) -> Vec<EnrichedPost> {
        let users: Vec<User> = self.load().await;
        let friendships: Vec<Friendship> = self.load().await;
        let posts: Vec<Post> = self.load().await;
        let likes: Vec<PostLike> = self.load().await;

        let feed = rank_feed(viewer_id, &users, &friendships, posts, &likes);
        debug!("feed for user {viewer_id}: {} posts", feed.len());
        feed
    }

    pub async fn news_page(&self, viewer_id: u64) -> Result<NewsPage, RepoError> {
        let users: Vec<User> = self.load().await;
        let user = users
            .into_iter()
            .find(|user| user.id == viewer_id)
            .ok_or_else(RepoError::user_not_found)?;
        let friendships: Vec<Friendship> = self.load().await;
        let friends_count = friend_ids_of(viewer_id, &friendships).len();
        let posts = self.build_feed(viewer_id).await;

        Ok(NewsPage {
            user,
            posts,
            friends_count,
        })
    }
}
