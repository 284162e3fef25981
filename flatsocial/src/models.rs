//! Record types persisted in the JSON collections.
//!
//! Field names serialize in camelCase so existing `users.json`, `friendships.json`,
//! `posts.json` and `post_likes.json` documents load unchanged. Counters and embedded
//! sequences that older documents may omit default at the read boundary.

use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    keys::collections,
    types::{Identified, Record, Timestamp},
};

/// Avatar path assigned to users that never uploaded one.
pub const DEFAULT_AVATAR: &str = "/images/default-avatar.png";

fn default_avatar() -> String {
    DEFAULT_AVATAR.to_string()
}

/// Reads an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
    Moderator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
            Self::Moderator => "moderator",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Blocked,
    Pending,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Blocked => "blocked",
            Self::Pending => "pending",
        }
    }
}

/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    /// bcrypt hash; documents written before hashing may still hold cleartext.
    pub password: String,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default = "default_avatar")]
    pub avatar: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: Role,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: Status,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl Identified for User {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for User {
    const COLLECTION: &'static str = collections::USERS;
}

/// Directed edge: `user_id` sees `friend_id` as a friend. The reverse is a separate record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friendship {
    pub id: u64,
    pub user_id: u64,
    pub friend_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

impl Friendship {
    pub fn connects(&self, user_id: u64, friend_id: u64) -> bool {
        self.user_id == user_id && self.friend_id == friend_id
    }
}

impl Identified for Friendship {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for Friendship {
    const COLLECTION: &'static str = collections::FRIENDSHIPS;
}

/// Identity fields copied into a comment when it is written. Never re-joined on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentAuthor {
    pub id: u64,
    pub name: String,
    pub avatar: String,
}

impl From<&User> for CommentAuthor {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

/// Comment embedded in its parent post; `id` is unique among that post's comments only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub user_id: u64,
    pub content: String,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<CommentAuthor>,
}

impl Identified for Comment {
    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub user_id: u64,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: Timestamp,
    /// Denormalized count of [`PostLike`] records pointing at this post.
    #[serde(default, deserialize_with = "null_as_default")]
    pub likes: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: Vec<Comment>,
}

impl Identified for Post {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for Post {
    const COLLECTION: &'static str = collections::POSTS;
}

/// Presence of a record means `user_id` currently likes `post_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostLike {
    pub id: u64,
    pub post_id: u64,
    pub user_id: u64,
    pub created_at: Timestamp,
}

impl PostLike {
    pub fn matches(&self, post_id: u64, user_id: u64) -> bool {
        self.post_id == post_id && self.user_id == user_id
    }
}

impl Identified for PostLike {
    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for PostLike {
    const COLLECTION: &'static str = collections::POST_LIKES;
}
