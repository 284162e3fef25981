//! flatsocial core library.
//!
//! Users, friendships, posts and likes kept as whole JSON documents on disk, one file per
//! collection, plus the social operations (feed, posting, likes, comments, friendships,
//! accounts) that read and rewrite them through a [`Client`].

pub mod client;
pub mod config;
pub mod errors;
pub mod id;
pub mod keys;
pub mod models;
pub mod social;
pub mod store;
pub mod types;
pub mod validators;

pub use client::Client;
pub use config::Config;
pub use errors::*;
pub use models::{Comment, CommentAuthor, Friendship, Post, PostLike, Role, Status, User};
pub use social::*;
pub use store::{CollectionStore, JsonFileStore, MemoryStore};
pub use types::{Identified, Record, Timestamp};
