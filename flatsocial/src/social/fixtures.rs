//! Record builders shared by the social unit tests.

use crate::{
    models::{DEFAULT_AVATAR, Friendship, Post, PostLike, Role, Status, User},
    types::Timestamp,
};

pub(crate) fn at(raw: &str) -> Timestamp {
    Timestamp::parse(raw).expect("fixture timestamp")
}

pub(crate) fn user(id: u64, status: Status) -> User {
    User {
        id,
        name: format!("user{id}"),
        email: format!("user{id}@example.com"),
        password: String::new(),
        birth_date: None,
        avatar: DEFAULT_AVATAR.to_string(),
        role: Role::User,
        status,
        created_at: at("2024-01-01"),
        updated_at: at("2024-01-01"),
    }
}

pub(crate) fn admin(id: u64) -> User {
    User {
        role: Role::Admin,
        ..user(id, Status::Active)
    }
}

pub(crate) fn edge(id: u64, user_id: u64, friend_id: u64) -> Friendship {
    Friendship {
        id,
        user_id,
        friend_id,
        created_at: None,
    }
}

pub(crate) fn like(id: u64, post_id: u64, user_id: u64) -> PostLike {
    PostLike {
        id,
        post_id,
        user_id,
        created_at: at("2024-01-01"),
    }
}

pub(crate) fn post(id: u64, user_id: u64, created_at: &str) -> Post {
    Post {
        id,
        user_id,
        content: format!("post {id}"),
        image: None,
        created_at: at(created_at),
        likes: 0,
        comments: Vec::new(),
    }
}
