//! Ad hoc relationship lookups.
//!
//! Everything here is a linear scan over a freshly loaded collection; there is no
//! persistent index. Friendship lookups are directed: an edge `(u, f)` makes `f` a
//! friend of `u` and says nothing about the reverse.

use crate::models::{Friendship, PostLike, Status, User};

/// Ids `user_id` has friended, in edge order.
pub fn friend_ids_of(user_id: u64, friendships: &[Friendship]) -> Vec<u64> {
    friendships
        .iter()
        .filter(|edge| edge.user_id == user_id)
        .map(|edge| edge.friend_id)
        .collect()
}

/// Whether `user_id` currently likes `post_id`.
pub fn like_state_of(post_id: u64, user_id: u64, likes: &[PostLike]) -> bool {
    likes.iter().any(|like| like.matches(post_id, user_id))
}

/// Number of like records for `post_id`.
pub fn like_count(post_id: u64, likes: &[PostLike]) -> u64 {
    likes.iter().filter(|like| like.post_id == post_id).count() as u64
}

/// Resolved friends of `user_id`, in `users` order. Dangling edges are skipped.
pub fn friends_of(user_id: u64, users: &[User], friendships: &[Friendship]) -> Vec<User> {
    let friend_ids = friend_ids_of(user_id, friendships);
    users
        .iter()
        .filter(|user| friend_ids.contains(&user.id))
        .cloned()
        .collect()
}

/// Active users that are neither `user_id` nor already among its friends.
pub fn potential_friends(user_id: u64, users: &[User], friendships: &[Friendship]) -> Vec<User> {
    let friend_ids = friend_ids_of(user_id, friendships);
    users
        .iter()
        .filter(|user| user.id != user_id && !friend_ids.contains(&user.id) && user.status == Status::Active)
        .cloned()
        .collect()
}
