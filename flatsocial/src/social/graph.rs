//! Friendship edges.

use log::info;
use serde::Serialize;

use crate::{
    client::Client,
    errors::{RepoError, ValidationError},
    id::next_id,
    keys::collections,
    models::{Friendship, User},
    social::relations::{friends_of, potential_friends},
    store::CollectionStore,
    types::Timestamp,
};

/// Outcome of [`Client::add_friend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FriendshipChange {
    Added(Friendship),
    /// The exact `(user, friend)` edge already existed; nothing was written.
    AlreadyFriends,
}

/// Which edges [`Client::remove_friend`] deletes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unfriend {
    /// Only `(user, friend)`.
    #[default]
    Directed,
    /// `(user, friend)` and `(friend, user)`.
    Mutual,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendsPage {
    pub user: User,
    pub friends: Vec<User>,
    pub potential_friends: Vec<User>,
}

impl<S> Client<S>
where
    S: CollectionStore,
{
    pub async fn add_friend(&self, user_id: u64, friend_id: u64) -> Result<FriendshipChange, RepoError> {
        if user_id == friend_id {
            return Err(ValidationError::single("friendId", "self_friendship", "users cannot befriend themselves").into());
        }

        let _guard = self.lock(&[collections::FRIENDSHIPS]).await;
        let mut friendships: Vec<Friendship> = self.try_load().await?;
        if friendships.iter().any(|edge| edge.connects(user_id, friend_id)) {
            return Ok(FriendshipChange::AlreadyFriends);
        }

        let edge = Friendship {
            id: next_id(&friendships),
            user_id,
            friend_id,
            created_at: Some(Timestamp::now()),
        };
        friendships.push(edge.clone());
        self.persist(&friendships).await?;
        info!("user {user_id} added friend {friend_id}");
        Ok(FriendshipChange::Added(edge))
    }

    /// Delete friendship edges per `mode`, returning how many were removed.
    pub async fn remove_friend(&self, user_id: u64, friend_id: u64, mode: Unfriend) -> Result<usize, RepoError> {
        let _guard = self.lock(&[collections::FRIENDSHIPS]).await;
        let mut friendships: Vec<Friendship> = self.try_load().await?;
        let before = friendships.len();
        friendships.retain(|edge| {
            let forward = edge.connects(user_id, friend_id);
            let reverse = mode == Unfriend::Mutual && edge.connects(friend_id, user_id);
            !(forward || reverse)
        });

        let removed = before - friendships.len();
        if removed > 0 {
            self.persist(&friendships).await?;
            info!("user {user_id} removed friend {friend_id} ({removed} edges)");
        }
        Ok(removed)
    }

    pub async fn friends_page(&self, user_id: u64) -> Result<FriendsPage, RepoError> {
        let users: Vec<User> = self.load().await;
        let friendships: Vec<Friendship> = self.load().await;
        let user = users
            .iter()
            .find(|user| user.id == user_id)
            .cloned()
            .ok_or_else(RepoError::user_not_found)?;

        Ok(FriendsPage {
            friends: friends_of(user_id, &users, &friendships),
            potential_friends: potential_friends(user_id, &users, &friendships),
            user,
        })
    }
}
