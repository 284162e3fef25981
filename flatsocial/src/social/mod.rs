//! Social operations built on the collection store.
//!
//! Pure helpers (`relations`, [`rank_feed`], [`check_user`]) work on loaded slices; the
//! async operations are inherent methods on [`Client`](crate::client::Client), grouped by
//! area in the submodules below.

pub mod accounts;
pub mod engagement;
pub mod feed;
pub mod gate;
pub mod graph;
pub mod passwords;
pub mod posting;
pub mod relations;

#[cfg(test)]
mod fixtures;

pub use accounts::{Destination, LoginOutcome, Profile, UserUpdate};
pub use engagement::{ActorRef, LikeToggle};
pub use feed::{EnrichedPost, NewsPage, rank_feed};
pub use gate::{GatePolicy, check_user};
pub use graph::{FriendsPage, FriendshipChange, Unfriend};
pub use relations::{friend_ids_of, friends_of, like_count, like_state_of, potential_friends};
