pub mod feed;
pub mod friends;
pub mod posts;
pub mod users;
