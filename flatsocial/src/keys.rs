use std::path::{Path, PathBuf};

/// Logical collection names used by the social data core.
pub mod collections {
    pub const USERS: &str = "users";
    pub const FRIENDSHIPS: &str = "friendships";
    pub const POSTS: &str = "posts";
    pub const POST_LIKES: &str = "post_likes";
}

/// File name backing a collection (`users` -> `users.json`).
pub fn collection_file(collection: &str) -> String {
    format!("{collection}.json")
}

/// Full path of a collection document inside the data directory.
pub fn collection_path(data_dir: &Path, collection: &str) -> PathBuf {
    data_dir.join(collection_file(collection))
}

/// Sibling path used while a collection is being rewritten.
pub fn staging_path(data_dir: &Path, collection: &str) -> PathBuf {
    data_dir.join(format!(".{collection}.json.tmp"))
}
