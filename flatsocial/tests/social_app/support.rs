pub(crate) use flatsocial::{
    ActorRef, Client, CollectionStore, Config, Friendship, FriendshipChange, GatePolicy, JsonFileStore, Post,
    PostLike, RepoError, Role, Status, Timestamp, Unfriend, User, UserUpdate, models::DEFAULT_AVATAR,
};
pub(crate) use serde_json::{Value, json};
pub(crate) use tempfile::TempDir;

/// A client over a fresh temporary data directory.
pub(crate) struct TestApp {
    pub(crate) dir: TempDir,
    pub(crate) client: Client<JsonFileStore>,
}

impl TestApp {
    pub(crate) fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut config = Config::default();
        config.storage.data_dir = dir.path().join("data").display().to_string();
        config.accounts.bcrypt_cost = 4;
        let client = Client::open(config).expect("open client");
        Self { dir, client }
    }

    pub(crate) fn data_file(&self, collection: &str) -> std::path::PathBuf {
        self.dir.path().join("data").join(format!("{collection}.json"))
    }

    pub(crate) fn write_raw(&self, collection: &str, document: &Value) {
        let path = self.data_file(collection);
        std::fs::create_dir_all(path.parent().expect("parent")).expect("create data dir");
        std::fs::write(path, serde_json::to_string_pretty(document).expect("encode")).expect("write document");
    }

    pub(crate) async fn seed_users(&self, users: &[User]) {
        assert!(self.client.save(users).await, "seed users");
    }

    pub(crate) async fn seed_posts(&self, posts: &[Post]) {
        assert!(self.client.save(posts).await, "seed posts");
    }

    pub(crate) async fn befriend(&self, user_id: u64, friend_id: u64) {
        self.client.add_friend(user_id, friend_id).await.expect("add friend");
    }
}

pub(crate) fn at(raw: &str) -> Timestamp {
    Timestamp::parse(raw).expect("timestamp")
}

pub(crate) fn member(id: u64, name: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        password: "legacy-pass".to_string(),
        birth_date: None,
        avatar: DEFAULT_AVATAR.to_string(),
        role: Role::User,
        status: Status::Active,
        created_at: at("2024-01-01T00:00:00Z"),
        updated_at: at("2024-01-01T00:00:00Z"),
    }
}

pub(crate) fn with_status(user: User, status: Status) -> User {
    User { status, ..user }
}

pub(crate) fn with_role(user: User, role: Role) -> User {
    User { role, ..user }
}

pub(crate) fn post_at(id: u64, user_id: u64, created_at: &str) -> Post {
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

pub(crate) fn feed_ids(feed: &[flatsocial::EnrichedPost]) -> Vec<u64> {
    feed.iter().map(|entry| entry.post.id).collect()
}
