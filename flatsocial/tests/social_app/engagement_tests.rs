use super::support::*;

async fn app_with_post() -> TestApp {
    let app = TestApp::new();
    app.seed_users(&[member(1, "Ann"), member(2, "Bob"), member(3, "Cid"), member(4, "Dee")]).await;
    app.seed_posts(&[post_at(1, 1, "2024-01-01T00:00:00Z")]).await;
    app
}

#[tokio::test]
async fn create_post_rejects_whitespace_and_starts_empty() {
    let app = app_with_post().await;
    let err = app.client.create_post(1, "   ").await.expect_err("blank");
    assert_eq!(err.code(), "empty_content");

    let created = app.client.create_post(1, "hello").await.expect("create");
    assert_eq!(created.post.id, 2);
    assert_eq!(created.post.likes, 0);
    assert!(created.post.comments.is_empty());
    assert!(!created.liked);
    assert_eq!(created.author.as_ref().map(|author| author.id), Some(1));

    let stored: Vec<Post> = app.client.load().await;
    assert_eq!(stored.len(), 2);
}

#[tokio::test]
async fn double_toggle_restores_state() {
    let app = app_with_post().await;
    let first = app.client.toggle_like(1, ActorRef::user(2)).await.expect("like");
    assert!(first.liked);
    assert_eq!(first.likes, 1);

    let second = app.client.toggle_like(1, ActorRef::user(2)).await.expect("unlike");
    assert!(!second.liked);
    assert_eq!(second.likes, 0);
    assert!(app.client.load::<PostLike>().await.is_empty());
}

#[tokio::test]
async fn toggle_without_actor_is_rejected() {
    let app = app_with_post().await;
    let err = app.client.toggle_like(1, ActorRef::default()).await.expect_err("no actor");
    assert_eq!(err.code(), "user_id_required");

    let session_only = ActorRef {
        session: Some(3),
        ..ActorRef::default()
    };
    let toggle = app.client.toggle_like(1, session_only).await.expect("like");
    assert!(toggle.liked);
}

#[tokio::test]
async fn concurrent_toggles_by_distinct_users_all_land() {
    let app = app_with_post().await;
    let client = &app.client;

    let (a, b, c, d) = tokio::join!(
        client.toggle_like(1, ActorRef::user(1)),
        client.toggle_like(1, ActorRef::user(2)),
        client.toggle_like(1, ActorRef::user(3)),
        client.toggle_like(1, ActorRef::user(4)),
    );
    for toggle in [a, b, c, d] {
        assert!(toggle.expect("toggle").liked);
    }

    let posts: Vec<Post> = client.load().await;
    assert_eq!(posts[0].likes, 4);
    assert_eq!(client.load::<PostLike>().await.len(), 4);
}

#[tokio::test]
async fn concurrent_toggles_from_cloned_clients_share_locks() {
    let app = app_with_post().await;
    let left = app.client.clone();
    let right = app.client.clone();

    let (first, second) = tokio::join!(
        left.toggle_like(1, ActorRef::user(2)),
        right.toggle_like(1, ActorRef::user(3)),
    );
    first.expect("left toggle");
    second.expect("right toggle");

    let likes: Vec<PostLike> = app.client.load().await;
    let mut ids: Vec<u64> = likes.iter().map(|like| like.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn comments_snapshot_their_author() {
    let app = app_with_post().await;
    let comment = app.client.add_comment(1, 2, "  first!  ").await.expect("comment");
    assert_eq!(comment.id, 1);
    assert_eq!(comment.content, "first!");

    let rename = UserUpdate {
        name: Some("Robert".to_string()),
        ..UserUpdate::default()
    };
    app.client.update_user(2, rename).await.expect("rename");

    let posts: Vec<Post> = app.client.load().await;
    let stored = &posts[0].comments[0];
    assert_eq!(stored.author.as_ref().map(|author| author.name.as_str()), Some("Bob"));
}

#[tokio::test]
async fn comments_on_missing_targets_change_nothing() {
    let app = app_with_post().await;
    let before = std::fs::read_to_string(app.data_file("posts")).expect("read");

    assert_eq!(app.client.add_comment(99, 1, "hi").await.expect_err("post").code(), "not_found");
    assert_eq!(app.client.add_comment(1, 99, "hi").await.expect_err("user").code(), "not_found");
    assert_eq!(app.client.add_comment(1, 1, "\t").await.expect_err("blank").code(), "empty_comment");

    let after = std::fs::read_to_string(app.data_file("posts")).expect("read");
    assert_eq!(before, after);
}

#[tokio::test]
async fn like_on_missing_post_is_not_found() {
    let app = app_with_post().await;
    let err = app.client.toggle_like(404, ActorRef::user(1)).await.expect_err("missing");
    assert!(matches!(err, RepoError::NotFound { .. }));
    assert_eq!(err.code(), "not_found");
}
