use super::support::*;

#[tokio::test]
async fn feed_orders_newest_first() {
    let app = TestApp::new();
    app.seed_users(&[member(1, "Ann"), member(2, "Bob")]).await;
    app.befriend(1, 2).await;
    app.seed_posts(&[
        post_at(1, 1, "2024-01-01T00:00:00Z"),
        post_at(2, 2, "2024-01-03T00:00:00Z"),
        post_at(3, 1, "2024-01-02T00:00:00Z"),
    ])
    .await;

    let feed = app.client.build_feed(1).await;
    assert_eq!(feed_ids(&feed), vec![2, 3, 1]);
}

#[tokio::test]
async fn feed_excludes_strangers_and_reverse_only_edges() {
    let app = TestApp::new();
    app.seed_users(&[member(1, "Ann"), member(2, "Bob"), member(3, "Cid")]).await;
    // Bob counts Ann as a friend, Ann does not reciprocate.
    app.befriend(2, 1).await;
    app.seed_posts(&[
        post_at(1, 1, "2024-01-01T00:00:00Z"),
        post_at(2, 2, "2024-01-02T00:00:00Z"),
        post_at(3, 3, "2024-01-03T00:00:00Z"),
    ])
    .await;

    assert_eq!(feed_ids(&app.client.build_feed(1).await), vec![1]);
    assert_eq!(feed_ids(&app.client.build_feed(2).await), vec![2, 1]);
}

#[tokio::test]
async fn timestamps_compare_as_instants() {
    let app = TestApp::new();
    app.seed_users(&[member(1, "Ann")]).await;
    app.write_raw(
        "posts",
        &json!([
            { "id": 1, "userId": 1, "content": "evening NY", "createdAt": "2024-01-01T20:00:00-05:00" },
            { "id": 2, "userId": 1, "content": "small hours UTC", "createdAt": "2024-01-02T00:30:00Z" }
        ]),
    );

    // 20:00 -05:00 is 01:00 UTC on the 2nd, later than 00:30 UTC.
    assert_eq!(feed_ids(&app.client.build_feed(1).await), vec![1, 2]);
}

#[tokio::test]
async fn feed_marks_the_viewers_likes_and_tolerates_missing_authors() {
    let app = TestApp::new();
    app.seed_users(&[member(1, "Ann")]).await;
    app.befriend(1, 9).await;
    app.seed_posts(&[post_at(1, 9, "2024-01-01T00:00:00Z"), post_at(2, 1, "2024-01-02T00:00:00Z")])
        .await;
    app.client.toggle_like(1, ActorRef::user(1)).await.expect("like");

    let feed = app.client.build_feed(1).await;
    let ghost = feed.iter().find(|entry| entry.post.id == 1).expect("ghost post");
    assert!(ghost.author.is_none());
    assert!(ghost.liked);
    assert_eq!(ghost.post.likes, 1);

    let own = feed.iter().find(|entry| entry.post.id == 2).expect("own post");
    assert_eq!(own.author.as_ref().map(|author| author.name.as_str()), Some("Ann"));
    assert!(!own.liked);
}

#[tokio::test]
async fn news_page_counts_friends() {
    let app = TestApp::new();
    app.seed_users(&[member(1, "Ann"), member(2, "Bob"), member(3, "Cid")]).await;
    app.befriend(1, 2).await;
    app.befriend(1, 3).await;

    let page = app.client.news_page(1).await.expect("news");
    assert_eq!(page.friends_count, 2);
    assert!(page.posts.is_empty());
    assert_eq!(app.client.news_page(42).await.expect_err("missing").code(), "user_not_found");
}
