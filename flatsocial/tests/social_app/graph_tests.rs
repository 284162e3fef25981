use super::support::*;

#[tokio::test]
async fn add_friend_is_idempotent_per_direction() {
    let app = TestApp::new();
    let added = app.client.add_friend(1, 2).await.expect("add");
    assert!(matches!(added, FriendshipChange::Added(ref edge) if edge.connects(1, 2)));
    assert_eq!(app.client.add_friend(1, 2).await.expect("again"), FriendshipChange::AlreadyFriends);

    // The reverse direction is a separate edge.
    assert!(matches!(app.client.add_friend(2, 1).await.expect("reverse"), FriendshipChange::Added(_)));
    assert_eq!(app.client.load::<Friendship>().await.len(), 2);
}

#[tokio::test]
async fn directed_and_mutual_unfriend() {
    let app = TestApp::new();
    app.befriend(1, 2).await;
    app.befriend(2, 1).await;
    app.befriend(1, 3).await;
    app.befriend(3, 1).await;

    assert_eq!(app.client.remove_friend(1, 2, Unfriend::Directed).await.expect("directed"), 1);
    assert_eq!(app.client.remove_friend(1, 3, Unfriend::Mutual).await.expect("mutual"), 2);
    assert_eq!(app.client.remove_friend(1, 3, Unfriend::Mutual).await.expect("nothing left"), 0);

    let remaining = app.client.load::<Friendship>().await;
    assert_eq!(remaining.len(), 1);
    assert!(remaining[0].connects(2, 1));
}

#[tokio::test]
async fn friends_page_and_profile_agree() {
    let app = TestApp::new();
    app.seed_users(&[
        member(1, "Ann"),
        member(2, "Bob"),
        member(3, "Cid"),
        with_status(member(4, "Dee"), Status::Pending),
    ])
    .await;
    app.befriend(1, 3).await;

    let page = app.client.friends_page(1).await.expect("friends page");
    assert_eq!(page.friends.iter().map(|user| user.id).collect::<Vec<_>>(), vec![3]);
    assert_eq!(page.potential_friends.iter().map(|user| user.id).collect::<Vec<_>>(), vec![2]);

    let profile = app.client.profile(1).await.expect("profile");
    assert_eq!(profile.friends_count, 1);
    assert_eq!(profile.friends[0].name, "Cid");
}
