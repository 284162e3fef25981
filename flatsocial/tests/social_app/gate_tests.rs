use super::support::*;

async fn app_with_directory() -> TestApp {
    let app = TestApp::new();
    app.seed_users(&[
        member(1, "Ann"),
        with_status(member(2, "Bob"), Status::Blocked),
        with_status(member(3, "Cid"), Status::Pending),
        with_role(member(4, "Root"), Role::Admin),
    ])
    .await;
    app
}

#[tokio::test]
async fn gate_maps_each_status_to_its_code() {
    let app = app_with_directory().await;
    let refused = |result: Result<User, RepoError>| result.expect_err("refused").code().to_string();

    assert_eq!(refused(app.client.authorize("x1", GatePolicy::Members).await), "invalid_user");
    assert_eq!(refused(app.client.authorize("77", GatePolicy::Members).await), "user_not_found");
    assert_eq!(refused(app.client.authorize("2", GatePolicy::Members).await), "account_blocked");
    assert_eq!(refused(app.client.authorize("3", GatePolicy::Members).await), "account_pending");
    assert_eq!(refused(app.client.authorize("4", GatePolicy::Members).await), "admin_redirect");
}

#[tokio::test]
async fn gate_admits_active_members_and_admins_under_any() {
    let app = app_with_directory().await;
    assert_eq!(app.client.authorize(" 1 ", GatePolicy::Members).await.expect("ann").name, "Ann");
    assert!(app.client.authorize("4", GatePolicy::Any).await.expect("root").is_admin());
}

#[tokio::test]
async fn gate_follows_status_changes() {
    let app = app_with_directory().await;
    let block = UserUpdate {
        status: Some(Status::Blocked),
        ..UserUpdate::default()
    };
    app.client.update_user(1, block).await.expect("block");

    let err = app.client.authorize("1", GatePolicy::Members).await.expect_err("blocked");
    assert!(matches!(err, RepoError::Access { code: "account_blocked" }));
}
