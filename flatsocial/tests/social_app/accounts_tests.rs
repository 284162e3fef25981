use super::support::*;

#[tokio::test]
async fn register_persists_a_hashed_account() {
    let app = TestApp::new();
    let user = app.client.register("Ann", "ann@example.com", "secret1").await.expect("register");

    let raw: Value = serde_json::from_str(&std::fs::read_to_string(app.data_file("users")).expect("read"))
        .expect("json");
    assert_eq!(raw[0]["email"], "ann@example.com");
    assert_eq!(raw[0]["birthDate"], Value::Null);
    assert_eq!(raw[0]["role"], "user");
    assert_eq!(raw[0]["status"], "active");
    assert_ne!(raw[0]["password"], "secret1");
    assert_eq!(user.avatar, DEFAULT_AVATAR);
}

#[tokio::test]
async fn register_rejects_short_passwords_and_duplicates() {
    let app = TestApp::new();
    let err = app.client.register("Ann", "ann@example.com", "123").await.expect_err("short");
    assert_eq!(err.code(), "password_too_short");

    app.client.register("Ann", "ann@example.com", "secret1").await.expect("register");
    let err = app.client.register("Ann Two", "ANN@example.com", "secret2").await.expect_err("dup");
    assert_eq!(err.code(), "email_taken");
    assert_eq!(app.client.list_users().await.len(), 1);
}

#[tokio::test]
async fn register_reports_every_missing_field() {
    let app = TestApp::new();
    let err = app.client.register(" ", "", "").await.expect_err("missing");
    let RepoError::Validation(validation) = err else {
        panic!("expected validation error, got {err:?}");
    };
    let fields: Vec<&str> = validation.issues.iter().map(|issue| issue.field.as_str()).collect();
    assert_eq!(fields, vec!["name", "email", "password"]);
    assert_eq!(validation.code(), "missing_fields");
}

#[tokio::test]
async fn login_refuses_blocked_and_pending_and_routes_admins() {
    let app = TestApp::new();
    app.seed_users(&[
        member(1, "Ann"),
        with_status(member(2, "Bob"), Status::Blocked),
        with_status(member(3, "Cid"), Status::Pending),
        with_role(member(4, "Root"), Role::Admin),
    ])
    .await;

    let ann = app.client.login("ann@example.com", "legacy-pass").await.expect("ann");
    assert_eq!(ann.destination, flatsocial::Destination::News);
    assert_eq!(
        app.client.login("bob@example.com", "legacy-pass").await.expect_err("bob").code(),
        "account_blocked"
    );
    assert_eq!(
        app.client.login("cid@example.com", "legacy-pass").await.expect_err("cid").code(),
        "account_pending"
    );
    let root = app.client.login("root@example.com", "legacy-pass").await.expect("root");
    assert_eq!(root.destination, flatsocial::Destination::AdminPanel);

    assert_eq!(
        app.client.login("nobody@example.com", "legacy-pass").await.expect_err("nobody").code(),
        "invalid_credentials"
    );
}

#[tokio::test]
async fn legacy_cleartext_is_upgraded_once() {
    let app = TestApp::new();
    app.seed_users(&[member(1, "Ann")]).await;

    app.client.login("ann@example.com", "legacy-pass").await.expect("login");
    let stored = app.client.get_user(1).await.expect("user");
    assert!(flatsocial::social::passwords::is_hashed(&stored.password));

    app.client.login("ann@example.com", "legacy-pass").await.expect("login again");
    assert_eq!(
        app.client.login("ann@example.com", "wrong-pass").await.expect_err("wrong").code(),
        "invalid_credentials"
    );
}

#[tokio::test]
async fn admin_update_edits_selected_fields() {
    let app = TestApp::new();
    app.seed_users(&[member(1, "Ann"), member(2, "Bob")]).await;

    let update = UserUpdate {
        status: Some(Status::Blocked),
        birth_date: Some("1991-02-03".to_string()),
        ..UserUpdate::default()
    };
    let updated = app.client.update_user(1, update).await.expect("update");
    assert_eq!(updated.status, Status::Blocked);
    assert_eq!(updated.name, "Ann");
    assert_eq!(updated.birth_date.as_deref(), Some("1991-02-03"));
    assert!(updated.updated_at > updated.created_at);

    let clash = UserUpdate {
        email: Some("bob@example.com".to_string()),
        ..UserUpdate::default()
    };
    assert_eq!(app.client.update_user(1, clash).await.expect_err("clash").code(), "email_taken");

    let own = UserUpdate {
        email: Some("ANN@example.com".to_string()),
        ..UserUpdate::default()
    };
    app.client.update_user(1, own).await.expect("own email in new case");
    assert_eq!(app.client.get_user(404).await.expect_err("missing").code(), "not_found");
}
