use tempfile::TempDir;

use axum_food_ordering_api::{
    dto::auth::{LoginRequest, RegisterRequest},
    error::AppError,
    models::User,
    repository::users::{self, UserPatch},
    services::auth_service,
    state::AppState,
    store::JsonStore,
};

fn setup_state() -> (AppState, TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let state = AppState {
        store: JsonStore::new(dir.path()),
    };
    (state, dir)
}

fn sample_user(userid: &str, email: &str) -> User {
    User {
        userid: userid.to_string(),
        email: email.to_string(),
        password: "$argon2id$unused-in-this-test".to_string(),
        role: "user".to_string(),
        name: None,
    }
}

#[tokio::test]
async fn duplicate_userid_or_email_is_rejected_and_nothing_is_written() {
    let (state, _dir) = setup_state();
    users::create(&state.store, sample_user("alice", "alice@example.com"))
        .await
        .unwrap();

    let err = users::create(&state.store, sample_user("alice", "other@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::DuplicateKey(_)));

    let err = users::create(&state.store, sample_user("bob", "alice@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::DuplicateKey(_)));

    let all = users::find_all(&state.store).await.unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn update_is_a_shallow_merge() {
    let (state, _dir) = setup_state();
    users::create(&state.store, sample_user("alice", "alice@example.com"))
        .await
        .unwrap();

    let updated = users::update(
        &state.store,
        "alice",
        UserPatch {
            role: Some("manager".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    // Unspecified fields keep their prior values.
    assert_eq!(updated.role, "manager");
    assert_eq!(updated.email, "alice@example.com");
    assert_eq!(updated.password, "$argon2id$unused-in-this-test");

    let err = users::update(&state.store, "ghost", UserPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn delete_removes_exactly_one_record() {
    let (state, _dir) = setup_state();
    users::create(&state.store, sample_user("alice", "alice@example.com"))
        .await
        .unwrap();
    users::create(&state.store, sample_user("bob", "bob@example.com"))
        .await
        .unwrap();

    let removed = users::delete(&state.store, "alice").await.unwrap();
    assert_eq!(removed.userid, "alice");

    let remaining = users::find_all(&state.store).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].userid, "bob");

    let err = users::delete(&state.store, "alice").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn register_then_login_round_trip() {
    let (state, _dir) = setup_state();

    let resp = auth_service::register_user(
        &state,
        RegisterRequest {
            userid: "carol".to_string(),
            email: "carol@example.com".to_string(),
            password: "hunter2".to_string(),
            role: Some("superadmin".to_string()),
            name: None,
        },
    )
    .await
    .unwrap();
    // Unknown roles are downgraded, not rejected.
    assert_eq!(resp.message, "User registered successfully as user");

    let login = auth_service::login_user(
        &state,
        LoginRequest {
            email: "carol@example.com".to_string(),
            password: "hunter2".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(login.user.userid, "carol");
    assert_eq!(login.user.role, "user");
    assert_eq!(login.user.name, "Carol");

    let err = auth_service::login_user(
        &state,
        LoginRequest {
            email: "carol@example.com".to_string(),
            password: "wrong".to_string(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(_)));
}

#[tokio::test]
async fn register_rejects_blank_fields_and_duplicates() {
    let (state, _dir) = setup_state();

    let err = auth_service::register_user(
        &state,
        RegisterRequest {
            userid: "  ".to_string(),
            email: "x@example.com".to_string(),
            password: "pw".to_string(),
            role: None,
            name: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidArgument(_)));

    auth_service::register_user(
        &state,
        RegisterRequest {
            userid: "dave".to_string(),
            email: "dave@example.com".to_string(),
            password: "pw".to_string(),
            role: None,
            name: None,
        },
    )
    .await
    .unwrap();

    let err = auth_service::register_user(
        &state,
        RegisterRequest {
            userid: "dave".to_string(),
            email: "dave2@example.com".to_string(),
            password: "pw".to_string(),
            role: None,
            name: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::DuplicateKey(_)));
}
