use tempfile::TempDir;

use axum_food_ordering_api::{
    dto::food::{AddFoodItemRequest, UpdateFoodItemRequest},
    error::AppError,
    services::food_service,
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

fn sample_item(name: &str) -> AddFoodItemRequest {
    AddFoodItemRequest {
        id: None,
        name: name.to_string(),
        price: 9.5,
        description: "A test dish".to_string(),
        category: "Salad".to_string(),
        image: "https://img.example.com/salad.png".to_string(),
    }
}

#[tokio::test]
async fn adding_an_item_generates_a_short_id() {
    let (state, _dir) = setup_state();

    let item = food_service::add_item(&state, sample_item("Greek Salad"))
        .await
        .unwrap();
    assert_eq!(item.id.len(), 12);
    assert!(item.id.chars().all(|c| c.is_ascii_hexdigit()));

    let listed = food_service::list_items(&state).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Greek Salad");
}

#[tokio::test]
async fn add_item_validates_name_price_and_description() {
    let (state, _dir) = setup_state();

    let mut bad = sample_item(" ");
    let err = food_service::add_item(&state, bad).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidArgument(_)));

    bad = sample_item("Rolls");
    bad.price = 0.0;
    let err = food_service::add_item(&state, bad).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidArgument(_)));

    bad = sample_item("Rolls");
    bad.description = "".to_string();
    let err = food_service::add_item(&state, bad).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidArgument(_)));

    assert!(food_service::list_items(&state).await.unwrap().is_empty());
}

#[tokio::test]
async fn update_merges_only_supplied_fields() {
    let (state, _dir) = setup_state();
    let item = food_service::add_item(&state, sample_item("Pasta"))
        .await
        .unwrap();

    let updated = food_service::update_item(
        &state,
        &item.id,
        UpdateFoodItemRequest {
            price: Some(12.0),
            name: None,
            description: None,
            category: None,
            image: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.price, 12.0);
    assert_eq!(updated.name, "Pasta");
    assert_eq!(updated.category, "Salad");

    let err = food_service::update_item(
        &state,
        "missing",
        UpdateFoodItemRequest {
            price: Some(1.0),
            name: None,
            description: None,
            category: None,
            image: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn category_filter_and_delete() {
    let (state, _dir) = setup_state();
    let salad = food_service::add_item(&state, sample_item("Greek Salad"))
        .await
        .unwrap();
    let mut cake = sample_item("Cheesecake");
    cake.category = "Cake".to_string();
    food_service::add_item(&state, cake).await.unwrap();

    let salads = food_service::list_items_by_category(&state, "Salad")
        .await
        .unwrap();
    assert_eq!(salads.len(), 1);
    assert_eq!(salads[0].id, salad.id);

    food_service::delete_item(&state, &salad.id).await.unwrap();
    let remaining = food_service::list_items(&state).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "Cheesecake");

    let err = food_service::delete_item(&state, &salad.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
