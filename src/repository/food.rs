use chrono::Utc;

use crate::{
    constants::FOOD_ITEMS_COLLECTION,
    error::{AppError, AppResult},
    models::FoodItem,
    store::JsonStore,
};

/// Shallow-merge patch: `None` keeps the stored value.
#[derive(Debug, Default, Clone)]
pub struct FoodItemPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
}

pub async fn find_all(store: &JsonStore) -> AppResult<Vec<FoodItem>> {
    Ok(store.read(FOOD_ITEMS_COLLECTION, Vec::new()).await?)
}

pub async fn find_by_id(store: &JsonStore, id: &str) -> AppResult<Option<FoodItem>> {
    let items = find_all(store).await?;
    Ok(items.into_iter().find(|i| i.id == id))
}

pub async fn find_by_category(store: &JsonStore, category: &str) -> AppResult<Vec<FoodItem>> {
    let items = find_all(store).await?;
    Ok(items
        .into_iter()
        .filter(|i| i.category == category)
        .collect())
}

pub async fn create(store: &JsonStore, mut item: FoodItem) -> AppResult<FoodItem> {
    let mut items = find_all(store).await?;
    item.created_at = Utc::now();
    items.push(item.clone());
    store.write(FOOD_ITEMS_COLLECTION, &items).await?;
    Ok(item)
}

pub async fn update(store: &JsonStore, id: &str, patch: FoodItemPatch) -> AppResult<FoodItem> {
    let mut items = find_all(store).await?;
    let item = items
        .iter_mut()
        .find(|i| i.id == id)
        .ok_or_else(|| AppError::NotFound("Food item not found".into()))?;

    if let Some(name) = patch.name {
        item.name = name;
    }
    if let Some(price) = patch.price {
        item.price = price;
    }
    if let Some(description) = patch.description {
        item.description = description;
    }
    if let Some(category) = patch.category {
        item.category = category;
    }
    if let Some(image) = patch.image {
        item.image = image;
    }

    let updated = item.clone();
    store.write(FOOD_ITEMS_COLLECTION, &items).await?;
    Ok(updated)
}

pub async fn delete(store: &JsonStore, id: &str) -> AppResult<FoodItem> {
    let mut items = find_all(store).await?;
    let index = items
        .iter()
        .position(|i| i.id == id)
        .ok_or_else(|| AppError::NotFound("Food item not found".into()))?;

    let removed = items.remove(index);
    store.write(FOOD_ITEMS_COLLECTION, &items).await?;
    Ok(removed)
}
