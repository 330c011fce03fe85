use crate::{
    constants::USERS_COLLECTION,
    error::{AppError, AppResult},
    models::User,
    store::JsonStore,
};

/// Shallow-merge patch: `None` keeps the stored value.
#[derive(Debug, Default, Clone)]
pub struct UserPatch {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub name: Option<String>,
}

pub async fn find_all(store: &JsonStore) -> AppResult<Vec<User>> {
    Ok(store.read(USERS_COLLECTION, Vec::new()).await?)
}

pub async fn find_by_email(store: &JsonStore, email: &str) -> AppResult<Option<User>> {
    let users = find_all(store).await?;
    Ok(users.into_iter().find(|u| u.email == email))
}

pub async fn find_by_userid(store: &JsonStore, userid: &str) -> AppResult<Option<User>> {
    let users = find_all(store).await?;
    Ok(users.into_iter().find(|u| u.userid == userid))
}

/// Appends a new user after checking both uniqueness keys against the
/// freshly-read collection.
pub async fn create(store: &JsonStore, user: User) -> AppResult<User> {
    let mut users = find_all(store).await?;

    if users.iter().any(|u| u.userid == user.userid) {
        return Err(AppError::DuplicateKey("User ID already exists".into()));
    }
    if users.iter().any(|u| u.email == user.email) {
        return Err(AppError::DuplicateKey("Email already exists".into()));
    }

    users.push(user.clone());
    store.write(USERS_COLLECTION, &users).await?;
    Ok(user)
}

pub async fn update(store: &JsonStore, userid: &str, patch: UserPatch) -> AppResult<User> {
    let mut users = find_all(store).await?;
    let user = users
        .iter_mut()
        .find(|u| u.userid == userid)
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    if let Some(email) = patch.email {
        user.email = email;
    }
    if let Some(password) = patch.password {
        user.password = password;
    }
    if let Some(role) = patch.role {
        user.role = role;
    }
    if let Some(name) = patch.name {
        user.name = Some(name);
    }

    let updated = user.clone();
    store.write(USERS_COLLECTION, &users).await?;
    Ok(updated)
}

pub async fn delete(store: &JsonStore, userid: &str) -> AppResult<User> {
    let mut users = find_all(store).await?;
    let index = users
        .iter()
        .position(|u| u.userid == userid)
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;

    let removed = users.remove(index);
    store.write(USERS_COLLECTION, &users).await?;
    Ok(removed)
}
