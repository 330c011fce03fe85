use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use password_hash::rand_core::OsRng;

use crate::{
    constants::VALID_USER_ROLES,
    dto::auth::{LoginRequest, LoginResponse, PublicUser, RegisterRequest, RegisterResponse},
    error::{AppError, AppResult},
    models::User,
    repository::users,
    state::AppState,
};

fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?;
    Ok(hash.to_string())
}

pub async fn register_user(
    state: &AppState,
    payload: RegisterRequest,
) -> AppResult<RegisterResponse> {
    let RegisterRequest {
        userid,
        email,
        password,
        role,
        name,
    } = payload;

    if userid.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err(AppError::InvalidArgument(
            "User ID, password, and email are required".into(),
        ));
    }

    // Unknown roles are silently downgraded rather than rejected.
    let role = role
        .filter(|r| VALID_USER_ROLES.contains(&r.as_str()))
        .unwrap_or_else(|| "user".to_string());

    let user = User {
        userid,
        email,
        password: hash_password(&password)?,
        role: role.clone(),
        name,
    };

    let user = users::create(&state.store, user).await?;
    tracing::info!(userid = %user.userid, role = %role, "user registered");

    Ok(RegisterResponse {
        status: "success".into(),
        message: format!("User registered successfully as {role}"),
    })
}

pub async fn login_user(state: &AppState, payload: LoginRequest) -> AppResult<LoginResponse> {
    let LoginRequest { email, password } = payload;

    if email.is_empty() || password.is_empty() {
        return Err(AppError::InvalidArgument(
            "Email and password are required".into(),
        ));
    }

    let user = users::find_by_email(&state.store, &email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid email or password".into()))?;

    let parsed_hash = PasswordHash::new(&user.password)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;

    let argon2 = Argon2::default();
    if argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_err()
    {
        return Err(AppError::Unauthorized("Invalid email or password".into()));
    }

    Ok(LoginResponse {
        status: "success".into(),
        message: "User authenticated".into(),
        user: public_user(user),
    })
}

fn public_user(user: User) -> PublicUser {
    let name = user.name.unwrap_or_else(|| capitalize(&user.userid));
    PublicUser {
        userid: user.userid,
        email: user.email,
        name,
        role: user.role,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
