use axum::http::HeaderMap;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
};

/// Header carrying the ID of the user authenticated by the upstream gateway.
pub const USER_ID_HEADER: &str = "x-user-id";

pub enum Permission {
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Resolves the acting user and checks every listed permission.
    ///
    /// An empty permission list only requires an authenticated, known user.
    ///
    /// # Returns
    /// - `Ok(User)` - The acting user
    /// - `Err(AuthError::MissingActor | InvalidActor | UserNotInDatabase)` - 401
    /// - `Err(AuthError::AccessDenied)` - 403
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_id = self.actor_id()?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an admin-only operation without admin permissions"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    fn actor_id(&self) -> Result<i32, AuthError> {
        let Some(value) = self.headers.get(USER_ID_HEADER) else {
            return Err(AuthError::MissingActor);
        };

        let value = value.to_str().map_err(|_| {
            AuthError::InvalidActor(String::from_utf8_lossy(value.as_bytes()).into_owned())
        })?;

        value
            .trim()
            .parse::<i32>()
            .map_err(|_| AuthError::InvalidActor(value.to_string()))
    }
}
