use sea_orm::DatabaseConnection;

use crate::server::{
    data::client::ClientRepository,
    error::AppError,
    model::client::{Client, CreateClientParam, UpdateClientParam},
    util::db::is_unique_violation,
};

const DUPLICATE_CLIENT_ID: &str = "Client ID already exists";

pub struct ClientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a client.
    ///
    /// # Returns
    /// - `Ok(Client)` - The created client
    /// - `Err(AppError::Conflict)` - `client_id` already taken
    /// - `Err(AppError::DbErr)` - Any other database failure
    pub async fn create(&self, param: CreateClientParam) -> Result<Client, AppError> {
        let client = ClientRepository::new(self.db)
            .create(param)
            .await
            .map_err(map_conflict)?;

        tracing::info!("Created client {} ({})", client.id, client.client_id);

        Ok(client)
    }

    pub async fn get_all(&self) -> Result<Vec<Client>, AppError> {
        Ok(ClientRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Client>, AppError> {
        Ok(ClientRepository::new(self.db).find_by_id(id).await?)
    }

    /// Merges the provided fields into a client.
    ///
    /// Returns `None` if the client doesn't exist.
    pub async fn update(
        &self,
        id: i32,
        param: UpdateClientParam,
    ) -> Result<Option<Client>, AppError> {
        ClientRepository::new(self.db)
            .update(id, param)
            .await
            .map_err(map_conflict)
    }

    /// Deletes a client. Returns false if it didn't exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = ClientRepository::new(self.db).delete(id).await?;

        if deleted {
            tracing::info!("Deleted client {}", id);
        }

        Ok(deleted)
    }
}

fn map_conflict(err: sea_orm::DbErr) -> AppError {
    if is_unique_violation(&err) {
        AppError::Conflict(DUPLICATE_CLIENT_ID.to_string())
    } else {
        err.into()
    }
}
