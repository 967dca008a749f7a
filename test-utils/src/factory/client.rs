//! Client factory for creating test client entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clients with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::client::ClientFactory;
///
/// let client = ClientFactory::new(&db)
///     .client_id("C-100")
///     .name("Acme")
///     .build()
///     .await?;
/// ```
pub struct ClientFactory<'a> {
    db: &'a DatabaseConnection,
    client_id: String,
    name: String,
    email: Option<String>,
    created_at: DateTime<Utc>,
    created_by: Option<i32>,
}

impl<'a> ClientFactory<'a> {
    /// Creates a new ClientFactory with default values.
    ///
    /// Defaults:
    /// - client_id: `"C-{id}"` where id is auto-incremented
    /// - name: `"Client {id}"`
    /// - email: `None`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            client_id: format!("C-{}", id),
            name: format!("Client {}", id),
            email: None,
            created_at: Utc::now(),
            created_by: None,
        }
    }

    /// Sets the business identifier.
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    /// Sets the client name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the contact email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the creation timestamp, used to control list ordering.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Sets the creating user's id.
    pub fn created_by(mut self, user_id: i32) -> Self {
        self.created_by = Some(user_id);
        self
    }

    /// Builds and inserts the client entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::client::Model)` - Created client entity
    /// - `Err(DbErr)` - Database error during insert (e.g. duplicate client_id)
    pub async fn build(self) -> Result<entity::client::Model, DbErr> {
        entity::client::ActiveModel {
            id: ActiveValue::NotSet,
            client_id: ActiveValue::Set(self.client_id),
            name: ActiveValue::Set(self.name),
            matricule_fiscal: ActiveValue::Set("0000000A".to_string()),
            address: ActiveValue::Set("1 Rue de Test".to_string()),
            phone: ActiveValue::Set("+216 00 000 000".to_string()),
            email: ActiveValue::Set(self.email),
            created_at: ActiveValue::Set(self.created_at),
            created_by: ActiveValue::Set(self.created_by),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a client with default values.
pub async fn create_client(db: &DatabaseConnection) -> Result<entity::client::Model, DbErr> {
    ClientFactory::new(db).build().await
}
