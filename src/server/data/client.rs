//! Client data repository for database operations.
//!
//! Provides CRUD for client records. Uniqueness of the business code is left to the
//! `client_id` unique index; callers inspect the returned `DbErr` to detect conflicts.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::client::{Client, CreateClientParam, UpdateClientParam};

pub struct ClientRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new client stamped with the current time.
    ///
    /// # Returns
    /// - `Ok(Client)` - The created client
    /// - `Err(DbErr)` - Database error, including unique violations on `client_id`
    pub async fn create(&self, param: CreateClientParam) -> Result<Client, DbErr> {
        let entity = entity::client::ActiveModel {
            client_id: ActiveValue::Set(param.client_id),
            name: ActiveValue::Set(param.name),
            matricule_fiscal: ActiveValue::Set(param.matricule_fiscal),
            address: ActiveValue::Set(param.address),
            phone: ActiveValue::Set(param.phone),
            email: ActiveValue::Set(param.email),
            created_at: ActiveValue::Set(Utc::now()),
            created_by: ActiveValue::Set(param.created_by),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Client::from_entity(entity))
    }

    /// Gets all clients, newest first.
    pub async fn get_all(&self) -> Result<Vec<Client>, DbErr> {
        let entities = entity::prelude::Client::find()
            .order_by_desc(entity::client::Column::CreatedAt)
            .order_by_desc(entity::client::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Client::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Client>, DbErr> {
        let entity = entity::prelude::Client::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Client::from_entity))
    }

    /// Finds every client whose ID is in `ids`. Unknown IDs are skipped.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Client>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Client::find()
            .filter(entity::client::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Client::from_entity).collect())
    }

    /// Checks whether a client with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Client::find()
            .filter(entity::client::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Applies the provided fields to an existing client.
    ///
    /// A provided blank `email` clears the column.
    ///
    /// # Returns
    /// - `Ok(Some(Client))` - The updated client
    /// - `Ok(None)` - No client with that ID
    /// - `Err(DbErr)` - Database error, including unique violations on `client_id`
    pub async fn update(
        &self,
        id: i32,
        param: UpdateClientParam,
    ) -> Result<Option<Client>, DbErr> {
        let Some(existing) = entity::prelude::Client::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::client::ActiveModel = existing.clone().into();

        if let Some(client_id) = param.client_id {
            active.client_id = ActiveValue::Set(client_id);
        }
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(matricule_fiscal) = param.matricule_fiscal {
            active.matricule_fiscal = ActiveValue::Set(matricule_fiscal);
        }
        if let Some(address) = param.address {
            active.address = ActiveValue::Set(address);
        }
        if let Some(phone) = param.phone {
            active.phone = ActiveValue::Set(phone);
        }
        if let Some(email) = param.email {
            active.email = ActiveValue::Set(Some(email).filter(|e| !e.is_empty()));
        }

        if !active.is_changed() {
            return Ok(Some(Client::from_entity(existing)));
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Client::from_entity(entity)))
    }

    /// Deletes a client by ID.
    ///
    /// PDF records referencing the client are left in place; their client summary
    /// becomes `null` in listings.
    ///
    /// # Returns
    /// - `Ok(true)` - Client deleted
    /// - `Ok(false)` - No client with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Client::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
