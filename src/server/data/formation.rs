//! Formation data repository.
//!
//! A formation and its schedule rows are written together inside one transaction so
//! a failed schedule insert never leaves a formation with a partial program.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::{
    formation::{CreateFormationParam, Formation, ScheduleDay, UpdateFormationParam},
    optional_text,
};

pub struct FormationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FormationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a formation and its schedule.
    ///
    /// # Returns
    /// - `Ok(Formation)` - The created formation with its schedule
    /// - `Err(DbErr)` - Database error, including unique violations on `formation_id`
    pub async fn create(&self, param: CreateFormationParam) -> Result<Formation, DbErr> {
        let txn = self.db.begin().await?;

        let formation = entity::formation::ActiveModel {
            formation_id: ActiveValue::Set(param.formation_id),
            name: ActiveValue::Set(param.name),
            formation_ref: ActiveValue::Set(param.formation_ref),
            software: ActiveValue::Set(param.software),
            prerequisites: ActiveValue::Set(param.prerequisites),
            objectives: ActiveValue::Set(param.objectives),
            competencies: ActiveValue::Set(param.competencies),
            is_custom: ActiveValue::Set(param.is_custom),
            original_id: ActiveValue::Set(param.original_id),
            created_at: ActiveValue::Set(Utc::now()),
            created_by: ActiveValue::Set(param.created_by),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let days = insert_schedule(&txn, formation.id, param.schedule).await?;

        txn.commit().await?;

        Ok(Formation::from_entity(formation, days))
    }

    /// Gets all formations, newest first, optionally restricted to one software.
    ///
    /// # Arguments
    /// - `software` - Exact software name to match, or `None` for every formation
    pub async fn get_all(&self, software: Option<&str>) -> Result<Vec<Formation>, DbErr> {
        let mut query = entity::prelude::Formation::find();
        if let Some(software) = software {
            query = query.filter(entity::formation::Column::Software.eq(software));
        }

        let formations = query
            .order_by_desc(entity::formation::Column::CreatedAt)
            .order_by_desc(entity::formation::Column::Id)
            .all(self.db)
            .await?;

        if formations.is_empty() {
            return Ok(Vec::new());
        }

        // Fetch every schedule row in one query and group by formation
        let ids: Vec<i32> = formations.iter().map(|f| f.id).collect();
        let mut days_by_formation: HashMap<i32, Vec<entity::formation_schedule_day::Model>> =
            HashMap::new();
        for day in entity::prelude::FormationScheduleDay::find()
            .filter(entity::formation_schedule_day::Column::FormationId.is_in(ids))
            .all(self.db)
            .await?
        {
            days_by_formation
                .entry(day.formation_id)
                .or_default()
                .push(day);
        }

        Ok(formations
            .into_iter()
            .map(|formation| {
                let days = days_by_formation.remove(&formation.id).unwrap_or_default();
                Formation::from_entity(formation, days)
            })
            .collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Formation>, DbErr> {
        let Some(formation) = entity::prelude::Formation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let days = find_schedule(self.db, id).await?;

        Ok(Some(Formation::from_entity(formation, days)))
    }

    /// Applies the provided fields to an existing formation.
    ///
    /// A provided schedule replaces every existing day. Provided blank optional texts
    /// clear their column.
    ///
    /// # Returns
    /// - `Ok(Some(Formation))` - The updated formation
    /// - `Ok(None)` - No formation with that ID
    /// - `Err(DbErr)` - Database error, including unique violations on `formation_id`
    pub async fn update(
        &self,
        id: i32,
        param: UpdateFormationParam,
    ) -> Result<Option<Formation>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(existing) = entity::prelude::Formation::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active: entity::formation::ActiveModel = existing.clone().into();

        if let Some(formation_id) = param.formation_id {
            active.formation_id = ActiveValue::Set(formation_id);
        }
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(formation_ref) = param.formation_ref {
            active.formation_ref = ActiveValue::Set(formation_ref);
        }
        if let Some(software) = param.software {
            active.software = ActiveValue::Set(software);
        }
        if let Some(prerequisites) = param.prerequisites {
            active.prerequisites = ActiveValue::Set(optional_text(Some(prerequisites)));
        }
        if let Some(objectives) = param.objectives {
            active.objectives = ActiveValue::Set(optional_text(Some(objectives)));
        }
        if let Some(competencies) = param.competencies {
            active.competencies = ActiveValue::Set(optional_text(Some(competencies)));
        }
        if let Some(is_custom) = param.is_custom {
            active.is_custom = ActiveValue::Set(is_custom);
        }
        if let Some(original_id) = param.original_id {
            active.original_id = ActiveValue::Set(optional_text(Some(original_id)));
        }

        // `update` fails on an unchanged model, so only write when a column changed
        let formation = if active.is_changed() {
            active.update(&txn).await?
        } else {
            existing
        };

        let days = match param.schedule {
            Some(schedule) => {
                entity::prelude::FormationScheduleDay::delete_many()
                    .filter(entity::formation_schedule_day::Column::FormationId.eq(id))
                    .exec(&txn)
                    .await?;

                insert_schedule(&txn, id, schedule).await?
            }
            None => find_schedule(&txn, id).await?,
        };

        txn.commit().await?;

        Ok(Some(Formation::from_entity(formation, days)))
    }

    /// Deletes a formation and its schedule.
    ///
    /// # Returns
    /// - `Ok(true)` - Formation deleted
    /// - `Ok(false)` - No formation with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::FormationScheduleDay::delete_many()
            .filter(entity::formation_schedule_day::Column::FormationId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Formation::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}

async fn find_schedule<C: ConnectionTrait>(
    conn: &C,
    formation_id: i32,
) -> Result<Vec<entity::formation_schedule_day::Model>, DbErr> {
    entity::prelude::FormationScheduleDay::find()
        .filter(entity::formation_schedule_day::Column::FormationId.eq(formation_id))
        .order_by_asc(entity::formation_schedule_day::Column::Position)
        .all(conn)
        .await
}

async fn insert_schedule<C: ConnectionTrait>(
    conn: &C,
    formation_id: i32,
    schedule: Vec<ScheduleDay>,
) -> Result<Vec<entity::formation_schedule_day::Model>, DbErr> {
    let mut days = Vec::with_capacity(schedule.len());

    for (position, day) in schedule.into_iter().enumerate() {
        let model = entity::formation_schedule_day::ActiveModel {
            formation_id: ActiveValue::Set(formation_id),
            position: ActiveValue::Set(position as i32),
            day: ActiveValue::Set(day.day),
            content: ActiveValue::Set(day.content),
            methods: ActiveValue::Set(day.methods),
            theory_hours: ActiveValue::Set(day.theory_hours),
            practice_hours: ActiveValue::Set(day.practice_hours),
            ..Default::default()
        }
        .insert(conn)
        .await?;

        days.push(model);
    }

    Ok(days)
}
