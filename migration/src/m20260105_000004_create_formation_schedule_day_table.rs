use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000003_create_formation_table::Formation;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FormationScheduleDay::Table)
                    .if_not_exists()
                    .col(pk_auto(FormationScheduleDay::Id))
                    .col(integer(FormationScheduleDay::FormationId))
                    .col(integer(FormationScheduleDay::Position))
                    .col(string(FormationScheduleDay::Day))
                    .col(text(FormationScheduleDay::Content))
                    .col(text(FormationScheduleDay::Methods))
                    .col(string(FormationScheduleDay::TheoryHours))
                    .col(string(FormationScheduleDay::PracticeHours))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_formation_schedule_day_formation_id")
                            .from(FormationScheduleDay::Table, FormationScheduleDay::FormationId)
                            .to(Formation::Table, Formation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FormationScheduleDay::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FormationScheduleDay {
    Table,
    Id,
    FormationId,
    Position,
    Day,
    Content,
    Methods,
    TheoryHours,
    PracticeHours,
}
