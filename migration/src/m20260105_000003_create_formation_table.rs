use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Formation::Table)
                    .if_not_exists()
                    .col(pk_auto(Formation::Id))
                    .col(string_uniq(Formation::FormationId))
                    .col(string(Formation::Name))
                    .col(string(Formation::FormationRef))
                    .col(string(Formation::Software))
                    .col(text_null(Formation::Prerequisites))
                    .col(text_null(Formation::Objectives))
                    .col(text_null(Formation::Competencies))
                    .col(boolean(Formation::IsCustom).default(false))
                    .col(string_null(Formation::OriginalId))
                    .col(
                        timestamp_with_time_zone(Formation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(integer_null(Formation::CreatedBy))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_formation_software")
                    .table(Formation::Table)
                    .col(Formation::Software)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Formation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Formation {
    Table,
    Id,
    FormationId,
    Name,
    FormationRef,
    Software,
    Prerequisites,
    Objectives,
    Competencies,
    IsCustom,
    OriginalId,
    CreatedAt,
    CreatedBy,
}
