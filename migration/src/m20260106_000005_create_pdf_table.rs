use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // client_id and created_by are checked by the application; a deleted
        // client leaves its documents in place.
        manager
            .create_table(
                Table::create()
                    .table(Pdf::Table)
                    .if_not_exists()
                    .col(pk_auto(Pdf::Id))
                    .col(string_uniq(Pdf::Filename))
                    .col(string(Pdf::OriginalName))
                    .col(string(Pdf::Path))
                    .col(big_integer(Pdf::Size))
                    .col(string(Pdf::Mimetype))
                    .col(string(Pdf::FicheType))
                    .col(integer_null(Pdf::ClientId))
                    .col(json_null(Pdf::FormData))
                    .col(
                        timestamp_with_time_zone(Pdf::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(integer_null(Pdf::CreatedBy))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_pdf_fiche_type_client_id")
                    .table(Pdf::Table)
                    .col(Pdf::FicheType)
                    .col(Pdf::ClientId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pdf::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Pdf {
    Table,
    Id,
    Filename,
    OriginalName,
    Path,
    Size,
    Mimetype,
    FicheType,
    ClientId,
    FormData,
    CreatedAt,
    CreatedBy,
}
