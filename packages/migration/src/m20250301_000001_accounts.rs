use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Managers {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    EmailNormalized,
    PasswordHash,
    CreatedAt,
}

#[derive(Iden)]
enum Clients {
    Table,
    Id,
    Phone,
    FirstName,
    LastName,
    Email,
    EmailNormalized,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // managers
        manager
            .create_table(
                Table::create()
                    .table(Managers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Managers::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Managers::FirstName).string().not_null())
                    .col(ColumnDef::new(Managers::LastName).string().not_null())
                    .col(ColumnDef::new(Managers::Email).string().not_null())
                    .col(
                        ColumnDef::new(Managers::EmailNormalized)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Managers::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(Managers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_managers_email_normalized_unique")
                    .table(Managers::Table)
                    .col(Managers::EmailNormalized)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // clients
        manager
            .create_table(
                Table::create()
                    .table(Clients::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Clients::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Clients::Phone).string().not_null())
                    .col(ColumnDef::new(Clients::FirstName).string().null())
                    .col(ColumnDef::new(Clients::LastName).string().null())
                    .col(ColumnDef::new(Clients::Email).string().null())
                    .col(ColumnDef::new(Clients::EmailNormalized).string().null())
                    .col(
                        ColumnDef::new(Clients::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // one client per phone number; registration relies on this
        manager
            .create_index(
                Index::create()
                    .name("idx_clients_phone_unique")
                    .table(Clients::Table)
                    .col(Clients::Phone)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_clients_email_normalized_unique")
                    .table(Clients::Table)
                    .col(Clients::EmailNormalized)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_clients_email_normalized_unique")
                    .table(Clients::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_clients_phone_unique")
                    .table(Clients::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Clients::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_managers_email_normalized_unique")
                    .table(Managers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Managers::Table).to_owned())
            .await?;

        Ok(())
    }
}
