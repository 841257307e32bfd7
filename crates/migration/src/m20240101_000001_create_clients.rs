//! Create `clients` table.
//!
//! Free-text contact columns; only the id is constrained.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clients::Table)
                    .if_not_exists()
                    .col(big_integer(Clients::Id).auto_increment().primary_key())
                    .col(string(Clients::Name).not_null())
                    .col(string(Clients::Email).not_null())
                    .col(string(Clients::Phone).not_null())
                    .col(string(Clients::Address).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Clients::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Clients { Table, Id, Name, Email, Phone, Address }
