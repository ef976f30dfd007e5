//! Create `menu_item` and `staff`; neither references other tables.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuItem::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuItem::Id))
                    .col(string(MenuItem::Name))
                    .col(text(MenuItem::Description))
                    .col(double(MenuItem::Price))
                    .col(string(MenuItem::Category))
                    .col(boolean(MenuItem::Available).default(true))
                    .col(timestamp_with_time_zone(MenuItem::CreatedAt))
                    .col(timestamp_with_time_zone(MenuItem::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Staff::Table)
                    .if_not_exists()
                    .col(pk_auto(Staff::Id))
                    .col(string(Staff::Name))
                    .col(string_uniq(Staff::Email))
                    .col(string(Staff::Phone))
                    .col(string(Staff::Role))
                    .col(string_len(Staff::Status, 32))
                    .col(timestamp_with_time_zone(Staff::CreatedAt))
                    .col(timestamp_with_time_zone(Staff::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Staff::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(MenuItem::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum MenuItem {
    Table,
    Id,
    Name,
    Description,
    Price,
    Category,
    Available,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Staff {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Role,
    Status,
    CreatedAt,
    UpdatedAt,
}
