//! Create `guest` and its one-to-one `guest_preferences` / `guest_ai_insights` rows.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guest::Table)
                    .if_not_exists()
                    .col(pk_auto(Guest::Id))
                    .col(string(Guest::Name))
                    .col(string_uniq(Guest::Email))
                    .col(string(Guest::Phone))
                    .col(string(Guest::Nationality))
                    .col(string(Guest::IdType))
                    .col(string(Guest::IdNumber))
                    .col(timestamp_with_time_zone(Guest::JoinDate))
                    .col(timestamp_with_time_zone(Guest::CreatedAt))
                    .col(timestamp_with_time_zone(Guest::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GuestPreferences::Table)
                    .if_not_exists()
                    .col(pk_auto(GuestPreferences::Id))
                    .col(integer_uniq(GuestPreferences::GuestId))
                    .col(json_binary_null(GuestPreferences::RoomFloors))
                    .col(json_binary_null(GuestPreferences::MealTypes))
                    .col(json_binary_null(GuestPreferences::RoomTypes))
                    .col(json_binary_null(GuestPreferences::SpecialRequests))
                    .col(timestamp_with_time_zone(GuestPreferences::CreatedAt))
                    .col(timestamp_with_time_zone(GuestPreferences::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guest_preferences_guest")
                            .from(GuestPreferences::Table, GuestPreferences::GuestId)
                            .to(Guest::Table, Guest::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GuestAiInsights::Table)
                    .if_not_exists()
                    .col(pk_auto(GuestAiInsights::Id))
                    .col(integer_uniq(GuestAiInsights::GuestId))
                    .col(string(GuestAiInsights::MealPreference))
                    .col(string(GuestAiInsights::RoomPreference))
                    .col(string(GuestAiInsights::ServicePattern))
                    .col(string(GuestAiInsights::RiskScore))
                    .col(json_binary_null(GuestAiInsights::Recommendations))
                    .col(json_binary_null(GuestAiInsights::Complaints))
                    .col(timestamp_with_time_zone(GuestAiInsights::CreatedAt))
                    .col(timestamp_with_time_zone(GuestAiInsights::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guest_ai_insights_guest")
                            .from(GuestAiInsights::Table, GuestAiInsights::GuestId)
                            .to(Guest::Table, Guest::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(GuestAiInsights::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(GuestPreferences::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Guest::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Guest {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Nationality,
    IdType,
    IdNumber,
    JoinDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum GuestPreferences {
    Table,
    Id,
    GuestId,
    RoomFloors,
    MealTypes,
    RoomTypes,
    SpecialRequests,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum GuestAiInsights {
    Table,
    Id,
    GuestId,
    MealPreference,
    RoomPreference,
    ServicePattern,
    RiskScore,
    Recommendations,
    Complaints,
    CreatedAt,
    UpdatedAt,
}
