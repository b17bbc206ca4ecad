use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Activity;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(Activity::Table)
        .col(
            ColumnDef::new(Activity::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(Activity::UserId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(
            ColumnDef::new(Activity::Title)
                .string()
                .not_null()
                .string_len(120),
        )
        .col(
            ColumnDef::new(Activity::Description)
                .string()
                .not_null()
                .string_len(2000),
        )
        .col(
            ColumnDef::new(Activity::ActivityType)
                .string()
                .not_null()
                .string_len(20),
        )
        .col(ColumnDef::new(Activity::Quantity).double().not_null())
        .col(
            ColumnDef::new(Activity::Unit)
                .string()
                .not_null()
                .string_len(15),
        )
        .col(
            ColumnDef::new(Activity::PerformedOn)
                .string()
                .not_null()
                .string_len(10),
        )
        .col(
            ColumnDef::new(Activity::Status)
                .string()
                .not_null()
                .string_len(15),
        )
        .col(
            ColumnDef::new(Activity::Points)
                .big_integer()
                .not_null()
                .default(0),
        )
        .col(ColumnDef::new(Activity::ReviewedAt).big_integer())
        .col(ColumnDef::new(Activity::ReviewedBy).string().string_len(26))
        .col(
            ColumnDef::new(Activity::Version)
                .big_integer()
                .not_null()
                .default(0),
        )
        .col(ColumnDef::new(Activity::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(Activity::UpdatedAt).big_integer().not_null())
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(Activity::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = up_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = down_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
