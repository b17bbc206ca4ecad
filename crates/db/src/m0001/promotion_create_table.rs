use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Promotion;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(Promotion::Table)
        .col(
            ColumnDef::new(Promotion::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(Promotion::SubmitterId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(
            ColumnDef::new(Promotion::Kind)
                .string()
                .not_null()
                .string_len(15),
        )
        .col(
            ColumnDef::new(Promotion::Name)
                .string()
                .not_null()
                .string_len(120),
        )
        .col(
            ColumnDef::new(Promotion::Description)
                .string()
                .not_null()
                .string_len(2000),
        )
        .col(ColumnDef::new(Promotion::Website).string().string_len(255))
        .col(
            ColumnDef::new(Promotion::LogoRef)
                .string()
                .not_null()
                .string_len(255),
        )
        .col(
            ColumnDef::new(Promotion::PaymentReference)
                .string()
                .not_null()
                .string_len(255),
        )
        .col(
            ColumnDef::new(Promotion::Status)
                .string()
                .not_null()
                .string_len(20),
        )
        .col(
            ColumnDef::new(Promotion::ReviewerNotes)
                .string()
                .string_len(2000),
        )
        .col(
            ColumnDef::new(Promotion::SubmittedAt)
                .big_integer()
                .not_null(),
        )
        .col(ColumnDef::new(Promotion::ReviewedAt).big_integer())
        .col(
            ColumnDef::new(Promotion::ReviewedBy)
                .string()
                .string_len(26),
        )
        .col(
            ColumnDef::new(Promotion::Version)
                .big_integer()
                .not_null()
                .default(0),
        )
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(Promotion::Table).to_owned()
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
