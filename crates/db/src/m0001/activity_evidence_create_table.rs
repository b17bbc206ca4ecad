use sea_query::{ColumnDef, Index, Table, TableCreateStatement, TableDropStatement};

use crate::table::ActivityEvidence;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(ActivityEvidence::Table)
        .col(
            ColumnDef::new(ActivityEvidence::ActivityId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(
            ColumnDef::new(ActivityEvidence::Position)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(ActivityEvidence::FileRef)
                .string()
                .not_null()
                .string_len(255),
        )
        .primary_key(
            Index::create()
                .col(ActivityEvidence::ActivityId)
                .col(ActivityEvidence::Position),
        )
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(ActivityEvidence::Table).to_owned()
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
