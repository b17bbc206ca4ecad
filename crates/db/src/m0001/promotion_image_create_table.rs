use sea_query::{ColumnDef, Index, Table, TableCreateStatement, TableDropStatement};

use crate::table::PromotionImage;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(PromotionImage::Table)
        .col(
            ColumnDef::new(PromotionImage::PromotionId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(
            ColumnDef::new(PromotionImage::Position)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(PromotionImage::FileRef)
                .string()
                .not_null()
                .string_len(255),
        )
        .primary_key(
            Index::create()
                .col(PromotionImage::PromotionId)
                .col(PromotionImage::Position),
        )
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(PromotionImage::Table).to_owned()
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
