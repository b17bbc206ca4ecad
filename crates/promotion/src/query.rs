use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use greenloop_db::table::{Promotion, PromotionImage};
use greenloop_shared::moderation::Status;
use greenloop_shared::promotion::Kind;

use crate::repository::{PromotionRow, select_promotion};

/// A promotion together with its ordered product images.
#[derive(Debug)]
pub struct PromotionDetail {
    pub promotion: PromotionRow,
    pub images: Vec<String>,
}

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);

impl Query {
    pub async fn find(
        &self,
        id: impl Into<String>,
    ) -> greenloop_shared::Result<Option<PromotionDetail>> {
        let id = id.into();

        let statement = select_promotion()
            .and_where(Expr::col(Promotion::Id).eq(&id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let Some(promotion) = sqlx::query_as_with::<_, PromotionRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?
        else {
            return Ok(None);
        };

        let statement = sea_query::Query::select()
            .column(PromotionImage::FileRef)
            .from(PromotionImage::Table)
            .and_where(Expr::col(PromotionImage::PromotionId).eq(&id))
            .order_by(PromotionImage::Position, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let images = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_all(&self.0)
            .await?
            .into_iter()
            .map(|(file_ref,)| file_ref)
            .collect();

        Ok(Some(PromotionDetail { promotion, images }))
    }

    /// Public directory of a listing kind.
    ///
    /// Visibility is enforced here at the read boundary: only `Approved`
    /// rows ever leave this query, whatever their transition history.
    pub async fn list_public(&self, kind: Kind) -> greenloop_shared::Result<Vec<PromotionRow>> {
        let statement = select_promotion()
            .and_where(Expr::col(Promotion::Kind).eq(kind.to_string()))
            .and_where(Expr::col(Promotion::Status).eq(Status::Approved.to_string()))
            .order_by(Promotion::SubmittedAt, Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, PromotionRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    /// Approval inbox for admins, oldest submission first.
    pub async fn list_for_review(&self) -> greenloop_shared::Result<Vec<PromotionRow>> {
        let statement = select_promotion()
            .and_where(Expr::col(Promotion::Status).eq(Status::PendingApproval.to_string()))
            .order_by(Promotion::SubmittedAt, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, PromotionRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }
}
