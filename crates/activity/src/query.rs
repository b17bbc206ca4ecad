use sea_query::{Expr, ExprTrait, Func, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use greenloop_db::table::{Activity, ActivityEvidence};
use greenloop_shared::activity::Status;

use crate::repository::{ActivityRow, select_activity};

/// An activity together with its ordered evidence references.
#[derive(Debug)]
pub struct ActivityDetail {
    pub activity: ActivityRow,
    pub evidence: Vec<String>,
}

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);

impl Query {
    pub async fn find(
        &self,
        id: impl Into<String>,
    ) -> greenloop_shared::Result<Option<ActivityDetail>> {
        let id = id.into();

        let statement = select_activity()
            .and_where(Expr::col(Activity::Id).eq(&id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let Some(activity) = sqlx::query_as_with::<_, ActivityRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?
        else {
            return Ok(None);
        };

        let statement = sea_query::Query::select()
            .column(ActivityEvidence::FileRef)
            .from(ActivityEvidence::Table)
            .and_where(Expr::col(ActivityEvidence::ActivityId).eq(&id))
            .order_by(ActivityEvidence::Position, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let evidence = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_all(&self.0)
            .await?
            .into_iter()
            .map(|(file_ref,)| file_ref)
            .collect();

        Ok(Some(ActivityDetail { activity, evidence }))
    }

    /// A member's own log, newest first.
    pub async fn list_for_user(
        &self,
        user_id: impl Into<String>,
    ) -> greenloop_shared::Result<Vec<ActivityRow>> {
        let statement = select_activity()
            .and_where(Expr::col(Activity::UserId).eq(user_id.into()))
            .order_by(Activity::CreatedAt, Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, ActivityRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    /// Review inbox for admins, oldest submission first.
    pub async fn list_pending(&self) -> greenloop_shared::Result<Vec<ActivityRow>> {
        let statement = select_activity()
            .and_where(Expr::col(Activity::Status).eq(Status::PendingReview.to_string()))
            .order_by(Activity::CreatedAt, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, ActivityRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    /// Sum of points currently held by a member's reviewed activities.
    ///
    /// Audit companion to the ledger: after any sequence of awards and
    /// deletes this must equal the stored balance.
    pub async fn reviewed_points_for_user(
        &self,
        user_id: impl Into<String>,
    ) -> greenloop_shared::Result<i64> {
        let statement = sea_query::Query::select()
            .expr(Func::sum(Expr::col(Activity::Points)))
            .from(Activity::Table)
            .and_where(Expr::col(Activity::UserId).eq(user_id.into()))
            .and_where(Expr::col(Activity::Status).eq(Status::Reviewed.to_string()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let (total,) = sqlx::query_as_with::<_, (Option<i64>,), _>(&sql, values)
            .fetch_one(&self.0)
            .await?;

        Ok(total.unwrap_or(0))
    }
}
