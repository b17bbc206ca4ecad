use sea_query::{Expr, ExprTrait, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqliteConnection, prelude::FromRow};

use greenloop_db::table::{Promotion, PromotionImage};
use greenloop_shared::moderation::Status;
use greenloop_shared::promotion::Kind;

#[derive(Debug, FromRow)]
pub struct PromotionRow {
    pub id: String,
    pub submitter_id: String,
    pub kind: sqlx::types::Text<Kind>,
    pub name: String,
    pub description: String,
    pub website: Option<String>,
    pub logo_ref: String,
    pub payment_reference: String,
    pub status: sqlx::types::Text<Status>,
    pub reviewer_notes: Option<String>,
    pub submitted_at: i64,
    pub reviewed_at: Option<i64>,
    pub reviewed_by: Option<String>,
    pub version: i64,
}

impl PromotionRow {
    pub fn is_publicly_listed(&self) -> bool {
        self.status.0 == Status::Approved
    }
}

pub(crate) struct NewPromotion<'a> {
    pub id: &'a str,
    pub submitter_id: &'a str,
    pub kind: Kind,
    pub name: &'a str,
    pub description: &'a str,
    pub website: Option<&'a str>,
    pub logo_ref: &'a str,
    pub payment_reference: &'a str,
    pub submitted_at: i64,
}

pub(crate) fn select_promotion() -> SelectStatement {
    sea_query::Query::select()
        .columns([
            Promotion::Id,
            Promotion::SubmitterId,
            Promotion::Kind,
            Promotion::Name,
            Promotion::Description,
            Promotion::Website,
            Promotion::LogoRef,
            Promotion::PaymentReference,
            Promotion::Status,
            Promotion::ReviewerNotes,
            Promotion::SubmittedAt,
            Promotion::ReviewedAt,
            Promotion::ReviewedBy,
            Promotion::Version,
        ])
        .from(Promotion::Table)
        .to_owned()
}

pub(crate) async fn find(
    conn: &mut SqliteConnection,
    id: &str,
) -> greenloop_shared::Result<Option<PromotionRow>> {
    let statement = select_promotion()
        .and_where(Expr::col(Promotion::Id).eq(id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, PromotionRow, _>(&sql, values)
        .fetch_optional(&mut *conn)
        .await?)
}

pub(crate) async fn insert(
    conn: &mut SqliteConnection,
    new: NewPromotion<'_>,
) -> greenloop_shared::Result<()> {
    let statement = sea_query::Query::insert()
        .into_table(Promotion::Table)
        .columns([
            Promotion::Id,
            Promotion::SubmitterId,
            Promotion::Kind,
            Promotion::Name,
            Promotion::Description,
            Promotion::Website,
            Promotion::LogoRef,
            Promotion::PaymentReference,
            Promotion::Status,
            Promotion::SubmittedAt,
        ])
        .values_panic([
            new.id.into(),
            new.submitter_id.into(),
            new.kind.to_string().into(),
            new.name.into(),
            new.description.into(),
            new.website.map(str::to_owned).into(),
            new.logo_ref.into(),
            new.payment_reference.into(),
            Status::PendingApproval.to_string().into(),
            new.submitted_at.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    Ok(())
}

pub(crate) async fn insert_images(
    conn: &mut SqliteConnection,
    promotion_id: &str,
    refs: &[String],
) -> greenloop_shared::Result<()> {
    let mut statement = sea_query::Query::insert()
        .into_table(PromotionImage::Table)
        .columns([
            PromotionImage::PromotionId,
            PromotionImage::Position,
            PromotionImage::FileRef,
        ])
        .to_owned();

    for (position, file_ref) in refs.iter().enumerate() {
        statement.values_panic([
            promotion_id.into(),
            (position as i32).into(),
            file_ref.as_str().into(),
        ]);
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    Ok(())
}
