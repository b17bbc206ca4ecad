use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Ledger {
    Table,
    UserId,
    TotalPoints,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum Activity {
    Table,
    Id,
    UserId,
    Title,
    Description,
    ActivityType,
    Quantity,
    Unit,
    PerformedOn,
    Status,
    Points,
    ReviewedAt,
    ReviewedBy,
    Version,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum ActivityEvidence {
    Table,
    ActivityId,
    Position,
    FileRef,
}

#[derive(Iden, Clone)]
pub enum Promotion {
    Table,
    Id,
    SubmitterId,
    Kind,
    Name,
    Description,
    Website,
    LogoRef,
    PaymentReference,
    Status,
    ReviewerNotes,
    SubmittedAt,
    ReviewedAt,
    ReviewedBy,
    Version,
}

#[derive(Iden, Clone)]
pub enum PromotionImage {
    Table,
    PromotionId,
    Position,
    FileRef,
}
