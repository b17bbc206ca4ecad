mod activity_create_table;
mod activity_create_user_id_idx;
mod activity_evidence_create_table;
mod ledger_create_table;
mod promotion_create_status_idx;
mod promotion_create_table;
mod promotion_image_create_table;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "main",
    "m0001",
    vec_box![],
    vec_box![
        ledger_create_table::Operation,
        activity_create_table::Operation,
        activity_create_user_id_idx::Operation,
        activity_evidence_create_table::Operation,
        promotion_create_table::Operation,
        promotion_create_status_idx::Operation,
        promotion_image_create_table::Operation,
    ]
);
