pub mod config;
pub mod migrate;
pub mod observability;
pub mod storage;

pub use config::Config;

// Host applications embed the core through these.
pub use greenloop_activity as activity;
pub use greenloop_db as db;
pub use greenloop_ledger as ledger;
pub use greenloop_notification as notification;
pub use greenloop_promotion as promotion;
pub use greenloop_shared as shared;
