mod command;
mod gateway;
mod query;
pub(crate) mod repository;

pub use command::*;
pub use gateway::*;
pub use query::*;
pub use repository::PromotionRow;
