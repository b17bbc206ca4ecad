use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Product image attachments accepted per listing.
pub const IMAGE_MIN_FILES: usize = 1;
pub const IMAGE_MAX_FILES: usize = 5;

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
pub enum Kind {
    #[default]
    Business,
    Product,
}
