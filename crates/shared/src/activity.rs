use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Point values an admin may award to an activity.
pub const AWARD_VALUES: [i64; 5] = [10, 30, 50, 75, 100];

/// Evidence attachments accepted per activity.
pub const EVIDENCE_MIN_FILES: usize = 1;
pub const EVIDENCE_MAX_FILES: usize = 5;

/// Upper bound on a logged quantity, whatever the unit.
pub const QUANTITY_MAX: f64 = 20.0;

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
pub enum Status {
    #[default]
    PendingReview,
    Reviewed,
}

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
pub enum ActivityType {
    #[default]
    Recycling,
    TreePlanting,
    Cleanup,
    Composting,
    WaterConservation,
    EnergySaving,
}
