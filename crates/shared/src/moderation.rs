//! Shared approval lifecycle for moderated listings.
//!
//! Business and product promotion requests move through the same three
//! states. The notes rule is keyed on the target status only: rejecting or
//! reopening always needs reviewer notes, approving never does, whatever the
//! previous status was.

use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

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
    Deserialize,
)]
pub enum Status {
    #[default]
    PendingApproval,
    Approved,
    Rejected,
}

impl Status {
    /// Reviewer notes are mandatory when a transition targets this status.
    pub fn requires_notes(&self) -> bool {
        matches!(self, Status::Rejected | Status::PendingApproval)
    }
}

/// Validate and normalize reviewer notes for a transition targeting `target`.
///
/// Returns the trimmed notes to persist. Whitespace-only notes count as
/// absent.
pub fn review_notes(target: Status, notes: Option<&str>) -> crate::Result<Option<String>> {
    let trimmed = notes.map(str::trim).filter(|n| !n.is_empty());

    match trimmed {
        Some(n) => Ok(Some(n.to_owned())),
        None if target.requires_notes() => Err(crate::Error::InvalidTransition(format!(
            "reviewer notes are required when targeting {target}"
        ))),
        None => Ok(None),
    }
}
