use thiserror::Error;

/// Domain errors shared by every greenloop crate.
///
/// `Validation` carries every violated field at once so callers can show a
/// full report instead of only the first failure.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("payment {reference} is {status}, expected succeeded")]
    PaymentNotConfirmed { reference: String, status: String },

    #[error("{0}")]
    InvalidTransition(String),

    #[error("write conflict, retry the operation")]
    ConcurrencyConflict,

    #[error("{0} not found")]
    NotFound(String),

    #[error("database error")]
    Database(#[source] sqlx::Error),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

// SQLITE_BUSY, SQLITE_LOCKED and their snapshot/shared-cache extended codes.
// Nothing was committed when these fire, so the whole operation is safe to
// retry as a `ConcurrencyConflict`.
const SQLITE_CONTENTION_CODES: [&str; 4] = ["5", "6", "261", "517"];

impl From<sqlx::Error> for Error {
    fn from(value: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &value {
            let is_contention = match db_err.code() {
                Some(code) => SQLITE_CONTENTION_CODES.contains(&code.as_ref()),
                None => false,
            };

            if is_contention || db_err.message().contains("database is locked") {
                return Error::ConcurrencyConflict;
            }
        }

        Error::Database(value)
    }
}

/// Build a `Validation` error for a single offending field.
pub fn field_error(field: &'static str, code: &'static str, message: String) -> Error {
    let mut errors = validator::ValidationErrors::new();
    errors.add(
        field,
        validator::ValidationError::new(code).with_message(message.into()),
    );

    Error::Validation(errors)
}

#[macro_export]
macro_rules! not_found {
    ($entity:expr) => {
        return Err($crate::Error::NotFound($entity.to_string()))
    };
}
