use thiserror::Error;

/// Unique constraint names declared by the migrations.
const USER_EMAIL_UNIQUE: &str = "user_email_unique";
const ROLE_NAME_UNIQUE: &str = "role_name_unique";

/// MySQL SQLSTATE for integrity constraint violations.
const INTEGRITY_CONSTRAINT_VIOLATION: &str = "23000";

#[derive(Debug, Error)]
pub enum UserRepositoryError {
    #[error("email already exists")]
    EmailAlreadyExists,

    #[error("role name already exists")]
    RoleNameAlreadyExists,

    /// A row written in the same transaction could not be read back.
    #[error("row not found after write")]
    NotFound,

    #[error("stored id is not a valid uuid: {0}")]
    InvalidUuid(String),

    #[error("database error: {0}")]
    Sqlx(#[source] sqlx::Error),
}

impl From<sqlx::Error> for UserRepositoryError {
    fn from(value: sqlx::Error) -> Self {
        map_sqlx_error(value)
    }
}

/// Name of the violated key in a `Duplicate entry '..' for key '..'` message,
/// without the `table.` prefix newer MySQL versions add.
fn duplicate_key_name(message: &str) -> Option<&str> {
    let (_, after) = message.split_once("for key '")?;
    let (qualified, _) = after.split_once('\'')?;
    qualified.rsplit('.').next()
}

/// Maps a duplicate-entry message onto the uniqueness error it stands for.
fn classify_duplicate_key(message: &str) -> Option<UserRepositoryError> {
    match duplicate_key_name(message)? {
        USER_EMAIL_UNIQUE => Some(UserRepositoryError::EmailAlreadyExists),
        ROLE_NAME_UNIQUE => Some(UserRepositoryError::RoleNameAlreadyExists),
        _ => None,
    }
}

/// Turns unique-constraint violations into their domain errors; anything
/// else stays a [`UserRepositoryError::Sqlx`].
pub fn map_sqlx_error(err: sqlx::Error) -> UserRepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(INTEGRITY_CONSTRAINT_VIOLATION) {
            if let Some(mapped) = classify_duplicate_key(db_err.message()) {
                return mapped;
            }
        }
    }

    UserRepositoryError::Sqlx(err)
}
