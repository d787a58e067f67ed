pub mod attendance;
pub mod department;
pub mod faculty;
pub mod marks;
pub mod section;
pub mod student;
pub mod subject;
pub mod timetable;
pub mod user;

use sea_orm::DbErr;

/// Error of the two-step profile deletion (profile row, then login identity).
///
/// `IdentityCleanup` means the profile row is already gone but the identity
/// delete failed; there is deliberately no compensation for that case, so the
/// identity is orphaned and the caller should surface the failure.
#[derive(Debug, thiserror::Error)]
pub enum ProfileDeleteError {
    #[error("profile not found")]
    NotFound,
    #[error(transparent)]
    Db(#[from] DbErr),
    #[error("profile deleted but identity cleanup failed: {0}")]
    IdentityCleanup(DbErr),
}
