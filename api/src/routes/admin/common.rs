use sea_orm::DbErr;

/// SQLite reports unique violations through the error message. `needle` is
/// the `table.column` pair named in the constraint, e.g.
/// `"departments.code"`.
pub fn is_unique_violation(err: &DbErr, needle: &str) -> bool {
    err.to_string()
        .contains(&format!("UNIQUE constraint failed: {needle}"))
}
