use db::models::user::Role;
use serde::{Deserialize, Serialize};

/// JWT payload carried by every authenticated request.
///
/// Tokens are minted by the identity provider with the user's database id
/// as the subject; the role claim drives the route guards so no extra
/// database lookup is needed to authorize a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id (`users.id`).
    pub sub: i64,
    /// Expiry as a unix timestamp.
    pub exp: usize,
    /// Role recorded at token issue time.
    pub role: Role,
}

/// Authenticated user, extracted from a verified bearer token and inserted
/// into request extensions by the auth guards.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> i64 {
        self.0.sub
    }

    pub fn role(&self) -> Role {
        self.0.role
    }
}
