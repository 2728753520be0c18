use std::sync::Arc;

use sqlx::PgPool;

use crate::common::auth::AuthError;
use crate::domains::auth::JwtService;
use crate::server::middleware::AuthUser;

/// GraphQL request context
///
/// Contains shared resources available to all resolvers plus the
/// per-request authentication state.
#[derive(Clone)]
pub struct GraphQLContext {
    pub pool: PgPool,
    pub jwt_service: Arc<JwtService>,
    pub auth_user: Option<AuthUser>,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(pool: PgPool, jwt_service: Arc<JwtService>, auth_user: Option<AuthUser>) -> Self {
        Self {
            pool,
            jwt_service,
            auth_user,
        }
    }

    /// The authenticated user, or an error for anonymous requests
    pub fn require_auth(&self) -> Result<&AuthUser, AuthError> {
        self.auth_user
            .as_ref()
            .ok_or(AuthError::AuthenticationRequired)
    }
}
