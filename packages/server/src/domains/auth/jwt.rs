use anyhow::Result;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims for an authenticated profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub profile_id: Uuid,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
    pub iss: String,
    pub jti: String,
}

/// Issues and verifies HS256 session tokens
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
}

impl JwtService {
    /// Create new JWT service with secret and issuer
    pub fn new(secret: &str, issuer: String) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
        }
    }

    /// Create a new session token for a profile
    ///
    /// Token expires after 24 hours
    pub fn create_token(&self, profile_id: Uuid, email: String) -> Result<String> {
        let now = chrono::Utc::now();
        let exp = now + chrono::Duration::hours(24);

        let claims = Claims {
            sub: profile_id.to_string(),
            profile_id,
            email,
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.issuer.clone(),
            jti: Uuid::new_v4().to_string(), // Unique token ID
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(Into::into)
    }

    /// Verify and decode a session token
    ///
    /// Returns claims if the token is valid, issued by us, and not expired
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.issuer]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_verify_token() {
        let service = JwtService::new("test_secret", "test_issuer".to_string());
        let profile_id = Uuid::new_v4();

        let token = service
            .create_token(profile_id, "organizer@example.com".to_string())
            .unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.profile_id, profile_id);
        assert_eq!(claims.email, "organizer@example.com");
        assert_eq!(claims.iss, "test_issuer");
    }

    #[test]
    fn rejects_wrong_secret() {
        let service = JwtService::new("secret_a", "test_issuer".to_string());
        let other = JwtService::new("secret_b", "test_issuer".to_string());

        let token = service
            .create_token(Uuid::new_v4(), "a@example.com".to_string())
            .unwrap();
        assert!(other.verify_token(&token).is_err());
    }

    #[test]
    fn rejects_wrong_issuer() {
        let service = JwtService::new("secret", "issuer_a".to_string());
        let other = JwtService::new("secret", "issuer_b".to_string());

        let token = service
            .create_token(Uuid::new_v4(), "a@example.com".to_string())
            .unwrap();
        assert!(other.verify_token(&token).is_err());
    }
}
