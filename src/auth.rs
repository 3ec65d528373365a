//! Bearer token claims carried by requests between ginger services.
//!
//! Tokens are HS256 JWTs signed with the shared `JWT_SECRET`. Service-to-service
//! calls send them in `X-API-Authorization`, user sessions in `Authorization`.
//! Extraction works on raw header values so any HTTP framework can wrap it in
//! its own request guard.

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::Result;

pub const JWT_SECRET_ENV: &str = "JWT_SECRET";
pub const API_AUTH_HEADER: &str = "X-API-Authorization";
pub const USER_AUTH_HEADER: &str = "Authorization";

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimsError {
    #[error("Expected exactly one authorization header")]
    Missing,

    #[error("Bearer token is invalid or expired")]
    Invalid,

    #[error("JWT_SECRET is not set")]
    MissingSecret,
}

impl ClaimsError {
    /// HTTP status a request guard should answer with.
    pub fn status(&self) -> u16 {
        match self {
            ClaimsError::Missing | ClaimsError::Invalid => 401,
            ClaimsError::MissingSecret => 500,
        }
    }
}

/// OpenAPI description of an API key passed in a request header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecurityScheme {
    #[serde(skip)]
    pub scheme_name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: &'static str,
    #[serde(rename = "in")]
    pub location: &'static str,
    pub description: &'static str,
}

/// Claims that arrive as a bearer token in a request header.
pub trait BearerClaims: DeserializeOwned {
    /// Header the token is read from.
    const HEADER: &'static str;
    /// Name of the security scheme in generated API docs.
    const SCHEME: &'static str;

    /// Expiry as seconds since the Unix epoch.
    fn exp(&self) -> usize;

    fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(i64::try_from(self.exp()).ok()?, 0)
    }

    /// Decodes claims from every value the request carried for [`Self::HEADER`].
    ///
    /// # Errors
    ///
    /// `Missing` unless exactly one value is present, `Invalid` when the token
    /// does not verify against `secret` or has expired.
    fn from_header_values<'a, I>(values: I, secret: &[u8]) -> std::result::Result<Self, ClaimsError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let values: Vec<&str> = values.into_iter().collect();
        let [value] = values.as_slice() else {
            return Err(ClaimsError::Missing);
        };

        let token = value.trim_start_matches(BEARER_PREFIX).trim();
        let decoding_key = DecodingKey::from_secret(secret);

        decode::<Self>(token, &decoding_key, &Validation::new(Algorithm::HS256))
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                debug!("Rejected {} token: {e}", Self::HEADER);
                ClaimsError::Invalid
            })
    }

    /// Like [`Self::from_header_values`], with the secret read from `JWT_SECRET`.
    fn from_env_header_values<'a, I>(values: I) -> std::result::Result<Self, ClaimsError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let secret = std::env::var(JWT_SECRET_ENV).map_err(|_| ClaimsError::MissingSecret)?;
        Self::from_header_values(values, secret.as_bytes())
    }

    fn security_scheme() -> SecurityScheme {
        SecurityScheme {
            scheme_name: Self::SCHEME,
            kind: "apiKey",
            name: Self::HEADER,
            location: "header",
            description: "Requires a Bearer token to access",
        }
    }
}

/// Signs claims as an HS256 token.
pub fn issue_token<C: Serialize>(claims: &C, secret: &[u8]) -> Result<String> {
    Ok(encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )?)
}

/// Claims of a token issued to an organization's service integration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IscClaims {
    pub sub: String,
    pub exp: usize,
    pub org_id: String,
    pub scopes: Vec<String>,
}

impl IscClaims {
    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes.iter().any(|s| s == scope)
    }
}

impl BearerClaims for IscClaims {
    const HEADER: &'static str = API_AUTH_HEADER;
    const SCHEME: &'static str = "BearerAPIAuth";

    fn exp(&self) -> usize {
        self.exp
    }
}

/// Claims of an API key issued to a group.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiClaims {
    pub sub: String,
    pub exp: usize,
    pub group_id: i64,
    pub scopes: Vec<String>,
}

impl ApiClaims {
    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes.iter().any(|s| s == scope)
    }
}

impl BearerClaims for ApiClaims {
    const HEADER: &'static str = API_AUTH_HEADER;
    const SCHEME: &'static str = "BearerAPIAuth";

    fn exp(&self) -> usize {
        self.exp
    }
}

/// Claims of a signed-in user's access or refresh token.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserClaims {
    pub sub: String,
    pub exp: usize,
    pub user_id: String,
    /// `access` or `refresh`
    pub token_type: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub client_id: Option<String>,
}

impl BearerClaims for UserClaims {
    const HEADER: &'static str = USER_AUTH_HEADER;
    const SCHEME: &'static str = "BearerAuth";

    fn exp(&self) -> usize {
        self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret-key-for-jwt-validation-256bits";

    fn in_one_hour() -> usize {
        (Utc::now().timestamp() + 3600) as usize
    }

    fn isc_claims() -> IscClaims {
        IscClaims {
            sub: "dev-portal".to_string(),
            exp: in_one_hour(),
            org_id: "ginger-society".to_string(),
            scopes: vec!["read:packages".to_string(), "write:status".to_string()],
        }
    }

    #[test]
    fn test_isc_claims_from_bearer_header() {
        let claims = isc_claims();
        let token = issue_token(&claims, SECRET).unwrap();
        let header = format!("Bearer {token}");

        let decoded = IscClaims::from_header_values([header.as_str()], SECRET).unwrap();
        assert_eq!(decoded, claims);
        assert!(decoded.has_scope("write:status"));
        assert!(!decoded.has_scope("admin"));
    }

    #[test]
    fn test_token_without_bearer_prefix_is_accepted() {
        let token = issue_token(&isc_claims(), SECRET).unwrap();
        let padded = format!("  {token}  ");
        assert!(IscClaims::from_header_values([padded.as_str()], SECRET).is_ok());
    }

    #[test]
    fn test_missing_or_repeated_header() {
        let none: [&str; 0] = [];
        assert_eq!(
            IscClaims::from_header_values(none, SECRET).unwrap_err(),
            ClaimsError::Missing
        );

        let token = issue_token(&isc_claims(), SECRET).unwrap();
        assert_eq!(
            IscClaims::from_header_values([token.as_str(), token.as_str()], SECRET).unwrap_err(),
            ClaimsError::Missing
        );
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let token = issue_token(&isc_claims(), SECRET).unwrap();
        let err = IscClaims::from_header_values([token.as_str()], b"another-secret").unwrap_err();
        assert_eq!(err, ClaimsError::Invalid);
        assert_eq!(err.status(), 401);
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let mut claims = isc_claims();
        claims.exp = (Utc::now().timestamp() - 3600) as usize;
        let token = issue_token(&claims, SECRET).unwrap();

        assert_eq!(
            IscClaims::from_header_values([token.as_str()], SECRET).unwrap_err(),
            ClaimsError::Invalid
        );
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        assert_eq!(
            ApiClaims::from_header_values(["Bearer not-a-jwt"], SECRET).unwrap_err(),
            ClaimsError::Invalid
        );
    }

    #[test]
    fn test_claims_shape_must_match() {
        let token = issue_token(&isc_claims(), SECRET).unwrap();
        assert_eq!(
            ApiClaims::from_header_values([token.as_str()], SECRET).unwrap_err(),
            ClaimsError::Invalid
        );
    }

    #[test]
    fn test_user_claims_round_trip() {
        let claims = UserClaims {
            sub: "jane@example.com".to_string(),
            exp: in_one_hour(),
            user_id: "42".to_string(),
            token_type: "access".to_string(),
            first_name: Some("Jane".to_string()),
            last_name: None,
            middle_name: None,
            client_id: Some("dev-portal".to_string()),
        };
        let token = issue_token(&claims, SECRET).unwrap();
        let header = format!("Bearer {token}");

        let decoded = UserClaims::from_header_values([header.as_str()], SECRET).unwrap();
        assert_eq!(decoded, claims);
        assert_eq!(
            decoded.expires_at().unwrap().timestamp(),
            claims.exp as i64
        );
    }

    #[test]
    fn test_secret_from_environment() {
        let claims = ApiClaims {
            sub: "ci".to_string(),
            exp: in_one_hour(),
            group_id: 7,
            scopes: vec![],
        };
        let token = issue_token(&claims, SECRET).unwrap();

        std::env::remove_var(JWT_SECRET_ENV);
        let err = ApiClaims::from_env_header_values([token.as_str()]).unwrap_err();
        assert_eq!(err, ClaimsError::MissingSecret);
        assert_eq!(err.status(), 500);

        std::env::set_var(JWT_SECRET_ENV, std::str::from_utf8(SECRET).unwrap());
        let decoded = ApiClaims::from_env_header_values([token.as_str()]).unwrap();
        assert_eq!(decoded.group_id, 7);
        std::env::remove_var(JWT_SECRET_ENV);
    }

    #[test]
    fn test_security_schemes() {
        let api = IscClaims::security_scheme();
        assert_eq!(api.scheme_name, "BearerAPIAuth");
        assert_eq!(api.name, "X-API-Authorization");

        let user = UserClaims::security_scheme();
        assert_eq!(user.scheme_name, "BearerAuth");
        assert_eq!(user.name, "Authorization");

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["type"], "apiKey");
        assert_eq!(json["in"], "header");
        assert_eq!(json["description"], "Requires a Bearer token to access");
    }
}
