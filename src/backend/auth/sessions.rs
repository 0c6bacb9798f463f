/**
 * Session Management and Session Cookies
 *
 * A successful login issues a signed HS256 JWT and hands it to the browser
 * in an HttpOnly cookie. Later requests present the cookie (or an
 * `Authorization: Bearer` header) and the authentication boundary turns the
 * verified claims back into an `AuthenticatedPrincipal`.
 *
 * Logout expires the cookie on the client and records the token's `jti` as
 * revoked, so a copy of the token is refused too. Revocations are kept in
 * memory until the token would have expired anyway; they do not survive a
 * restart.
 */

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::backend::auth::principal::AuthenticatedPrincipal;
use crate::backend::server::config::{SessionSettings, MAX_SESSION_TTL_HOURS};

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Username
    pub username: String,
    /// Stored role
    pub role: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Unique token id
    pub jti: String,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to issue session token: {0}")]
    Issue(#[source] jsonwebtoken::errors::Error),

    #[error("invalid session token: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),

    #[error("session token has a malformed subject: {0}")]
    Subject(String),

    #[error("session expiry is out of range")]
    Expiry,

    #[error("session token has been revoked")]
    Revoked,
}

/// Issues and verifies session tokens and builds session cookies
#[derive(Clone)]
pub struct SessionManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    cookie_name: String,
    ttl: Duration,
    secure_cookie: bool,
    /// Revoked token ids and their expiry timestamps
    revoked: Arc<Mutex<HashMap<String, i64>>>,
}

impl SessionManager {
    /// Create a session manager from configuration
    ///
    /// Without a configured secret a random one is generated, so sessions do
    /// not survive a restart. A lifetime above `MAX_SESSION_TTL_HOURS` is
    /// clamped to it.
    pub fn new(settings: &SessionSettings) -> Self {
        let secret = match &settings.secret {
            Some(secret) => secret.clone(),
            None => {
                tracing::warn!("No session secret configured; generating a per-process secret");
                format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
            }
        };

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            cookie_name: settings.cookie_name.clone(),
            ttl: session_ttl(settings.ttl_hours),
            secure_cookie: settings.secure_cookie,
            revoked: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Create a session token for a principal
    pub fn issue(&self, principal: &AuthenticatedPrincipal) -> Result<String, SessionError> {
        let now = Utc::now();
        let claims = Claims {
            sub: principal.user_id.to_string(),
            username: principal.username.clone(),
            role: principal.role.clone(),
            exp: now
                .checked_add_signed(self.ttl)
                .ok_or(SessionError::Expiry)?
                .timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };
        self.encode_claims(&claims)
    }

    fn encode_claims(&self, claims: &Claims) -> Result<String, SessionError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding).map_err(SessionError::Issue)
    }

    fn decode_claims(&self, token: &str) -> Result<Claims, SessionError> {
        let validation = Validation::new(Algorithm::HS256);
        Ok(decode::<Claims>(token, &self.decoding, &validation)
            .map_err(SessionError::Invalid)?
            .claims)
    }

    fn revoked(&self) -> MutexGuard<'_, HashMap<String, i64>> {
        self.revoked.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Verify a session token and rebuild its principal
    pub fn verify(&self, token: &str) -> Result<AuthenticatedPrincipal, SessionError> {
        let claims = self.decode_claims(token)?;

        if self.revoked().contains_key(&claims.jti) {
            return Err(SessionError::Revoked);
        }

        let user_id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| SessionError::Subject(claims.sub.clone()))?;

        Ok(AuthenticatedPrincipal {
            user_id,
            username: claims.username,
            role: claims.role,
        })
    }

    /// Refuse a token from now on
    ///
    /// Tokens that do not verify are ignored. Entries for tokens past their
    /// `exp` are dropped on every call.
    pub fn revoke(&self, token: &str) {
        let claims = match self.decode_claims(token) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::debug!("Not revoking unverifiable session token: {}", e);
                return;
            }
        };

        let now = Utc::now().timestamp();
        let mut revoked = self.revoked();
        revoked.retain(|_, exp| *exp > now);
        revoked.insert(claims.jti, claims.exp);
    }

    /// HttpOnly cookie carrying a session token
    pub fn session_cookie(&self, token: String) -> Cookie<'static> {
        Cookie::build((self.cookie_name.clone(), token))
            .path("/")
            .http_only(true)
            .secure(self.secure_cookie)
            .same_site(SameSite::Lax)
            .build()
    }

    /// Cookie that expires the session cookie
    pub fn logout_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build((self.cookie_name.clone(), String::new()))
            .path("/")
            .http_only(true)
            .secure(self.secure_cookie)
            .same_site(SameSite::Lax)
            .build();
        cookie.make_removal();
        cookie
    }
}

fn session_ttl(hours: u64) -> Duration {
    let clamped = if hours > MAX_SESSION_TTL_HOURS {
        tracing::warn!(
            "Session lifetime of {} hours exceeds the maximum, using {}",
            hours,
            MAX_SESSION_TTL_HOURS
        );
        MAX_SESSION_TTL_HOURS
    } else {
        hours
    };
    i64::try_from(clamped)
        .ok()
        .and_then(Duration::try_hours)
        .unwrap_or_else(|| Duration::hours(1))
}
