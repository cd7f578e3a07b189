use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{
        header::{AUTHORIZATION, COOKIE},
        HeaderMap, Request,
    },
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::main_lib::AppState;

/// Cookie the identity provider's web flow leaves the access token in.
pub const ACCESS_TOKEN_COOKIE: &str = "nw_access_token";

const MIN_SECRET_LEN: usize = 32;

/// The user a request acts for. Inserted by `require_user`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: String,
}

/// Verifies tokens issued by the external identity provider.
pub struct AuthManager {
    decoding_key: DecodingKey,
    validation: Validation,
    redirect_to: String,
}

#[derive(Debug)]
pub enum AuthError {
    /// No usable token. Answered with a redirect, never an error body.
    Unauthenticated { redirect_to: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Claims {
    sub: String,
    exp: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatusResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl AuthManager {
    pub fn new(secret: &[u8], audience: Option<&str>, redirect_to: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        match audience {
            Some(aud) => validation.set_audience(&[aud]),
            None => validation.validate_aud = false,
        }
        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            redirect_to: redirect_to.to_string(),
        }
    }

    /// Resolves the user behind a raw token.
    pub fn validate_token(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|err| {
            tracing::debug!("Rejected access token: {:?}", err.kind());
            self.unauthenticated()
        })?;
        if data.claims.sub.trim().is_empty() {
            return Err(self.unauthenticated());
        }
        Ok(AuthenticatedUser {
            id: data.claims.sub,
        })
    }

    /// Resolves the user from the request headers, if any token verifies.
    pub fn resolve(&self, headers: &HeaderMap) -> Result<AuthenticatedUser, AuthError> {
        let token = bearer_token(headers)
            .or_else(|| cookie_token(headers))
            .ok_or_else(|| self.unauthenticated())?;
        self.validate_token(token)
    }

    fn unauthenticated(&self) -> AuthError {
        AuthError::Unauthenticated {
            redirect_to: self.redirect_to.clone(),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::Unauthenticated { redirect_to } => Redirect::to(&redirect_to).into_response(),
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = header.splitn(2, ' ');
    let (Some(scheme), Some(token)) = (parts.next(), parts.next()) else {
        return None;
    };
    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }
    Some(token.trim()).filter(|t| !t.is_empty())
}

fn cookie_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == ACCESS_TOKEN_COOKIE)
        .map(|(_, token)| token.trim())
        .filter(|t| !t.is_empty())
}

/// Accepts a base64 encoded key or a raw ASCII key of at least 32 bytes.
pub fn decode_secret_key(raw: &str) -> anyhow::Result<Vec<u8>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        anyhow::bail!("JWT secret cannot be empty");
    }
    let decoded = match BASE64.decode(trimmed) {
        Ok(bytes) if bytes.len() >= MIN_SECRET_LEN => bytes,
        _ => trimmed.as_bytes().to_vec(),
    };

    if decoded.len() < MIN_SECRET_LEN {
        anyhow::bail!("JWT secret must be at least {MIN_SECRET_LEN} bytes");
    }

    Ok(decoded)
}

pub async fn auth_status(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<AuthStatusResponse> {
    let user = state.auth.resolve(&headers).ok();
    Json(AuthStatusResponse {
        authenticated: user.is_some(),
        user_id: user.map(|u| u.id),
    })
}

pub async fn require_user(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let user = state.auth.resolve(request.headers())?;
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
