use std::time::Duration;

use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;
use serde_json::Value;

use crate::{
    config::Config,
    error::{Error, Result},
};

/// Maximum time to wait for the token endpoint before giving up.
const TOKEN_TIMEOUT: Duration = Duration::from_secs(5);

/// Requests an app-level access token via the client-credentials grant.
///
/// Performs the OAuth 2.0 client-credentials exchange against the configured
/// token endpoint. The client ID and secret are combined as `id:secret`,
/// base64-encoded, and sent as an HTTP Basic authorization header alongside
/// a form body with the `client_credentials` grant type.
///
/// A fresh token is requested for every catalog search. Tokens are
/// deliberately never cached or refreshed; the grant is cheap and a
/// stateless exchange keeps credential handling out of the request path.
///
/// # Arguments
///
/// * `config` - Runtime configuration carrying the credentials and the
///   token endpoint URL
///
/// # Returns
///
/// Returns the bearer token string on success.
///
/// # Errors
///
/// - [`Error::Auth`] if the endpoint answers with a non-success status or
///   the response body carries no usable `access_token` field
/// - [`Error::Http`] for transport failures, including the 5 second timeout
///
/// # Example
///
/// ```
/// let token = request_token(&config).await?;
/// println!("Bearer {}", token);
/// ```
pub async fn request_token(config: &Config) -> Result<String> {
    let credentials = format!(
        "{client_id}:{client_secret}",
        client_id = &config.client_id,
        client_secret = &config.client_secret
    );
    let basic = STANDARD.encode(credentials);

    let client = Client::new();
    let res = client
        .post(&config.token_url)
        .header("Authorization", format!("Basic {basic}"))
        .form(&[("grant_type", "client_credentials")])
        .timeout(TOKEN_TIMEOUT)
        .send()
        .await?;

    if !res.status().is_success() {
        return Err(Error::Auth(format!(
            "token endpoint returned status {}",
            res.status()
        )));
    }

    let json: Value = res.json().await?;

    match json["access_token"].as_str() {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(Error::Auth(
            "token response carried no access_token field".to_string(),
        )),
    }
}
