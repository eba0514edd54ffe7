//! Exercise a running user API end to end.
//!
//! Derives fresh credentials from the configured secrets, posts a name
//! update, waits a second, then fetches the user back - once per wire
//! convention. Responses are logged raw with their latency; nothing is
//! asserted, this is a debugging aid against a live server.
//!
//! Configuration comes from the environment (`API_URL`, `USER_HASH`,
//! `AUTH_SECRET`, `BEARER_SECRET`). An optional first argument narrows the
//! run to one convention: `path` or `header`.

use std::time::Duration;

use tokenforge::{
    current_timestamp, derive_auth_token, derive_bearer_token, encode_transport_credential,
    init_tracing, ApiResponse, BearerFraming, ClientConfig, UserApiClient,
};

const PROBE_USER_NAME: &str = "realTristan";

fn log_response(call: &str, response: &ApiResponse) {
    tracing::info!(
        call,
        status = %response.status,
        latency_ms = response.latency.as_millis() as u64,
        body = %response.body,
        "response"
    );
}

/// POST an update through the path-embedded convention, then GET the user.
async fn probe_path_convention(
    client: &UserApiClient,
    config: &ClientConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let auth = derive_auth_token(
        &config.user_hash,
        current_timestamp(),
        config.require_auth_secret()?,
    )?;
    let bearer = derive_bearer_token(
        &config.user_hash,
        &auth,
        config.require_bearer_secret()?,
        BearerFraming::Wrapped,
    )?;
    let credential = encode_transport_credential(&config.user_hash, &auth, &bearer)?;

    let response = client.update_user(&credential, PROBE_USER_NAME).await?;
    log_response("POST /user/update/{credential}", &response);

    tokio::time::sleep(Duration::from_secs(1)).await;

    // The update consumed the token; the server rejects a replay, so the
    // get needs a fresh derivation.
    let auth = derive_auth_token(
        &config.user_hash,
        current_timestamp(),
        config.require_auth_secret()?,
    )?;
    let response = client.get_user(&config.user_hash, &auth).await?;
    log_response("GET /user/get/{user_hash}/{auth_token}", &response);

    Ok(())
}

/// POST an update through the header-based convention, then GET the user.
async fn probe_header_convention(
    client: &UserApiClient,
    config: &ClientConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let auth = derive_auth_token(
        &config.user_hash,
        current_timestamp(),
        config.require_auth_secret()?,
    )?;
    let bearer = derive_bearer_token(
        &config.user_hash,
        &auth,
        config.require_bearer_secret()?,
        BearerFraming::Plain,
    )?;

    let response = client
        .update_user_with_bearer(&config.user_hash, &bearer, PROBE_USER_NAME)
        .await?;
    log_response("POST /user/{user_hash}", &response);

    tokio::time::sleep(Duration::from_secs(1)).await;

    let auth = derive_auth_token(
        &config.user_hash,
        current_timestamp(),
        config.require_auth_secret()?,
    )?;
    let response = client
        .get_user_with_header(&config.user_hash, &auth)
        .await?;
    log_response("GET /user/{user_hash}", &response);

    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing("probe_users=info,tokenforge=debug");

    let config = ClientConfig::from_env();
    if config.user_hash.is_empty() {
        tracing::error!("USER_HASH is not configured");
        std::process::exit(2);
    }
    if !config.secrets_configured() {
        tracing::error!("AUTH_SECRET and BEARER_SECRET must both be configured");
        std::process::exit(2);
    }

    let convention = std::env::args().nth(1);
    let client = UserApiClient::new(config.base_url.clone());
    tracing::info!(base_url = %config.base_url, "probing user api");

    let result = match convention.as_deref() {
        Some("path") => probe_path_convention(&client, &config).await,
        Some("header") => probe_header_convention(&client, &config).await,
        None => {
            let first = probe_path_convention(&client, &config).await;
            match first {
                Ok(()) => probe_header_convention(&client, &config).await,
                err => err,
            }
        }
        Some(other) => {
            tracing::error!(convention = %other, "unknown convention, use: path | header");
            std::process::exit(2);
        }
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "probe failed");
        std::process::exit(1);
    }
}
