//! Index listing and deletion endpoints.

use reqwest::Client;
use secrecy::ExposeSecret;

use crate::endpoints::{encode_path_segment, send_request};
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::Index;
use es_config::BasicAuth;

/// List all indices via `GET /_cat/indices?format=json`.
pub async fn cat_indices(
    client: &Client,
    base_url: &str,
    auth: Option<&BasicAuth>,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<Index>> {
    let url = format!("{}/_cat/indices", base_url);

    let builder = with_auth(client.get(&url), auth).query(&[("format", "json")]);
    let response = send_request(builder, "/_cat/indices", "GET", "list indices", metrics).await?;

    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| ClientError::InvalidResponse(format!("failed to decode index listing: {e}")))
}

/// Delete an index via `DELETE /<name>`.
pub async fn delete_index(
    client: &Client,
    base_url: &str,
    auth: Option<&BasicAuth>,
    name: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<()> {
    let url = format!("{}/{}", base_url, encode_path_segment(name));

    let builder = with_auth(client.delete(&url), auth);
    send_request(
        builder,
        "/{index}",
        "DELETE",
        &format!("delete index {name}"),
        metrics,
    )
    .await?;

    Ok(())
}

/// Attach HTTP basic credentials when configured.
pub(crate) fn with_auth(
    builder: reqwest::RequestBuilder,
    auth: Option<&BasicAuth>,
) -> reqwest::RequestBuilder {
    match auth {
        Some(auth) => builder.basic_auth(&auth.username, Some(auth.password.expose_secret())),
        None => builder,
    }
}
