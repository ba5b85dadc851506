//! Request execution shared by every endpoint.
//!
//! Responsibilities:
//! - Send a request once, recording latency, request and error metrics.
//! - Map non-2xx responses to [`ClientError::ApiError`] carrying the server message.
//! - Decode JSON bodies and `{success, data, message}` envelopes.
//!
//! Does NOT handle:
//! - Retries. Every call is a single round-trip.

use std::time::Instant;

use reqwest::{RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::{ApiResponse, ErrorBody};
use crate::tracing::inject_trace_context;

/// Sends an HTTP request and turns non-2xx responses into errors.
///
/// `endpoint` and `method` label the recorded metrics.
pub async fn send_request(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Response> {
    if let Some(m) = metrics {
        m.record_request(endpoint, method);
    }
    let started = Instant::now();

    let outcome = match inject_trace_context(builder).send().await {
        Ok(response) if response.status().is_success() => Ok(response),
        Ok(response) => Err(error_from_response(response).await),
        Err(e) => Err(ClientError::from(e)),
    };

    if let Some(m) = metrics {
        let status = match &outcome {
            Ok(response) => Some(response.status().as_u16()),
            Err(ClientError::ApiError { status, .. }) => Some(*status),
            Err(_) => None,
        };
        m.record_request_duration(endpoint, method, started.elapsed(), status);
        if let Err(e) = &outcome {
            m.record_client_error(endpoint, method, e);
        }
    }

    match &outcome {
        Ok(response) => debug!(endpoint, method, status = response.status().as_u16(), "Request completed"),
        Err(e) => debug!(endpoint, method, error = %e, "Request failed"),
    }

    outcome
}

/// Build an [`ClientError::ApiError`] from a non-2xx response.
///
/// Prefers the service's `detail` field; falls back to the raw body, then to
/// the status reason.
async fn error_from_response(response: Response) -> ClientError {
    let status = response.status();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let message = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => parsed.detail.into_message(),
        Err(_) if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
        Err(_) => body,
    };

    ClientError::ApiError {
        status: status.as_u16(),
        url,
        message,
    }
}

/// Decode a JSON body, reporting malformed payloads as [`ClientError::InvalidResponse`].
pub async fn read_json<T: DeserializeOwned>(response: Response, endpoint: &str) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| ClientError::InvalidResponse(format!("{endpoint}: {e}")))
}

/// GET an advanced endpoint and unwrap its envelope.
pub(crate) async fn get_data<T: DeserializeOwned>(
    client: &reqwest::Client,
    base_url: &str,
    endpoint: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<T> {
    let url = format!("{base_url}{endpoint}");
    let response = send_request(client.get(&url), endpoint, "GET", metrics).await?;
    unwrap_envelope(response, endpoint, metrics, "GET").await
}

/// POST a JSON body (or nothing) to an advanced endpoint and unwrap its envelope.
pub(crate) async fn post_data<B: Serialize + ?Sized, T: DeserializeOwned>(
    client: &reqwest::Client,
    base_url: &str,
    endpoint: &str,
    body: Option<&B>,
    metrics: Option<&MetricsCollector>,
) -> Result<T> {
    let url = format!("{base_url}{endpoint}");
    let mut builder = client.post(&url);
    if let Some(body) = body {
        builder = builder.json(body);
    }
    let response = send_request(builder, endpoint, "POST", metrics).await?;
    unwrap_envelope(response, endpoint, metrics, "POST").await
}

async fn unwrap_envelope<T: DeserializeOwned>(
    response: Response,
    endpoint: &str,
    metrics: Option<&MetricsCollector>,
    method: &str,
) -> Result<T> {
    let envelope: ApiResponse<T> = read_json(response, endpoint).await?;
    envelope.into_data().inspect_err(|e| {
        if let Some(m) = metrics {
            m.record_client_error(endpoint, method, e);
        }
    })
}
