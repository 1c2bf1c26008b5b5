use std::time::Duration;

use reqwest::StatusCode;
use serde::Serialize;
use url::Url;

use crate::domain::errors::GenerationError;
use crate::domain::images::ImageParameters;

pub const IMAGE_API_URL: &str = "https://image.pollinations.ai";
pub const TEXT_API_URL: &str = "https://text.pollinations.ai/";
pub const IMAGE_MODEL: &str = "midjourney";

const USER_AGENT: &str = "Pixmint/1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const BODY_SNIPPET_LEN: usize = 200;

// --- Public functions ---

/// Issue a single image-generation request against the upstream API and
/// classify the outcome.
///
/// Exactly one attempt is made; any retry policy belongs to the caller. An
/// empty prompt fails with `InvalidInput` before any network activity.
pub async fn generate_image(
    client: &reqwest::Client,
    base_url: &str,
    prompt: &str,
    params: ImageParameters,
) -> Result<Vec<u8>, GenerationError> {
    if prompt.trim().is_empty() {
        return Err(GenerationError::InvalidInput);
    }

    let url = image_request_url(base_url, prompt, params)?;

    let response = client
        .get(url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .send()
        .await
        .map_err(transport_failure)?;

    let status = response.status();
    if status != StatusCode::OK {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "(unreadable body)".to_string());
        return Err(GenerationError::UpstreamRejected {
            status: status.as_u16(),
            body_snippet: snippet(&body),
        });
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    if !is_image_content_type(&content_type) {
        return Err(GenerationError::UnexpectedContentType { content_type });
    }

    let bytes = response.bytes().await.map_err(transport_failure)?;
    Ok(bytes.to_vec())
}

/// Forward a prompt to the upstream text API and return its cleaned
/// plain-text response.
pub async fn generate_text(
    client: &reqwest::Client,
    base_url: &str,
    prompt: &str,
) -> Result<String, GenerationError> {
    if prompt.trim().is_empty() {
        return Err(GenerationError::InvalidInput);
    }

    let request_body = ChatRequest {
        messages: vec![Message {
            role: "user".to_string(),
            content: prompt.to_string(),
        }],
    };

    let response = client
        .post(base_url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .json(&request_body)
        .send()
        .await
        .map_err(transport_failure)?;

    let status = response.status();
    if status != StatusCode::OK {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "(unreadable body)".to_string());
        return Err(GenerationError::UpstreamRejected {
            status: status.as_u16(),
            body_snippet: snippet(&body),
        });
    }

    let body = response.text().await.map_err(transport_failure)?;
    Ok(clean_response_text(&body))
}

// --- Internal helpers ---

/// Build the upstream URL: `<base>/prompt/<encoded prompt>` plus the sizing,
/// model, and seed query parameters. The prompt is percent-encoded as a path
/// segment.
fn image_request_url(
    base_url: &str,
    prompt: &str,
    params: ImageParameters,
) -> Result<Url, GenerationError> {
    let mut url = Url::parse(base_url).map_err(|e| GenerationError::TransportFailure {
        message: format!("invalid upstream URL {base_url:?}: {e}"),
    })?;

    url.path_segments_mut()
        .map_err(|()| GenerationError::TransportFailure {
            message: format!("upstream URL {base_url:?} cannot be a base"),
        })?
        .pop_if_empty()
        .push("prompt")
        .push(prompt);

    url.query_pairs_mut()
        .append_pair("width", &params.width.to_string())
        .append_pair("height", &params.height.to_string())
        .append_pair("model", IMAGE_MODEL)
        .append_pair("nologo", "true")
        .append_pair("private", "false")
        .append_pair("enhance", "true")
        .append_pair("seed", &params.seed.to_string());

    Ok(url)
}

fn transport_failure(err: reqwest::Error) -> GenerationError {
    GenerationError::TransportFailure {
        message: err.to_string(),
    }
}

/// First 200 characters of an upstream error body, for diagnostics.
fn snippet(body: &str) -> String {
    body.chars().take(BODY_SNIPPET_LEN).collect()
}

fn is_image_content_type(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("image")
}

/// Strip whitespace and unescape the literal sequences the upstream text API
/// leaves in plain-text responses.
fn clean_response_text(raw: &str) -> String {
    raw.trim()
        .replace("\\n", "\n")
        .replace("\\u2014", "\u{2014}")
        .replace("\\\"", "\"")
}

// --- Upstream text API types ---

#[derive(Debug, Serialize)]
struct ChatRequest {
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}
