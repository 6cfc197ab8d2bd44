//! Response decoding and failure mapping
//!
//! The backend reports failures three ways: transport errors, non-2xx
//! statuses (FastAPI puts the reason in `detail`), and 2xx bodies carrying an
//! `error` field instead of the expected shape.

use docqa_application::BackendError;
use docqa_domain::ArenaAnswers;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;

/// Map a transport-level failure
pub(crate) fn transport_error(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        BackendError::Transport(format!("request timed out: {}", err))
    } else {
        BackendError::Transport(err.to_string())
    }
}

/// Turn a status code and raw body into the expected result shape
pub(crate) fn decode<T: DeserializeOwned>(
    status: reqwest::StatusCode,
    body: &str,
) -> Result<T, BackendError> {
    if !status.is_success() {
        return Err(BackendError::Status {
            status: status.as_u16(),
            message: detail_message(body).unwrap_or_else(|| {
                status.canonical_reason().unwrap_or("Unknown").to_string()
            }),
        });
    }

    let value: Value =
        serde_json::from_str(body).map_err(|e| BackendError::Decode(e.to_string()))?;

    if let Some(error) = value.get("error").filter(|e| !e.is_null()) {
        return Err(BackendError::Rejected(json_text(error)));
    }

    serde_json::from_value(value).map_err(|e| BackendError::Decode(e.to_string()))
}

fn detail_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value.get("detail").filter(|d| !d.is_null()).map(json_text)
}

fn json_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Arena payload: either `{"answers": {...}}` or a bare model-to-answer map
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum ArenaPayload {
    Wrapped(ArenaAnswers),
    Bare(BTreeMap<String, String>),
}

impl From<ArenaPayload> for ArenaAnswers {
    fn from(payload: ArenaPayload) -> Self {
        match payload {
            ArenaPayload::Wrapped(answers) => answers,
            ArenaPayload::Bare(map) => ArenaAnswers { answers: map },
        }
    }
}
