//! Request/response envelope over a [`RecordStore`].
//!
//! One request names a method, a kind, an optional id, and an optional JSON
//! body. Every outcome, including failures, is a serializable
//! [`ApiResponse`]; callers never see a raw [`StoreError`].

use std::str::FromStr;

use conduct_core::enums::Kind;
use conduct_core::record::Payload;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StoreError;
use crate::store::{RecordStore, WriteStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiRequest {
    pub method: Method,
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn list(kind: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            kind: kind.into(),
            id: None,
            body: None,
        }
    }

    #[must_use]
    pub fn get(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            kind: kind.into(),
            id: Some(id.into()),
            body: None,
        }
    }

    #[must_use]
    pub fn post(kind: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            kind: kind.into(),
            id: None,
            body: Some(body),
        }
    }

    #[must_use]
    pub fn delete(kind: impl Into<String>, id: Option<String>) -> Self {
        Self {
            method: Method::Delete,
            kind: kind.into(),
            id,
            body: None,
        }
    }

    /// The id, with an empty string treated as absent.
    fn target_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteStatus {
    Deleted,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ApiResponse {
    /// `GET` without id.
    List(Vec<Payload>),
    /// `GET` with id; serializes as `null` when the record does not exist.
    Single(Option<Payload>),
    /// `POST`.
    Written { status: WriteStatus, id: String },
    /// `DELETE`.
    Deleted { status: DeleteStatus },
    Error {
        error: String,
        #[serde(skip)]
        code: u16,
    },
}

impl ApiResponse {
    /// HTTP-style status: 200 on success, 400 for caller errors, 500 otherwise.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Error { code, .. } => *code,
            _ => 200,
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

impl From<StoreError> for ApiResponse {
    fn from(err: StoreError) -> Self {
        let code = if err.is_caller_error() { 400 } else { 500 };
        Self::Error {
            error: err.to_string(),
            code,
        }
    }
}

/// Execute one request against the store.
pub async fn handle<S: RecordStore>(store: &S, request: ApiRequest) -> ApiResponse {
    match dispatch(store, &request).await {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(method = ?request.method, kind = %request.kind, error = %err, "request failed");
            err.into()
        }
    }
}

async fn dispatch<S: RecordStore>(
    store: &S,
    request: &ApiRequest,
) -> Result<ApiResponse, StoreError> {
    let kind = Kind::from_str(&request.kind)?;

    match request.method {
        Method::Get => match request.target_id() {
            Some(id) => Ok(ApiResponse::Single(store.get(kind, id).await?)),
            None => Ok(ApiResponse::List(store.list(kind).await?)),
        },
        Method::Post => {
            let body = request
                .body
                .clone()
                .ok_or_else(|| StoreError::MalformedPayload("no data received".into()))?;
            let outcome = store.upsert_value(kind, body).await?;
            Ok(ApiResponse::Written {
                status: outcome.status,
                id: outcome.id,
            })
        }
        Method::Delete => {
            let id = request
                .target_id()
                .ok_or(StoreError::MissingKey(Kind::PRIMARY_KEY))?;
            store.delete(kind, id).await?;
            Ok(ApiResponse::Deleted {
                status: DeleteStatus::Deleted,
            })
        }
    }
}
