//! API Gateway proxy integration.
//!
//! The request and response types mirror the subset of the REST (v1) and
//! HTTP API (v2) proxy events the function reads and writes. `handle` never
//! fails: missing input and unsupported methods become 4xx responses,
//! validation failures become a `200` carrying `{"valid": false, ...}`.

use crate::core::cpf::Validator;
use crate::utils::error::{CpfError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRequest {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub path_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
    #[serde(default)]
    pub request_context: Option<RequestContext>,
}

/// HTTP API (v2) 的 method 放在 `requestContext.http.method`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestContext {
    #[serde(default)]
    pub http: Option<HttpDescription>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttpDescription {
    #[serde(default)]
    pub method: Option<String>,
}

impl GatewayRequest {
    /// v1 的 `httpMethod`，沒有時讀 v2 的 `requestContext.http.method`
    pub fn method(&self) -> Option<&str> {
        self.http_method.as_deref().or_else(|| {
            self.request_context
                .as_ref()
                .and_then(|ctx| ctx.http.as_ref())
                .and_then(|http| http.method.as_deref())
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl GatewayResponse {
    fn json(status_code: u16, body: String) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            status_code,
            headers,
            body,
            is_base64_encoded: false,
        }
    }

    fn error(status_code: u16, message: &str) -> Self {
        Self::json(status_code, json!({ "error": message }).to_string())
    }
}

pub fn handle(validator: &Validator, request: &GatewayRequest, parameter: &str) -> GatewayResponse {
    // 直接 invoke (非 API Gateway) 時沒有 method
    let method = request.method().unwrap_or("GET").to_ascii_uppercase();
    if method != "GET" && method != "POST" {
        tracing::warn!("Rejecting {} request", method);
        return GatewayResponse::error(405, &format!("method {} not allowed", method));
    }

    let candidate = match extract_candidate(request, parameter) {
        Ok(Some(candidate)) => candidate,
        Ok(None) => {
            tracing::warn!("Request without '{}' parameter", parameter);
            return GatewayResponse::error(400, &format!("missing '{}' parameter", parameter));
        }
        Err(e) => {
            tracing::warn!("Malformed request: {}", e);
            return GatewayResponse::error(400, &e.to_string());
        }
    };

    let verdict = validator.verdict(&candidate);
    tracing::info!(
        valid = verdict.valid,
        reason = verdict.reason.map(|r| r.code()),
        "CPF validated"
    );

    match serde_json::to_string(&verdict) {
        Ok(body) => GatewayResponse::json(200, body),
        Err(e) => {
            tracing::error!("Failed to serialize verdict: {}", e);
            GatewayResponse::error(500, "internal error")
        }
    }
}

/// 查找順序：path 參數、query 參數、JSON body 欄位
pub fn extract_candidate(request: &GatewayRequest, parameter: &str) -> Result<Option<String>> {
    let from_params = [&request.path_parameters, &request.query_string_parameters]
        .into_iter()
        .flatten()
        .find_map(|params| params.get(parameter));
    if let Some(value) = from_params {
        return Ok(Some(value.clone()));
    }

    let body = match request.body.as_deref() {
        Some(body) if !body.trim().is_empty() => body,
        _ => return Ok(None),
    };

    let payload: serde_json::Value = if request.is_base64_encoded {
        let decoded = STANDARD
            .decode(body.trim())
            .map_err(|e| CpfError::ProcessingError {
                message: format!("body is not valid base64: {}", e),
            })?;
        serde_json::from_slice(&decoded)?
    } else {
        serde_json::from_str(body)?
    };
    match payload.get(parameter) {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(value)) => Ok(Some(value.clone())),
        // 數字會遺失前導零，因此只接受字串
        Some(_) => Err(CpfError::ProcessingError {
            message: format!("'{}' must be a JSON string", parameter),
        }),
    }
}
