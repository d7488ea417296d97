//! Transport-neutral request and response types.
//!
//! Both the Lambda entry point and the local HTTP server convert their native
//! types into [`GatewayRequest`] and back from [`GatewayResponse`], so the
//! handler never sees either transport.

use std::collections::HashMap;

use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use aws_lambda_events::encodings::Body;
use http::header::{HeaderValue, CONTENT_TYPE};

use crate::constants::{CONTENT_TYPE_JSON, CONTENT_TYPE_TEXT};

/// One inbound invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatewayRequest {
    pub method: String,
    pub path_parameters: HashMap<String, String>,
    pub body: Option<String>,
}

impl GatewayRequest {
    pub fn new(method: &str) -> Self {
        Self {
            method: method.to_string(),
            ..Default::default()
        }
    }

    pub fn with_path_parameter(mut self, key: &str, value: &str) -> Self {
        self.path_parameters
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn path_parameter(&self, key: &str) -> Option<&str> {
        self.path_parameters.get(key).map(String::as_str)
    }

    /// The body, or an empty string when the gateway sent none.
    pub fn body_str(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }
}

/// One outbound response: a status code and a body string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayResponse {
    pub status_code: u16,
    pub body: String,
    pub content_type: Option<&'static str>,
}

impl GatewayResponse {
    pub fn json(status_code: u16, body: String) -> Self {
        Self {
            status_code,
            body,
            content_type: Some(CONTENT_TYPE_JSON),
        }
    }

    pub fn text(status_code: u16, body: &str) -> Self {
        Self {
            status_code,
            body: body.to_string(),
            content_type: Some(CONTENT_TYPE_TEXT),
        }
    }

    pub fn no_content() -> Self {
        Self {
            status_code: 204,
            body: String::new(),
            content_type: None,
        }
    }
}

impl From<ApiGatewayProxyRequest> for GatewayRequest {
    fn from(request: ApiGatewayProxyRequest) -> Self {
        Self {
            method: request.http_method.as_str().to_string(),
            path_parameters: request.path_parameters,
            body: request.body,
        }
    }
}

impl From<GatewayResponse> for ApiGatewayProxyResponse {
    fn from(response: GatewayResponse) -> Self {
        let mut proxy = ApiGatewayProxyResponse::default();
        proxy.status_code = i64::from(response.status_code);
        if let Some(content_type) = response.content_type {
            proxy
                .headers
                .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
        proxy.body = Some(Body::Text(response.body));
        proxy
    }
}
