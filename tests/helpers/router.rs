// ABOUTME: In-process HTTP driver for exercising the recommender router in tests
// ABOUTME: Sends one request through tower oneshot and buffers the full response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Method, Request, Response};
use axum::Router;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tower::ServiceExt;

/// A request under construction for a single router call
pub struct RouteRequest {
    builder: axum::http::request::Builder,
    body: Body,
}

impl RouteRequest {
    fn new(method: Method, uri: &str) -> Self {
        Self {
            builder: Request::builder().method(method).uri(uri),
            body: Body::empty(),
        }
    }

    pub fn get(uri: &str) -> Self {
        Self::new(Method::GET, uri)
    }

    pub fn post(uri: &str) -> Self {
        Self::new(Method::POST, uri)
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.builder = self.builder.header(name, value);
        self
    }

    /// Body sent verbatim, for malformed payloads
    pub fn raw_body(self, body: &str, content_type: &str) -> Self {
        let mut request = self.header(header::CONTENT_TYPE.as_str(), content_type);
        request.body = Body::from(body.to_owned());
        request
    }

    pub fn json<T: Serialize>(self, payload: &T) -> Self {
        let encoded = serde_json::to_string(payload).expect("request payload serializes");
        self.raw_body(&encoded, "application/json")
    }

    pub async fn send(self, app: Router) -> RouteResponse {
        let request = self.builder.body(self.body).expect("valid request");
        let response = app.oneshot(request).await.expect("router is infallible");
        RouteResponse::read(response).await
    }
}

/// Status, headers and buffered body of a router response
pub struct RouteResponse {
    status: u16,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl RouteResponse {
    async fn read(response: Response<Body>) -> Self {
        let (parts, body) = response.into_parts();
        let body = to_bytes(body, usize::MAX)
            .await
            .expect("response body is readable");
        Self {
            status: parts.status.as_u16(),
            headers: parts.headers,
            body: body.to_vec(),
        }
    }

    pub const fn status(&self) -> u16 {
        self.status
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    pub fn json<T: DeserializeOwned>(self) -> T {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }
}
