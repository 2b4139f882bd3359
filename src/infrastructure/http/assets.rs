use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::Response,
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};

use super::REQUEST_BODY_LIMIT;
use crate::error::{AppError, AppResult};

const HOP_BY_HOP_HEADERS: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "content-length",
];

/// Production asset service: files from `static_dir`, and `index.html` for
/// any path that is not a file so client-side routes resolve.
pub fn static_assets(static_dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(static_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(static_dir.join("index.html")))
}

/// Development asset service: everything is relayed to the front-end dev
/// server, which does the module transformation itself.
pub fn dev_server_assets(frontend_dev_url: &str) -> Router {
    let proxy = Arc::new(DevServerProxy::new(frontend_dev_url.to_string()));
    Router::new()
        .fallback(DevServerProxy::forward)
        .with_state(proxy)
}

pub struct DevServerProxy {
    base_url: String,
    http_client: reqwest::Client,
}

impl DevServerProxy {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Fallback handler relaying the request to the dev server
    pub async fn forward(
        State(proxy): State<Arc<DevServerProxy>>,
        request: Request,
    ) -> AppResult<Response> {
        proxy
            .relay(request)
            .await
            .map_err(|e| AppError::DevServerUnavailable(format!("{:#}", e)))
    }

    async fn relay(&self, request: Request) -> anyhow::Result<Response> {
        let (parts, body) = request.into_parts();
        let path_and_query = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");
        let url = format!("{}{}", self.base_url, path_and_query);

        let method = reqwest::Method::from_bytes(parts.method.as_str().as_bytes())?;
        let body = to_bytes(body, REQUEST_BODY_LIMIT).await?;

        let mut builder = self.http_client.request(method, &url);
        for (name, value) in parts.headers.iter() {
            if *name == header::HOST || is_hop_by_hop(name.as_str()) {
                continue;
            }
            builder = builder.header(name.as_str(), value.as_bytes());
        }

        let upstream = builder.body(body.to_vec()).send().await?;

        let status = StatusCode::from_u16(upstream.status().as_u16())?;
        let mut headers = HeaderMap::new();
        for (name, value) in upstream.headers() {
            if is_hop_by_hop(name.as_str()) {
                continue;
            }
            headers.append(
                HeaderName::from_bytes(name.as_str().as_bytes())?,
                HeaderValue::from_bytes(value.as_bytes())?,
            );
        }
        let bytes = upstream.bytes().await?;

        let mut response = Response::new(Body::from(bytes));
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        Ok(response)
    }
}

fn is_hop_by_hop(name: &str) -> bool {
    HOP_BY_HOP_HEADERS.contains(&name)
}
