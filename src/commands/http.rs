//! Browser HTTP backend built on `gloo-net`.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use tracing::warn;

use super::{Backend, Reply};
use crate::error::{UiError, UiResult};

/// Same-origin fetch transport
#[derive(Clone, Copy, Default)]
pub struct HttpBackend;

fn network(e: impl std::fmt::Display) -> UiError {
    UiError::Network(e.to_string())
}

async fn into_reply(response: Response) -> UiResult<Reply> {
    let status = response.status();
    // The body is only informative on success; an unreadable error body keeps the status.
    let body = match response.text().await {
        Ok(text) => text,
        Err(e) if !response.ok() => {
            warn!(status, error = %e, "could not read error body");
            String::new()
        }
        Err(e) => return Err(UiError::Decode(e.to_string())),
    };
    Ok(Reply::new(status, body))
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    type File = web_sys::File;

    async fn post_empty(&self, url: &str) -> UiResult<Reply> {
        let response = Request::post(url).send().await.map_err(network)?;
        into_reply(response).await
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> UiResult<Reply> {
        let request = Request::post(url).json(body).map_err(network)?;
        let response = request.send().await.map_err(network)?;
        into_reply(response).await
    }

    async fn post_multipart(&self, url: &str, parts: &[(&'static str, web_sys::File)]) -> UiResult<Reply> {
        let form = web_sys::FormData::new().map_err(|e| UiError::Dom(format!("{:?}", e)))?;
        for (name, file) in parts {
            form.append_with_blob_and_filename(name, file, &file.name())
                .map_err(|e| UiError::Dom(format!("{:?}", e)))?;
        }
        // No explicit content type: the browser adds the multipart boundary.
        let request = Request::post(url).body(form).map_err(network)?;
        let response = request.send().await.map_err(network)?;
        into_reply(response).await
    }
}
