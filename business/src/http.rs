//! Platform-abstracted HTTP client with Send-safe futures.
//!
//! On WASM, `reqwest::Response` is not `Send` because it wraps JS values. Commands must
//! return `Send` futures, so:
//! - on **native** we use reqwest directly;
//! - on **WASM** the request runs on the JS thread via `wasm_bindgen_futures::spawn_local`
//!   and the result comes back through a `flume` channel.

use std::collections::HashMap;

use thiserror::Error;

/// A response holding only Send-safe data.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

#[derive(Debug, Clone, Error)]
#[error("HTTP error: {message}")]
pub struct HttpError {
    pub message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

/// A GET request under construction.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    url: String,
    headers: HashMap<String, String>,
}

impl RequestBuilder {
    fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub async fn send(self) -> HttpResult<Response> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            execute(self.url, self.headers).await
        }

        #[cfg(target_arch = "wasm32")]
        {
            self.send_wasm().await
        }
    }

    #[cfg(target_arch = "wasm32")]
    async fn send_wasm(self) -> HttpResult<Response> {
        let (tx, rx) = flume::bounded::<HttpResult<Response>>(1);
        let Self { url, headers } = self;

        wasm_bindgen_futures::spawn_local(async move {
            let result = execute(url, headers).await;
            // receiver gone means the command was dropped
            drop(tx.send_async(result).await);
        });

        rx.recv_async()
            .await
            .map_err(|_| HttpError::new("Request cancelled"))?
    }
}

async fn execute(url: String, headers: HashMap<String, String>) -> HttpResult<Response> {
    let client = reqwest::Client::new();
    let mut request = client.get(&url);
    for (name, value) in &headers {
        request = request.header(name, value);
    }

    let response = request
        .send()
        .await
        .map_err(|e| HttpError::new(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response
        .bytes()
        .await
        .map_err(|e| HttpError::new(e.to_string()))?
        .to_vec();

    Ok(Response { status, body })
}

pub struct Client;

impl Client {
    pub fn get(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(url)
    }
}
