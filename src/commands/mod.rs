//! Server Command Wrappers
//!
//! Frontend bindings to the deals endpoints. Handlers talk to a [`Backend`]
//! so they can run against an in-memory fake in tests.

mod deals;
mod http;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::{UiError, UiResult};

// Re-export all public items
pub use deals::*;
pub use http::HttpBackend;

/// Status and body of a completed request
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Fail on a non-2xx status
    pub fn require_ok(self) -> UiResult<Self> {
        if self.ok() {
            Ok(self)
        } else {
            Err(UiError::Http { status: self.status })
        }
    }

    pub fn json<T: DeserializeOwned>(&self) -> UiResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Single-shot POST transport. No retries, no timeouts.
#[async_trait(?Send)]
pub trait Backend {
    /// File handle the multipart upload carries
    type File: Clone + 'static;

    async fn post_empty(&self, url: &str) -> UiResult<Reply>;

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> UiResult<Reply>;

    async fn post_multipart(&self, url: &str, parts: &[(&'static str, Self::File)]) -> UiResult<Reply>;
}

#[cfg(test)]
pub mod fake {
    //! Recording backend for handler tests

    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Empty(String),
        Json(String, serde_json::Value),
        Multipart(String, Vec<(&'static str, String)>),
    }

    impl Call {
        pub fn url(&self) -> &str {
            match self {
                Call::Empty(url) | Call::Json(url, _) | Call::Multipart(url, _) => url,
            }
        }
    }

    /// Replies are handed out in order; an exhausted queue answers 200 `{"status":"success"}`.
    #[derive(Default)]
    pub struct FakeBackend {
        pub calls: RefCell<Vec<Call>>,
        replies: RefCell<VecDeque<UiResult<Reply>>>,
        on_call: Option<Box<dyn Fn()>>,
    }

    impl FakeBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn reply(self, reply: UiResult<Reply>) -> Self {
            self.replies.borrow_mut().push_back(reply);
            self
        }

        /// Run `hook` inside every request, before its reply is returned
        pub fn on_call(mut self, hook: impl Fn() + 'static) -> Self {
            self.on_call = Some(Box::new(hook));
            self
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn next(&self, call: Call) -> UiResult<Reply> {
            self.calls.borrow_mut().push(call);
            if let Some(hook) = &self.on_call {
                hook();
            }
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(Reply::new(200, r#"{"status":"success"}"#)))
        }
    }

    #[async_trait(?Send)]
    impl Backend for FakeBackend {
        type File = String;

        async fn post_empty(&self, url: &str) -> UiResult<Reply> {
            self.next(Call::Empty(url.to_string()))
        }

        async fn post_json(&self, url: &str, body: &serde_json::Value) -> UiResult<Reply> {
            self.next(Call::Json(url.to_string(), body.clone()))
        }

        async fn post_multipart(&self, url: &str, parts: &[(&'static str, String)]) -> UiResult<Reply> {
            self.next(Call::Multipart(url.to_string(), parts.to_vec()))
        }
    }
}
