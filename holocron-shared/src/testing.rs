//! Test doubles shared by the unit tests of this crate.

use crate::{
    lifecycle::Dispatcher,
    request::{RawResponse, RequestError, Transport},
};
use async_trait::async_trait;
use futures::channel::oneshot;
use reqwest::{Method, StatusCode};
use std::{cell::RefCell, collections::VecDeque};

fn raw_response(status: u16, body: &str) -> RawResponse {
    let status_text = StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or_default()
        .to_owned();
    RawResponse {
        status,
        status_text,
        body: body.to_owned(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRequest {
    pub method: Method,
    pub uri: String,
    pub body: Option<String>,
}

/// Replays canned responses in order and records what was sent.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<RawResponse, String>>>,
    sent: RefCell<Vec<SentRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(raw_response(status, body)));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.replies.borrow_mut().push_back(Err(message.to_owned()));
        self
    }

    pub fn sent(&self) -> Vec<SentRequest> {
        self.sent.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<String>,
    ) -> Result<RawResponse, RequestError> {
        self.sent.borrow_mut().push(SentRequest {
            method,
            uri: uri.to_owned(),
            body,
        });
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(format!("no scripted reply for {uri}")))
            .map_err(|message| RequestError::Unavailable { message })
    }
}

/// Hands out replies in request order but holds each one until its gate is
/// opened, so responses can complete in any order.
#[derive(Debug, Default)]
pub struct GatedTransport {
    replies: RefCell<VecDeque<(RawResponse, oneshot::Receiver<()>)>>,
}

impl GatedTransport {
    /// Queues a reply; it is delivered once the returned sender fires.
    pub fn reply(&self, status: u16, body: &str) -> oneshot::Sender<()> {
        let (gate, wait) = oneshot::channel();
        self.replies
            .borrow_mut()
            .push_back((raw_response(status, body), wait));
        gate
    }
}

#[async_trait(?Send)]
impl Transport for GatedTransport {
    async fn send(
        &self,
        _method: Method,
        uri: &str,
        _body: Option<String>,
    ) -> Result<RawResponse, RequestError> {
        let next = self.replies.borrow_mut().pop_front();
        let Some((response, wait)) = next else {
            return Err(RequestError::Unavailable {
                message: format!("no gated reply for {uri}"),
            });
        };
        wait.await.map_err(|_| RequestError::Unavailable {
            message: format!("gate dropped for {uri}"),
        })?;
        Ok(response)
    }
}

/// Collects dispatched actions.
#[derive(Debug)]
pub struct Recorder<A> {
    actions: RefCell<Vec<A>>,
}

impl<A> Default for Recorder<A> {
    fn default() -> Self {
        Self {
            actions: RefCell::new(Vec::new()),
        }
    }
}

impl<A: Clone> Recorder<A> {
    pub fn actions(&self) -> Vec<A> {
        self.actions.borrow().clone()
    }
}

impl<A> Dispatcher<A> for Recorder<A> {
    fn dispatch(&self, action: A) {
        self.actions.borrow_mut().push(action);
    }
}
