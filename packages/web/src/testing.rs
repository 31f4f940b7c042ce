//! Test doubles for the scrape transport.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use scrape_protocol::{ScrapeRequest, ScrapeResponse};

use crate::client::{ClientError, ScrapeClient, ScrapeReply};

enum Canned {
    Reply(ScrapeReply),
    Undecodable(String),
}

/// Scrape client that answers from a queue of canned replies and records
/// every request it receives.
///
/// When the queue runs dry it answers `200 {"products": []}`.
#[derive(Clone, Default)]
pub struct MockScrapeClient {
    replies: Arc<Mutex<VecDeque<Canned>>>,
    requests: Arc<Mutex<Vec<ScrapeRequest>>>,
}

impl MockScrapeClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a decoded reply.
    pub fn with_reply(self, status: u16, body: ScrapeResponse) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Canned::Reply(ScrapeReply::new(status, body)));
        self
    }

    /// Queue a raw body that will fail to decode, as a non-JSON page would.
    pub fn with_raw_body(self, body: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Canned::Undecodable(body.to_string()));
        self
    }

    /// Requests received so far, in order.
    pub fn requests(&self) -> Vec<ScrapeRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait(?Send)]
impl ScrapeClient for MockScrapeClient {
    async fn scrape(&self, request: &ScrapeRequest) -> Result<ScrapeReply, ClientError> {
        self.requests.lock().unwrap().push(request.clone());

        let canned = self.replies.lock().unwrap().pop_front();
        match canned {
            Some(Canned::Reply(reply)) => Ok(reply),
            Some(Canned::Undecodable(body)) => {
                let err = serde_json::from_str::<ScrapeResponse>(&body)
                    .err()
                    .unwrap_or_else(|| {
                        serde_json::from_str::<ScrapeResponse>("").unwrap_err()
                    });
                Err(ClientError::Decode(err))
            }
            None => Ok(ScrapeReply::new(200, ScrapeResponse::success(Vec::new(), None))),
        }
    }
}
