//! Narrative management summaries.
//!
//! The text comes from an external generative model and is display-only: the
//! dashboard never branches on it. [`NarrativeSummarizer`] is the fail-soft
//! front that turns every provider failure into a fixed fallback string, and
//! [`SummaryBoard`] keeps overlapping refreshes from publishing out of order.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::DashResult;

pub mod context;
pub mod gemini;

pub use gemini::{GeminiClient, SummaryConfig};

pub const NOT_CONFIGURED_SUMMARY: &str =
    "API Key not configured. Please check environment variables.";
pub const FALLBACK_SUMMARY: &str = "暂时无法提取管理总结，请查看具体指标明细。";

#[async_trait]
pub trait SummaryProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn generate(&self, context: &str) -> DashResult<String>;
}

/// One summary request as emitted by `supply-dash summary`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub configured: bool,
    pub context: String,
    pub summary: String,
}

#[derive(Clone, Default)]
pub struct NarrativeSummarizer {
    provider: Option<Arc<dyn SummaryProvider>>,
}

impl NarrativeSummarizer {
    pub fn new(provider: Arc<dyn SummaryProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    pub fn unconfigured() -> Self {
        Self { provider: None }
    }

    /// Builds a Gemini-backed summarizer when an API key is configured.
    pub fn from_config(config: &SummaryConfig) -> Self {
        if config.api_key.is_none() {
            return Self::unconfigured();
        }
        match GeminiClient::new(config) {
            Ok(client) => Self::new(Arc::new(client)),
            Err(error) => {
                warn!(%error, "summary client could not be built; summaries disabled");
                Self::unconfigured()
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn summarize(&self, context: &str) -> String {
        let Some(provider) = self.provider.as_ref() else {
            debug!("no summary provider configured");
            return NOT_CONFIGURED_SUMMARY.to_string();
        };

        match provider.generate(context).await {
            Ok(text) => text,
            Err(error) => {
                warn!(provider = provider.name(), %error, "summary generation failed");
                FALLBACK_SUMMARY.to_string()
            }
        }
    }

    pub async fn report(&self, context: &str) -> SummaryReport {
        SummaryReport {
            configured: self.is_configured(),
            context: context.to_string(),
            summary: self.summarize(context).await,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct SummaryTicket(u64);

#[derive(Debug)]
struct Published {
    ticket: SummaryTicket,
    text: String,
}

/// Latest-wins holder for one displayed summary.
///
/// Each refresh takes a ticket before it starts; a result is only published if
/// no newer ticket has published first.
#[derive(Debug, Default)]
pub struct SummaryBoard {
    next_ticket: AtomicU64,
    published: Mutex<Option<Published>>,
}

impl SummaryBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> SummaryTicket {
        SummaryTicket(self.next_ticket.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn publish(&self, ticket: SummaryTicket, text: String) -> bool {
        let mut slot = self
            .published
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(current) = slot.as_ref() {
            if current.ticket > ticket {
                debug!(
                    stale = ticket.0,
                    current = current.ticket.0,
                    "dropping stale summary"
                );
                return false;
            }
        }
        *slot = Some(Published { ticket, text });
        true
    }

    pub fn current(&self) -> Option<String> {
        self.published
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .as_ref()
            .map(|published| published.text.clone())
    }

    pub async fn refresh(&self, summarizer: &NarrativeSummarizer, context: &str) -> bool {
        let ticket = self.issue();
        let text = summarizer.summarize(context).await;
        self.publish(ticket, text)
    }
}
