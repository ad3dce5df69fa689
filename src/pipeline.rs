//! The order pipeline: extraction, pricing, history and suggestions.

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info, instrument};

use crate::ai::config::AiConfig;
use crate::ai::extract::extract_order;
use crate::history::OrderHistory;
use crate::menu::PriceCatalog;
use crate::order::Extraction;
use crate::pricing::{price, Bill};
use crate::session::{Session, SessionId, SessionStore};

/// What happened to one submitted order.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderOutcome {
    /// Items were extracted, priced and recorded.
    Billed {
        bill: Bill,
        suggestions: Option<Vec<String>>,
    },
    /// The model understood the text but found no items.
    Empty,
    /// The model reply could not be read as order lines.
    NotUnderstood { raw: String, message: String },
}

/// Finish an order once the model has answered.
///
/// Only a non-empty extraction touches the session: it is priced, appended to
/// the history, and the suggestions are computed from the updated history.
pub fn settle_order(
    session: &mut Session,
    catalog: &PriceCatalog,
    currency: &str,
    extraction: Extraction,
) -> OrderOutcome {
    let lines = match extraction {
        Extraction::Failed { raw, message } => {
            return OrderOutcome::NotUnderstood { raw, message };
        }
        Extraction::Parsed(lines) if lines.is_empty() => return OrderOutcome::Empty,
        Extraction::Parsed(lines) => lines,
    };

    let bill = price(catalog, &lines, currency);
    session.history_mut().record(&lines);
    let suggestions = session.history().suggest();
    debug!(
        total = bill.total,
        resolved = bill.details.len(),
        missing = bill.not_found.len(),
        orders = session.history().len(),
        "Order settled"
    );
    OrderOutcome::Billed { bill, suggestions }
}

/// Everything a front-end needs to serve orders: the shared menu, the
/// currency label and the live sessions.
#[derive(Debug, Clone)]
pub struct Shop {
    catalog: Arc<PriceCatalog>,
    currency: String,
    sessions: SessionStore,
}

impl Shop {
    pub fn new(catalog: PriceCatalog, currency: impl Into<String>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            currency: currency.into(),
            sessions: SessionStore::new(),
        }
    }

    pub fn catalog(&self) -> &PriceCatalog {
        &self.catalog
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Run one order text through the whole pipeline for a session.
    ///
    /// The session is not locked while the model is queried. A failed request
    /// returns `Err` and leaves the history as it was.
    #[instrument(level = "debug", skip(self, ai, order_text), fields(session = %id))]
    pub async fn process_order(
        &self,
        id: SessionId,
        ai: &AiConfig,
        order_text: &str,
    ) -> Result<OrderOutcome> {
        info!("Processing order");
        let extraction = extract_order(
            &ai.api_key,
            &ai.model,
            order_text,
            ai.chat_url.as_deref(),
        )
        .await?;
        Ok(self.settle(id, extraction).await)
    }

    /// Apply an extraction result to a session.
    pub async fn settle(&self, id: SessionId, extraction: Extraction) -> OrderOutcome {
        self.sessions
            .with_session(id, |session| {
                settle_order(session, &self.catalog, &self.currency, extraction)
            })
            .await
    }

    /// Suggestions for a session; looking does not start a session.
    pub async fn suggest(&self, id: SessionId) -> Option<Vec<String>> {
        self.sessions
            .read(id, |session| session.history().suggest())
            .await
            .flatten()
    }

    /// Copy of a session's history, empty for an unknown session.
    pub async fn history(&self, id: SessionId) -> OrderHistory {
        self.sessions
            .read(id, |session| session.history().clone())
            .await
            .unwrap_or_default()
    }

    pub async fn reset(&self, id: SessionId) -> bool {
        self.sessions.reset(id).await
    }
}
