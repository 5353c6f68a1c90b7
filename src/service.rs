//! Service boundary around [`FaqBot`].
//!
//! A failed startup leaves the service running but unavailable, so callers can
//! report that condition instead of crashing on first use. Reloads build a new
//! core off to the side and publish it in one swap; in-flight queries keep the
//! core they started with.

use std::sync::{Arc, PoisonError, RwLock};

use serde::Serialize;

use crate::config::MatcherConfig;
use crate::engine::FaqBot;
use crate::types::{FaqCatalog, FaqEntry, InitResult, MatchResult, ServiceUnavailable};

/// Overall service condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Healthy,
    /// Process is up but no core is in service.
    Degraded,
}

/// Snapshot returned by [`FaqService::health`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub chatbot_initialized: bool,
    pub faq_count: usize,
}

enum State {
    Ready(Arc<FaqBot>),
    Unavailable(String),
}

/// Thread-safe holder of the current core.
pub struct FaqService {
    config: MatcherConfig,
    state: RwLock<State>,
}

impl FaqService {
    /// Load the configured catalog and build the core. Never fails: errors
    /// leave the service unavailable.
    pub fn start(config: MatcherConfig) -> Self {
        let state = match FaqCatalog::load(&config.catalog)
            .and_then(|catalog| FaqBot::initialize(catalog, &config))
        {
            Ok(bot) => {
                log::info!("FAQ service ready with {} entries", bot.len());
                State::Ready(Arc::new(bot))
            }
            Err(e) => {
                log::error!("could not initialize FAQ matcher: {e}");
                State::Unavailable(e.to_string())
            }
        };
        Self {
            config,
            state: RwLock::new(state),
        }
    }

    /// Wrap an already-built core.
    pub fn from_core(bot: FaqBot, config: MatcherConfig) -> Self {
        Self {
            config,
            state: RwLock::new(State::Ready(Arc::new(bot))),
        }
    }

    /// Current core, shared.
    pub fn core(&self) -> Result<Arc<FaqBot>, ServiceUnavailable> {
        match &*self.state.read().unwrap_or_else(PoisonError::into_inner) {
            State::Ready(bot) => Ok(Arc::clone(bot)),
            State::Unavailable(reason) => Err(ServiceUnavailable {
                reason: reason.clone(),
            }),
        }
    }

    pub fn is_available(&self) -> bool {
        self.core().is_ok()
    }

    /// Answer a question with the current core.
    pub fn chat(&self, question: &str) -> Result<MatchResult, ServiceUnavailable> {
        Ok(self.core()?.handle(question))
    }

    /// Copy of the catalog entries, for diagnostics.
    pub fn entries(&self) -> Result<Vec<FaqEntry>, ServiceUnavailable> {
        Ok(self.core()?.list_entries().to_vec())
    }

    pub fn health(&self) -> HealthReport {
        match self.core() {
            Ok(bot) => HealthReport {
                status: HealthStatus::Healthy,
                chatbot_initialized: true,
                faq_count: bot.len(),
            },
            Err(_) => HealthReport {
                status: HealthStatus::Degraded,
                chatbot_initialized: false,
                faq_count: 0,
            },
        }
    }

    /// Build a core for `catalog` and swap it in. On error the current core
    /// (or unavailable state) is kept.
    pub fn reload(&self, catalog: FaqCatalog) -> InitResult<()> {
        let bot = FaqBot::initialize(catalog, &self.config)?;
        let count = bot.len();
        *self.state.write().unwrap_or_else(PoisonError::into_inner) = State::Ready(Arc::new(bot));
        log::info!("FAQ service reloaded with {count} entries");
        Ok(())
    }

    /// Reload from the configured catalog path.
    pub fn reload_from_disk(&self) -> InitResult<()> {
        let catalog = FaqCatalog::load(&self.config.catalog)?;
        self.reload(catalog)
    }
}
