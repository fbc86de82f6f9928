use std::sync::Arc;

use crate::coaching::coach::ScenarioCoach;
use crate::config::Config;
use crate::guidance::companion::CareerCompanion;
use crate::llm_client::{Enricher, TextOracle};
use crate::matching::scoring::{MatchScorer, WeightedMatchScorer};
use crate::sessions::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: SessionStore,
    /// Pluggable match scorer. Default: WeightedMatchScorer.
    pub scorer: Arc<dyn MatchScorer>,
    pub coach: ScenarioCoach,
    pub companion: CareerCompanion,
}

impl AppState {
    /// Wires every component around one oracle, bounded by `config.oracle_timeout`.
    pub fn new(config: Config, oracle: Arc<dyn TextOracle>) -> Self {
        let enricher = Enricher::new(oracle, config.oracle_timeout);
        Self {
            sessions: SessionStore::new(config.session_idle_timeout),
            scorer: Arc::new(WeightedMatchScorer),
            coach: ScenarioCoach::new(enricher.clone()),
            companion: CareerCompanion::new(enricher),
            config,
        }
    }
}
