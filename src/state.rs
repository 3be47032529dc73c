//! Caller-owned portfolio state and its JSON snapshot.
//!
//! There is no process-wide store: the CLI loads a snapshot, applies one
//! command and writes it back.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::DEFAULT_BUDGET;
use crate::core::{Error, Result, ResultExt, UseCaseRecord};
use crate::ingest::{company_context_from_message, extract_from_response, CompanyUpdate};
use crate::portfolio::{calculate_portfolio_metrics, merge_use_cases, selected_use_cases, PortfolioMetrics};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioState {
    pub company_name: String,
    pub industry: String,
    pub budget_constraint: f64,
    pub use_cases: Vec<UseCaseRecord>,
}

impl Default for PortfolioState {
    fn default() -> Self {
        Self::with_budget(DEFAULT_BUDGET)
    }
}

/// What an ingest call changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngestReport {
    pub added: usize,
    pub skipped: Vec<String>,
    pub company_updated: bool,
}

impl PortfolioState {
    pub fn with_budget(budget_constraint: f64) -> Self {
        Self {
            company_name: String::new(),
            industry: String::new(),
            budget_constraint,
            use_cases: Vec::new(),
        }
    }

    pub fn add_use_case(&mut self, use_case: UseCaseRecord) {
        self.use_cases.push(use_case);
    }

    /// Apply `update` to the record with `id`. Returns false when none matched.
    pub fn update_use_case<F>(&mut self, id: &str, update: F) -> bool
    where
        F: FnOnce(&mut UseCaseRecord),
    {
        match self.use_cases.iter_mut().find(|uc| uc.id == id) {
            Some(use_case) => {
                update(use_case);
                true
            }
            None => false,
        }
    }

    pub fn remove_use_case(&mut self, id: &str) -> Option<UseCaseRecord> {
        let index = self.use_cases.iter().position(|uc| uc.id == id)?;
        Some(self.use_cases.remove(index))
    }

    pub fn toggle_selection(&mut self, id: &str) -> bool {
        self.update_use_case(id, |uc| uc.selected = !uc.selected)
    }

    pub fn set_use_cases(&mut self, use_cases: Vec<UseCaseRecord>) {
        self.use_cases = use_cases;
    }

    pub fn set_company_context(
        &mut self,
        company_name: impl Into<String>,
        industry: impl Into<String>,
        budget_constraint: f64,
    ) {
        self.company_name = company_name.into();
        self.industry = industry.into();
        self.budget_constraint = budget_constraint;
    }

    /// Overwrite only the fields the update actually carries.
    pub fn apply_company_update(&mut self, update: &CompanyUpdate) -> bool {
        if update.is_empty() {
            return false;
        }
        if let Some(name) = update.name() {
            self.company_name = name.to_string();
        }
        if let Some(industry) = update.industry() {
            self.industry = industry.to_string();
        }
        if let Some(budget) = update.budget() {
            self.budget_constraint = budget;
        }
        true
    }

    pub fn selected_use_cases(&self) -> Vec<&UseCaseRecord> {
        selected_use_cases(&self.use_cases)
    }

    pub fn portfolio_metrics(&self) -> PortfolioMetrics {
        calculate_portfolio_metrics(&self.use_cases)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Append candidates whose names are new; returns the skipped names.
    pub fn merge_candidates<I>(&mut self, candidates: I) -> (usize, Vec<String>)
    where
        I: IntoIterator<Item = UseCaseRecord>,
    {
        let outcome = merge_use_cases(&self.use_cases, candidates);
        self.use_cases = outcome.use_cases;
        (outcome.added, outcome.skipped)
    }

    /// Fold one assistant response into the state.
    ///
    /// The user message is only mined for company context when the response
    /// carried none and no company name is known yet.
    pub fn ingest_response(
        &mut self,
        response: &str,
        user_message: Option<&str>,
        batch_stamp: i64,
    ) -> IngestReport {
        let extracted = extract_from_response(response, batch_stamp);

        let company_updated = match &extracted.company {
            Some(update) => self.apply_company_update(update),
            None if self.company_name.is_empty() => user_message
                .map(company_context_from_message)
                .is_some_and(|update| self.apply_company_update(&update)),
            None => false,
        };

        let (added, skipped) = self.merge_candidates(extracted.use_cases);
        if !skipped.is_empty() {
            debug!(?skipped, "skipped candidates with duplicate names");
        }

        IngestReport {
            added,
            skipped,
            company_updated,
        }
    }

    /// Read a snapshot; a missing file yields `None`.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !crate::io::file_exists(path) {
            debug!("No snapshot at {}", path.display());
            return Ok(None);
        }

        let contents = crate::io::read_file(path)?;
        let state = serde_json::from_str(&contents)
            .map_err(|e| Error::Validation(format!("{}: {}", path.display(), e)))?;
        Ok(Some(state))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            crate::io::ensure_dir(parent)?;
        }
        crate::io::write_file(path, &json).context("Failed to save portfolio snapshot")?;
        info!(use_cases = self.use_cases.len(), "saved snapshot to {}", path.display());
        Ok(())
    }
}
