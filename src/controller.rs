//! Interaction controller.
//!
//! A [`Controller`] owns the [`FilterState`] of one dashboard session. Each
//! [`DashboardEvent`] goes through the single transition function
//! [`transition`], after which every view is synthesized again from the new
//! state.

use crate::data::Dataset;
use crate::filter::{ColorFilter, FilterState};
use crate::views::{synthesize, Snapshot};
use std::sync::Arc;

/// Which filter a reset control clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetTarget {
    /// "Remove all filters".
    All,
    /// "Remove olympic event filter".
    Year,
    /// "Remove sport filter".
    Sport,
}

impl ResetTarget {
    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            ResetTarget::All => "Remove all filters",
            ResetTarget::Year => "Remove olympic event filter",
            ResetTarget::Sport => "Remove sport filter",
        }
    }
}

/// Input raised by the render surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    /// The color selector changed.
    ColorSelected(ColorFilter),
    /// A bar of the medal chart was clicked.
    YearClicked(u16),
    /// A word of the sport cloud was clicked.
    SportClicked(String),
    /// A reset button was pressed.
    Reset(ResetTarget),
}

/// Compute the state that follows `event`.
pub fn transition(state: &FilterState, event: &DashboardEvent) -> FilterState {
    let mut next = state.clone();
    match event {
        DashboardEvent::ColorSelected(color) => next.set_color(*color),
        DashboardEvent::YearClicked(year) => next.select_year(*year),
        DashboardEvent::SportClicked(sport) => next.select_sport(sport.as_str()),
        DashboardEvent::Reset(ResetTarget::All) => next.clear_all(),
        DashboardEvent::Reset(ResetTarget::Year) => next.clear_year(),
        DashboardEvent::Reset(ResetTarget::Sport) => next.clear_sport(),
    }
    next
}

/// One dashboard session.
#[derive(Debug)]
pub struct Controller {
    dataset: Arc<Dataset>,
    state: FilterState,
    snapshot: Snapshot,
}

impl Controller {
    /// Start a session with an unfiltered state.
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let state = FilterState::new();
        let snapshot = synthesize(&dataset, &state);
        Self {
            dataset,
            state,
            snapshot,
        }
    }

    /// Apply an event and re-synthesize every view.
    pub fn dispatch(&mut self, event: DashboardEvent) -> &Snapshot {
        let next = transition(&self.state, &event);
        tracing::debug!(?event, from = %self.state, to = %next, "Filter transition");
        self.state = next;
        self.snapshot = synthesize(&self.dataset, &self.state);
        &self.snapshot
    }

    /// Current filter state.
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Views for the current state.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// The shared dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}
