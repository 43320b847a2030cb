//! Reference model of the dashboard page: `public/app.js` mirrors this state
//! machine, request-token guard and chart lifecycle step for step.

use crate::chart::{ChartData, ChartRange};
use crate::info::InfoPanel;
use crate::response::LoadError;
use chart_model::Snapshot;
use log::{debug, error, info};

/// Rendering surface driven by the controller. The chart widget behind
/// `draw_chart` is owned by the view and released by `destroy_chart`.
pub trait DashboardView {
    fn show_loading(&mut self);
    fn show_error(&mut self, message: &str);
    fn show_loaded(&mut self, info: &InfoPanel);
    fn draw_chart(&mut self, chart: &ChartData);
    fn destroy_chart(&mut self);
    fn mark_range(&mut self, range: ChartRange);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Loading,
    Error,
    Loaded,
}

/// Issued for every load. Only the most recent ticket is honoured by
/// `DashboardController::complete`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    token: u64,
    symbol: String,
}

impl LoadTicket {
    pub fn token(&self) -> u64 {
        self.token
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

pub struct DashboardController<V: DashboardView> {
    view: V,
    current_symbol: String,
    snapshot: Option<Snapshot>,
    range: ChartRange,
    state: DisplayState,
    latest_token: u64,
    chart_drawn: bool,
}

impl<V: DashboardView> DashboardController<V> {
    pub fn new(view: V, initial_symbol: &str) -> Self {
        DashboardController {
            view,
            current_symbol: initial_symbol.to_string(),
            snapshot: None,
            range: ChartRange::default(),
            state: DisplayState::Loading,
            latest_token: 0,
            chart_drawn: false,
        }
    }

    pub fn start(&mut self) -> LoadTicket {
        let symbol = self.current_symbol.clone();
        self.begin_load(symbol)
    }

    /// Search box submit. Blank input is ignored.
    pub fn search(&mut self, input: &str) -> Option<LoadTicket> {
        let symbol = input.trim().to_uppercase();
        if symbol.is_empty() {
            return None;
        }
        Some(self.begin_load(symbol))
    }

    pub fn quick_pick(&mut self, symbol: &str) -> LoadTicket {
        self.begin_load(symbol.to_string())
    }

    fn begin_load(&mut self, symbol: String) -> LoadTicket {
        self.latest_token += 1;
        self.current_symbol = symbol.clone();
        self.state = DisplayState::Loading;
        self.view.show_loading();

        debug!("begin_load | symbol: {} | token: {}", symbol, self.latest_token);

        LoadTicket {
            token: self.latest_token,
            symbol,
        }
    }

    /// Applies the outcome of `ticket`'s load. Returns `false` when a newer
    /// load was issued in the meantime and the outcome was dropped.
    pub fn complete(&mut self, ticket: LoadTicket, outcome: Result<Snapshot, LoadError>) -> bool {
        if ticket.token != self.latest_token {
            debug!(
                "complete | stale response dropped | symbol: {} | token: {} | latest: {}",
                ticket.symbol, ticket.token, self.latest_token
            );
            return false;
        }

        match outcome {
            Ok(snapshot) => {
                let info = InfoPanel::from_snapshot(&snapshot, &ticket.symbol);
                self.snapshot = Some(snapshot);
                self.redraw_chart();
                self.state = DisplayState::Loaded;
                self.view.show_loaded(&info);
                info!("loaded {}", ticket.symbol);
            }
            Err(e) => {
                error!("load failed | symbol: {} | {}", ticket.symbol, e);
                self.state = DisplayState::Error;
                self.view.show_error(&error_message(&ticket.symbol));
            }
        }
        true
    }

    /// Marks `range` active and redraws. Every range plots the full dataset.
    pub fn select_range(&mut self, range: ChartRange) {
        debug!("select_range | range: {}", range);
        self.range = range;
        self.view.mark_range(range);
        if self.snapshot.is_some() {
            self.redraw_chart();
        }
    }

    fn redraw_chart(&mut self) {
        if self.chart_drawn {
            self.view.destroy_chart();
            self.chart_drawn = false;
        }

        let Some(snapshot) = &self.snapshot else {
            return;
        };

        match ChartData::from_snapshot(snapshot) {
            Some(chart) => {
                self.view.draw_chart(&chart);
                self.chart_drawn = true;
            }
            None => error!("no price data for {}", self.current_symbol),
        }
    }

    /// Releases the chart and hands the view back.
    pub fn teardown(mut self) -> V {
        if self.chart_drawn {
            self.view.destroy_chart();
        }
        self.view
    }

    pub fn state(&self) -> DisplayState {
        self.state
    }

    pub fn current_symbol(&self) -> &str {
        &self.current_symbol
    }

    pub fn range(&self) -> ChartRange {
        self.range
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn has_chart(&self) -> bool {
        self.chart_drawn
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

pub fn error_message(symbol: &str) -> String {
    format!("Could not load data for {}. Check the symbol.", symbol)
}
