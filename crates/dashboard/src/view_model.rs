use crate::chart::ChartData;
use crate::info::InfoPanel;
use chart_model::Snapshot;
use serde::Serialize;

/// Everything the page needs to paint one loaded symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardViewModel {
    pub info: InfoPanel,
    pub chart: Option<ChartData>,
}

impl DashboardViewModel {
    pub fn from_snapshot(snapshot: &Snapshot, requested_symbol: &str) -> DashboardViewModel {
        DashboardViewModel {
            info: InfoPanel::from_snapshot(snapshot, requested_symbol),
            chart: ChartData::from_snapshot(snapshot),
        }
    }
}
