//! Display logic for the quote dashboard: turns one chart snapshot into the
//! summary panel and the line-chart dataset, and sequences symbol loads.

pub mod chart;
pub mod controller;
pub mod format;
pub mod info;
pub mod response;
pub mod view_model;

pub use chart::{ChartData, ChartRange, Trend};
pub use controller::{DashboardController, DashboardView, DisplayState, LoadTicket};
pub use info::InfoPanel;
pub use response::{LoadError, decode_proxy_response};
pub use view_model::DashboardViewModel;
