use itertools::izip;
use serde::{Deserialize, Serialize};

/// One upstream chart result record: metadata plus a daily bar series.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Snapshot {
    pub meta: Meta,
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Meta {
    pub symbol: Option<String>,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub currency: Option<String>,
    pub exchange_name: Option<String>,
    pub instrument_type: Option<String>,
    pub regular_market_price: Option<f64>,
    pub previous_close: Option<f64>,
    pub chart_previous_close: Option<f64>,
    pub regular_market_open: Option<f64>,
    pub regular_market_day_high: Option<f64>,
    pub regular_market_day_low: Option<f64>,
    pub regular_market_volume: Option<f64>,
    pub market_cap: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Indicators {
    pub quote: Vec<QuoteSeries>,
}

/// Per-bar values, index-aligned with `Snapshot::timestamp`. `None` marks a
/// non-trading bar.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteSeries {
    pub open: Vec<Option<f64>>,
    pub high: Vec<Option<f64>>,
    pub low: Vec<Option<f64>>,
    pub close: Vec<Option<f64>>,
    pub volume: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: i64,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
}

impl Snapshot {
    pub fn from_json(json: &str) -> Result<Snapshot, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn quote(&self) -> Option<&QuoteSeries> {
        self.indicators.quote.first()
    }

    /// Zips timestamps with the first quote series. Stops at the shortest
    /// sequence.
    pub fn bars(&self) -> Vec<Bar> {
        let Some(quote) = self.quote() else {
            return vec![];
        };

        izip!(
            &self.timestamp,
            &quote.open,
            &quote.high,
            &quote.low,
            &quote.close,
            &quote.volume
        )
        .map(|(t, o, h, l, c, v)| Bar {
            timestamp: *t,
            open: *o,
            high: *h,
            low: *l,
            close: *c,
            volume: *v,
        })
        .collect()
    }

    /// `(timestamp, close)` for every index with a non-null close.
    pub fn valid_closes(&self) -> Vec<(i64, f64)> {
        let Some(quote) = self.quote() else {
            return vec![];
        };

        self.timestamp
            .iter()
            .zip(&quote.close)
            .filter_map(|(t, c)| c.map(|close| (*t, close)))
            .collect()
    }
}
