use chart_model::Snapshot;
use chrono::DateTime;
use serde::Serialize;
use std::fmt;

const POSITIVE_LINE: &str = "#4caf50";
const NEGATIVE_LINE: &str = "#f44336";
const POSITIVE_FILL: &str = "rgba(76, 175, 80, 0.2)";
const NEGATIVE_FILL: &str = "rgba(244, 67, 54, 0.2)";
const LABEL_FORMAT: &str = "%b %-d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Positive,
    Negative,
}

impl Trend {
    /// Zero counts as positive.
    pub fn from_delta(delta: f64) -> Trend {
        if delta >= 0.0 {
            Trend::Positive
        } else {
            Trend::Negative
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Trend::Positive => "positive",
            Trend::Negative => "negative",
        }
    }

    pub fn line_color(&self) -> &'static str {
        match self {
            Trend::Positive => POSITIVE_LINE,
            Trend::Negative => NEGATIVE_LINE,
        }
    }

    pub fn fill_color(&self) -> &'static str {
        match self {
            Trend::Positive => POSITIVE_FILL,
            Trend::Negative => NEGATIVE_FILL,
        }
    }
}

/// Line-chart dataset: one label per plotted close.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub labels: Vec<String>,
    pub closes: Vec<f64>,
    pub trend: Trend,
    pub line_color: &'static str,
    pub fill_color: &'static str,
}

impl ChartData {
    /// Returns `None` when the snapshot has no non-null close.
    pub fn from_snapshot(snapshot: &Snapshot) -> Option<ChartData> {
        let points = snapshot.valid_closes();
        let first = points.first()?.1;
        let last = points.last()?.1;
        let trend = Trend::from_delta(last - first);

        let (labels, closes) = points
            .into_iter()
            .map(|(timestamp, close)| (date_label(timestamp), close))
            .unzip();

        Some(ChartData {
            labels,
            closes,
            trend,
            line_color: trend.line_color(),
            fill_color: trend.fill_color(),
        })
    }
}

/// Short month/day label for an epoch-seconds timestamp, in UTC.
pub fn date_label(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .unwrap_or_default()
        .format(LABEL_FORMAT)
        .to_string()
}

/// Range selector buttons. Every range plots the full fetched month.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChartRange {
    #[serde(rename = "5d")]
    FiveDays,
    #[default]
    #[serde(rename = "1mo")]
    OneMonth,
    #[serde(rename = "3mo")]
    ThreeMonths,
    #[serde(rename = "1y")]
    OneYear,
}

impl ChartRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartRange::FiveDays => "5d",
            ChartRange::OneMonth => "1mo",
            ChartRange::ThreeMonths => "3mo",
            ChartRange::OneYear => "1y",
        }
    }
}

impl fmt::Display for ChartRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
