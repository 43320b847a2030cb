use crate::chart::Trend;
use crate::format::{fixed2, format_market_cap, format_number, format_price, present};
use chart_model::Snapshot;
use serde::Serialize;

/// Summary panel shown above the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoPanel {
    pub company_name: String,
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub trend: Trend,
    pub current_price: String,
    pub change_text: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub volume: String,
    pub market_cap: String,
    pub week52: Option<String>,
}

impl InfoPanel {
    pub fn from_snapshot(snapshot: &Snapshot, requested_symbol: &str) -> InfoPanel {
        let meta = &snapshot.meta;
        let currency = meta.currency.as_deref();

        let price = meta.regular_market_price.unwrap_or(0.0);
        let reference = present(meta.previous_close)
            .or(present(meta.chart_previous_close))
            .unwrap_or(price);
        let change = price - reference;
        let change_percent = match present(Some(reference)) {
            Some(reference) => change / reference * 100.0,
            None => 0.0,
        };
        let trend = Trend::from_delta(change);
        let sign = match trend {
            Trend::Positive => "+",
            Trend::Negative => "",
        };

        // intraday values of the latest bar win over the session metadata
        let latest = snapshot.bars().last().copied();
        let open = present(latest.and_then(|bar| bar.open)).or(meta.regular_market_open);
        let high = present(latest.and_then(|bar| bar.high)).or(meta.regular_market_day_high);
        let low = present(latest.and_then(|bar| bar.low)).or(meta.regular_market_day_low);

        let week52 = match (present(meta.fifty_two_week_low), present(meta.fifty_two_week_high)) {
            (Some(low), Some(high)) => Some(format!(
                "{} - {}",
                format_price(Some(low), currency),
                format_price(Some(high), currency)
            )),
            _ => None,
        };

        InfoPanel {
            company_name: meta
                .short_name
                .clone()
                .unwrap_or_else(|| requested_symbol.to_string()),
            symbol: meta
                .symbol
                .clone()
                .unwrap_or_else(|| requested_symbol.to_string()),
            price,
            change,
            change_percent,
            trend,
            current_price: format_price(Some(price), currency),
            change_text: format!(
                "{}{} ({}%)",
                sign,
                format_price(Some(change), currency),
                fixed2(change_percent)
            ),
            open: format_price(open, currency),
            high: format_price(high, currency),
            low: format_price(low, currency),
            volume: format_number(meta.regular_market_volume),
            market_cap: format_market_cap(meta.market_cap),
            week52,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_model::{Indicators, Meta, QuoteSeries};

    fn meta(price: Option<f64>, previous_close: Option<f64>) -> Meta {
        Meta {
            currency: Some("USD".to_string()),
            regular_market_price: price,
            previous_close,
            ..Default::default()
        }
    }

    #[test]
    fn from_snapshot_pass_positive_change() {
        let snapshot = Snapshot {
            meta: meta(Some(105.0), Some(100.0)),
            ..Default::default()
        };

        let info = InfoPanel::from_snapshot(&snapshot, "AAPL");

        assert_eq!(info.change, 5.0);
        assert_eq!(format!("{:.2}", info.change_percent), "5.00");
        assert_eq!(info.change_text, "+$5.00 (5.00%)");
        assert_eq!(info.trend.css_class(), "positive");
        assert_eq!(info.current_price, "$105.00");
    }

    #[test]
    fn from_snapshot_pass_negative_change() {
        let snapshot = Snapshot {
            meta: meta(Some(95.0), Some(100.0)),
            ..Default::default()
        };

        let info = InfoPanel::from_snapshot(&snapshot, "AAPL");

        assert_eq!(info.change_text, "$-5.00 (-5.00%)");
        assert_eq!(info.trend, Trend::Negative);
    }

    #[test]
    fn from_snapshot_pass_chart_previous_close_fallback() {
        let mut data = meta(Some(110.0), None);
        data.chart_previous_close = Some(100.0);
        let snapshot = Snapshot {
            meta: data,
            ..Default::default()
        };

        let info = InfoPanel::from_snapshot(&snapshot, "AAPL");

        assert_eq!(info.change_text, "+$10.00 (10.00%)");
    }

    #[test]
    fn from_snapshot_pass_no_reference_is_zero_change() {
        let snapshot = Snapshot {
            meta: meta(Some(42.0), None),
            ..Default::default()
        };

        let info = InfoPanel::from_snapshot(&snapshot, "AAPL");

        assert_eq!(info.change, 0.0);
        assert_eq!(info.change_percent, 0.0);
        assert_eq!(info.change_text, "+$0.00 (0.00%)");
        assert_eq!(info.trend, Trend::Positive);
    }

    #[test]
    fn from_snapshot_pass_empty_meta() {
        let info = InfoPanel::from_snapshot(&Snapshot::default(), "BYDDF");

        assert_eq!(info.company_name, "BYDDF");
        assert_eq!(info.symbol, "BYDDF");
        assert_eq!(info.current_price, "$0.00");
        assert_eq!(info.change_percent, 0.0);
        assert_eq!(info.open, "-");
        assert_eq!(info.volume, "-");
        assert_eq!(info.market_cap, "-");
        assert_eq!(info.week52, None);
    }

    #[test]
    fn from_snapshot_pass_latest_bar_wins() {
        let mut data = meta(Some(12.0), Some(11.0));
        data.regular_market_open = Some(1.0);
        data.regular_market_day_high = Some(2.0);
        data.regular_market_day_low = Some(0.5);
        let snapshot = Snapshot {
            meta: data,
            timestamp: vec![1, 2],
            indicators: Indicators {
                quote: vec![QuoteSeries {
                    open: vec![Some(10.0), Some(11.5)],
                    high: vec![Some(10.5), None],
                    low: vec![Some(9.5), Some(11.2)],
                    close: vec![Some(10.2), Some(12.0)],
                    volume: vec![Some(900.0), Some(1200.0)],
                }],
            },
        };

        let info = InfoPanel::from_snapshot(&snapshot, "AAPL");

        assert_eq!(info.open, "$11.50");
        assert_eq!(info.high, "$2.00");
        assert_eq!(info.low, "$11.20");
    }

    #[test]
    fn from_snapshot_pass_zero_session_values_are_prices() {
        let mut data = meta(Some(105.125), Some(100.0));
        data.regular_market_open = Some(0.0);
        data.regular_market_day_high = Some(0.0);
        let snapshot = Snapshot {
            meta: data,
            ..Default::default()
        };

        let info = InfoPanel::from_snapshot(&snapshot, "AAPL");

        assert_eq!(info.open, "$0.00");
        assert_eq!(info.high, "$0.00");
        assert_eq!(info.low, "-");
    }

    #[test]
    fn from_snapshot_pass_half_cent_rounds_up() {
        let snapshot = Snapshot {
            meta: meta(Some(105.125), Some(100.0)),
            ..Default::default()
        };

        let info = InfoPanel::from_snapshot(&snapshot, "AAPL");

        assert_eq!(info.current_price, "$105.13");
        assert!(info.change_text.starts_with("+$5.13 ("));
    }

    #[test]
    fn from_snapshot_pass_names_and_abbreviations() {
        let snapshot = Snapshot {
            meta: Meta {
                symbol: Some("BYDDF".to_string()),
                short_name: Some("BYD COMPANY LTD".to_string()),
                currency: Some("EUR".to_string()),
                regular_market_price: Some(30.0),
                regular_market_volume: Some(12_500_000.0),
                market_cap: Some(98_760_000_000.0),
                fifty_two_week_low: Some(20.0),
                fifty_two_week_high: Some(40.0),
                ..Default::default()
            },
            ..Default::default()
        };

        let info = InfoPanel::from_snapshot(&snapshot, "byddf");

        assert_eq!(info.company_name, "BYD COMPANY LTD");
        assert_eq!(info.symbol, "BYDDF");
        assert_eq!(info.current_price, "EUR 30.00");
        assert_eq!(info.volume, "12.50M");
        assert_eq!(info.market_cap, "98.76B");
        assert_eq!(info.week52.as_deref(), Some("EUR 20.00 - EUR 40.00"));
    }
}
