use log::debug;
use reqwest::Url;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use serde_json::value::RawValue;
use std::error::Error;
use std::fmt;
use std::time::Duration;

pub const YAHOO_BASE_API_URL: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const CHART_INTERVAL: &str = "1d";
const CHART_RANGE: &str = "1mo";
const NO_DATA: &str = "No data found";
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

#[derive(Debug, Deserialize)]
struct ChartJSON {
    chart: ChartBodyJSON,
}

#[derive(Debug, Deserialize)]
struct ChartBodyJSON {
    #[serde(default)]
    result: Option<Vec<Box<RawValue>>>,
    #[serde(default)]
    error: Option<ChartErrorJSON>,
}

#[derive(Debug, Deserialize)]
struct ChartErrorJSON {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    description: String,
}

pub struct YahooAPI {
    base_url: Url,
    client: reqwest::Client,
}

impl YahooAPI {
    pub fn new(base_url: &str) -> Result<Self, ChartError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ChartError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ChartError::Transport(format!("{}: {}", e, base_url)))?;

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(YahooAPI { base_url, client })
    }

    /// Fetches one month of daily bars for `symbol` and returns the first
    /// result record untouched.
    pub async fn get_chart(&self, symbol: &str) -> Result<Box<RawValue>, ChartError> {
        let url = self.chart_url(symbol)?;

        debug!("get_chart | url: {}", url);

        let body = self.client.get(url).send().await?.text().await?;

        parse_chart(&body)
    }

    fn chart_url(&self, symbol: &str) -> Result<Url, ChartError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ChartError::Transport(format!("cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(&["v8", "finance", "chart", symbol]);
        url.query_pairs_mut()
            .append_pair("interval", CHART_INTERVAL)
            .append_pair("range", CHART_RANGE);
        Ok(url)
    }
}

// the service answers unknown symbols with a non-2xx status and an error
// object in the body, so the status code is not consulted
fn parse_chart(body: &str) -> Result<Box<RawValue>, ChartError> {
    let json: ChartJSON = serde_json::from_str(body)?;

    if let Some(error) = json.chart.error {
        debug!(
            "parse_chart | upstream error | code: {:?} | description: {}",
            error.code, error.description
        );
        return Err(ChartError::Upstream(error.description));
    }

    json.chart
        .result
        .and_then(|result| result.into_iter().next())
        .ok_or_else(|| ChartError::Upstream(NO_DATA.to_string()))
}

#[derive(Debug)]
pub enum ChartError {
    Timeout,
    Transport(String),
    Upstream(String),
    Parse(String),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChartError::Timeout => write!(f, "Timeout"),
            ChartError::Transport(e) => write!(f, "{}", e),
            ChartError::Upstream(e) => write!(f, "{}", e),
            ChartError::Parse(e) => write!(f, "{}", e),
        }
    }
}

impl Error for ChartError {}

impl From<reqwest::Error> for ChartError {
    fn from(err: reqwest::Error) -> ChartError {
        if err.is_timeout() {
            return ChartError::Timeout;
        }
        ChartError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> ChartError {
        ChartError::Parse(err.to_string())
    }
}
