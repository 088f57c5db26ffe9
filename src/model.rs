use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// History window understood by the `/get_stock` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "5d")]
    FiveDays,
    #[default]
    #[serde(rename = "1mo")]
    OneMonth,
    #[serde(rename = "3mo")]
    ThreeMonths,
    #[serde(rename = "6mo")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
}

impl Period {
    pub const ALL: [Period; 6] = [
        Period::OneDay,
        Period::FiveDays,
        Period::OneMonth,
        Period::ThreeMonths,
        Period::SixMonths,
        Period::OneYear,
    ];

    /// Identifier sent in the `period` form field.
    pub fn as_str(self) -> &'static str {
        match self {
            Period::OneDay => "1d",
            Period::FiveDays => "5d",
            Period::OneMonth => "1mo",
            Period::ThreeMonths => "3mo",
            Period::SixMonths => "6mo",
            Period::OneYear => "1y",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Period::OneDay => "1 Day",
            Period::FiveDays => "5 Days",
            Period::OneMonth => "1 Month",
            Period::ThreeMonths => "3 Months",
            Period::SixMonths => "6 Months",
            Period::OneYear => "1 Year",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown period {0:?}")]
pub struct UnknownPeriod(pub String);

impl FromStr for Period {
    type Err = UnknownPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|period| period.as_str() == s)
            .ok_or_else(|| UnknownPeriod(s.to_string()))
    }
}

/// One lookup request as read from the input fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    pub ticker: String,
    pub period: String,
}

impl Query {
    pub fn new(ticker: impl Into<String>, period: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            period: period.into(),
        }
    }

    /// Form fields in the order they are posted.
    pub fn form_fields(&self) -> [(&'static str, &str); 2] {
        [("ticker", self.ticker.as_str()), ("period", self.period.as_str())]
    }
}

/// Descriptive statistics for the queried period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockInfo {
    pub current_price: f64,
    pub high: f64,
    pub low: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
}

/// Body returned by `/get_stock`.
///
/// A non-empty `error` decodes as [`StockResponse::Failure`], even when
/// success fields are present as well. An empty or null `error` is ignored,
/// so the payload must then carry both success fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawResponse")]
pub enum StockResponse {
    Failure {
        error: String,
    },
    Success {
        stock_info: StockInfo,
        plot_data: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("response carries neither an error message nor stock data")]
pub struct MalformedResponse;

#[derive(Deserialize)]
struct RawResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    stock_info: Option<StockInfo>,
    #[serde(default)]
    plot_data: Option<String>,
}

impl TryFrom<RawResponse> for StockResponse {
    type Error = MalformedResponse;

    fn try_from(raw: RawResponse) -> Result<Self, Self::Error> {
        match raw {
            RawResponse {
                error: Some(error), ..
            } if !error.is_empty() => Ok(StockResponse::Failure { error }),
            RawResponse {
                stock_info: Some(stock_info),
                plot_data: Some(plot_data),
                ..
            } => Ok(StockResponse::Success {
                stock_info,
                plot_data,
            }),
            _ => Err(MalformedResponse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_deserializes_from_sample() {
        let json = r#"{
            "stock_info": {
                "current_price": 172.345,
                "high": 180.0,
                "low": 165.5,
                "period": "1mo"
            },
            "plot_data": "iVBORw0KGgo="
        }"#;

        let response: StockResponse = serde_json::from_str(json).expect("valid response");
        let StockResponse::Success {
            stock_info,
            plot_data,
        } = response
        else {
            panic!("expected success payload");
        };
        assert_eq!(stock_info.current_price, 172.345);
        assert_eq!(stock_info.period.as_deref(), Some("1mo"));
        assert_eq!(plot_data, "iVBORw0KGgo=");
    }

    #[test]
    fn error_key_wins_over_success_fields() {
        let json = r#"{
            "error": "Unable to fetch data for ZZZZ",
            "stock_info": { "current_price": 1.0, "high": 1.0, "low": 1.0 },
            "plot_data": ""
        }"#;

        let response: StockResponse = serde_json::from_str(json).expect("valid response");
        assert_eq!(
            response,
            StockResponse::Failure {
                error: "Unable to fetch data for ZZZZ".into()
            }
        );
    }

    #[test]
    fn unrelated_payload_is_rejected() {
        let result = serde_json::from_str::<StockResponse>(r#"{"status":"ok"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_error_falls_through_to_success_fields() {
        let json = r#"{
            "error": "",
            "stock_info": { "current_price": 2.0, "high": 3.0, "low": 1.0 },
            "plot_data": "AAAA"
        }"#;

        let response: StockResponse = serde_json::from_str(json).expect("valid response");
        assert!(matches!(response, StockResponse::Success { .. }));
    }

    #[test]
    fn empty_error_without_stock_data_is_malformed() {
        for json in [r#"{"error":""}"#, r#"{"error":null}"#] {
            let result = serde_json::from_str::<StockResponse>(json);
            assert!(result.is_err(), "{json} should not decode");
        }
    }

    #[test]
    fn period_identifiers_round_trip_through_from_str() {
        for period in Period::ALL {
            assert_eq!(period.as_str().parse::<Period>(), Ok(period));
        }
        assert_eq!(
            "2y".parse::<Period>(),
            Err(UnknownPeriod("2y".to_string()))
        );
    }

    #[test]
    fn query_keeps_ticker_verbatim() {
        let query = Query::new(" aapl", Period::OneYear.as_str());
        assert_eq!(query.form_fields(), [("ticker", " aapl"), ("period", "1y")]);
    }
}
