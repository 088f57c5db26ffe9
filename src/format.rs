use crate::constants::CHART_MIME_PREFIX;
use crate::model::StockInfo;

/// Display strings for the result panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceSummary {
    pub current_price: String,
    pub high: String,
    pub low: String,
}

impl From<&StockInfo> for PriceSummary {
    fn from(info: &StockInfo) -> Self {
        PriceSummary {
            current_price: format_currency(info.current_price),
            high: format_currency(info.high),
            low: format_currency(info.low),
        }
    }
}

/// Format a price as `$` followed by exactly two decimals.
///
/// Rounding happens on `value * 100` as an `f64`, halves away from zero.
/// `172.345` scales to exactly `17234.5` and becomes `$172.35`, while
/// `1.005` scales to just below `100.5` and becomes `$1.00`. The sign follows
/// the `$`, as in `$-1.50`.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("${value}");
    }
    let rounded = (value * 100.0).round() / 100.0;
    format!("${rounded:.2}")
}

/// Image source for the chart element.
pub fn chart_data_uri(plot_data: &str) -> String {
    format!("{CHART_MIME_PREFIX}{plot_data}")
}
