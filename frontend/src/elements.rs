//! Element ids the page markup must provide.

pub const TICKER: &str = "ticker";
pub const PERIOD: &str = "period";
pub const LOADING: &str = "loading";
pub const ERROR_MESSAGE: &str = "error-message";
pub const STOCK_INFO: &str = "stock-info";
pub const CHART_CONTAINER: &str = "chart-container";
pub const CURRENT_PRICE: &str = "current-price";
pub const PERIOD_HIGH: &str = "period-high";
pub const PERIOD_LOW: &str = "period-low";
pub const STOCK_CHART: &str = "stock-chart";

/// Optional explicit trigger; the Enter binding works without it.
pub const LOOKUP_BUTTON: &str = "lookup-button";

/// Class whose presence hides a panel.
pub const HIDDEN_CLASS: &str = "hidden";

pub const REQUIRED: [&str; 10] = [
    TICKER,
    PERIOD,
    LOADING,
    ERROR_MESSAGE,
    STOCK_INFO,
    CHART_CONTAINER,
    CURRENT_PRICE,
    PERIOD_HIGH,
    PERIOD_LOW,
    STOCK_CHART,
];

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = include_str!("../index.html");

    #[test]
    fn page_markup_provides_every_element() {
        for id in REQUIRED.iter().chain([&LOOKUP_BUTTON]) {
            assert!(
                PAGE.contains(&format!("id=\"{id}\"")),
                "index.html is missing #{id}"
            );
        }
    }

    #[test]
    fn period_options_match_server_identifiers() {
        for period in stock_lookup::Period::ALL {
            assert!(
                PAGE.contains(&format!("value=\"{}\"", period.as_str())),
                "index.html is missing period {period}"
            );
        }
    }
}
