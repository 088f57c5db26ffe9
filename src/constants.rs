pub const GET_STOCK_PATH: &str = "/get_stock";
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
pub const CHART_MIME_PREFIX: &str = "data:image/png;base64,";
pub const EMPTY_TICKER_MESSAGE: &str = "Please enter a stock ticker";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch stock data. Please try again.";
