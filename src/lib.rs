//! Stock lookup client: posts a ticker and period to `/get_stock` and renders
//! the returned price summary and chart through a [`view::StockView`].
pub mod api;
pub mod constants;
pub mod controller;
pub mod format;
pub mod model;
#[cfg(test)]
mod testkit;
pub mod view;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
#[cfg(not(target_arch = "wasm32"))]
pub mod lookup;

pub use api::{ApiError, StockApi};
pub use controller::{is_submit_key, PendingRequest, StockLookupController, SubmitOutcome};
pub use format::{chart_data_uri, format_currency, PriceSummary};
pub use model::{Period, Query, StockInfo, StockResponse};
pub use view::StockView;
