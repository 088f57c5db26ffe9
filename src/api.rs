use std::future::Future;

use thiserror::Error;

use crate::model::{Query, StockResponse};

/// Failures that never produced a usable response body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request was rejected before a body arrived.
    #[error("request failed: {0}")]
    Transport(String),

    /// A body arrived but is not a stock response.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// One POST of the lookup form to `/get_stock`.
pub trait StockApi {
    fn fetch_stock(
        &self,
        query: &Query,
    ) -> impl Future<Output = Result<StockResponse, ApiError>>;
}

/// Decode a response body regardless of the HTTP status it came with.
pub fn decode_response(body: &str) -> Result<StockResponse, ApiError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(not(target_arch = "wasm32"))]
pub use http::HttpStockApi;

#[cfg(not(target_arch = "wasm32"))]
mod http {
    use reqwest::Client;

    use super::{decode_response, ApiError, StockApi};
    use crate::constants::GET_STOCK_PATH;
    use crate::model::{Query, StockResponse};

    /// Native transport posting to `<base_url>/get_stock`.
    #[derive(Debug, Clone)]
    pub struct HttpStockApi {
        client: Client,
        endpoint: String,
    }

    impl HttpStockApi {
        pub fn new(base_url: &str) -> Self {
            Self::with_client(Client::new(), base_url)
        }

        pub fn with_client(client: Client, base_url: &str) -> Self {
            let endpoint = format!("{}{GET_STOCK_PATH}", base_url.trim_end_matches('/'));
            Self { client, endpoint }
        }

        pub fn endpoint(&self) -> &str {
            &self.endpoint
        }
    }

    impl StockApi for HttpStockApi {
        async fn fetch_stock(&self, query: &Query) -> Result<StockResponse, ApiError> {
            log::debug!(target: "lookup.http", "POST {} ticker={} period={}", self.endpoint, query.ticker, query.period);

            let response = self
                .client
                .post(&self.endpoint)
                .form(&query.form_fields()[..])
                .send()
                .await
                .map_err(|err| ApiError::Transport(err.to_string()))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|err| ApiError::Transport(err.to_string()))?;
            if !status.is_success() {
                log::warn!(target: "lookup.http", "server answered {status}; decoding body anyway");
            }

            decode_response(&body)
        }
    }

}
