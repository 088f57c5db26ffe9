use gloo_net::http::Request;
use stock_lookup::api::decode_response;
use stock_lookup::constants::GET_STOCK_PATH;
use stock_lookup::{ApiError, Query, StockApi, StockResponse};
use web_sys::UrlSearchParams;

/// Posts the lookup form to the page's own origin.
#[derive(Debug, Clone)]
pub struct FetchStockApi {
    endpoint: String,
}

impl Default for FetchStockApi {
    fn default() -> Self {
        Self {
            endpoint: GET_STOCK_PATH.to_string(),
        }
    }
}

impl StockApi for FetchStockApi {
    async fn fetch_stock(&self, query: &Query) -> Result<StockResponse, ApiError> {
        let params = UrlSearchParams::new()
            .map_err(|err| ApiError::Transport(format!("{err:?}")))?;
        for (name, value) in query.form_fields() {
            params.append(name, value);
        }

        let response = Request::post(&self.endpoint)
            .body(params)
            .map_err(|err| ApiError::Transport(err.to_string()))?
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        decode_response(&body)
    }
}
