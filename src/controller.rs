use crate::api::{ApiError, StockApi};
use crate::constants::{EMPTY_TICKER_MESSAGE, FETCH_FAILED_MESSAGE};
use crate::format::{chart_data_uri, PriceSummary};
use crate::model::{Query, StockInfo, StockResponse};
use crate::view::StockView;

const SUBMIT_KEY: &str = "Enter";

/// Whether a key pressed in the ticker field submits the form.
pub fn is_submit_key(key: &str) -> bool {
    key == SUBMIT_KEY
}

/// How a single submission ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Empty ticker; nothing was sent.
    Rejected,
    Displayed(StockInfo),
    /// The server answered with an `error` payload.
    ServerError(String),
    TransportFailed,
    /// A newer submission was issued before this one resolved.
    Superseded,
}

/// A validated submission waiting for its response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    token: u64,
    query: Query,
}

impl PendingRequest {
    pub fn token(&self) -> u64 {
        self.token
    }

    pub fn query(&self) -> &Query {
        &self.query
    }
}

/// Drives a [`StockView`] through one lookup per submission.
///
/// Submitting is split in two so an event-loop binding can release the
/// controller while the request is in flight: [`begin`](Self::begin) runs
/// synchronously up to the request and [`complete`](Self::complete) applies
/// the response. Only the most recent submission may write to the view.
pub struct StockLookupController<V, A> {
    view: V,
    api: A,
    latest_token: u64,
}

impl<V, A> StockLookupController<V, A> {
    pub fn new(view: V, api: A) -> Self {
        Self {
            view,
            api,
            latest_token: 0,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn into_parts(self) -> (V, A) {
        (self.view, self.api)
    }
}

impl<V: StockView, A> StockLookupController<V, A> {
    /// Validate the input fields and reset the panels for a new request.
    ///
    /// Returns `None` when the ticker is empty; the validation message is
    /// shown and the other panels are left as they were.
    pub fn begin(&mut self) -> Option<PendingRequest> {
        let ticker = self.view.ticker_value();
        let period = self.view.period_value();

        if ticker.is_empty() {
            self.show_error(EMPTY_TICKER_MESSAGE);
            return None;
        }

        self.view.set_loading(true);
        self.view.set_error(None);
        self.view.set_result(None);
        self.view.set_chart_source(None);

        self.latest_token += 1;
        log::debug!(target: "lookup.controller", "request {} for {} ({})", self.latest_token, ticker, period);
        Some(PendingRequest {
            token: self.latest_token,
            query: Query { ticker, period },
        })
    }

    /// Apply the result of the request started by `pending`.
    pub fn complete(
        &mut self,
        pending: &PendingRequest,
        result: Result<StockResponse, ApiError>,
    ) -> SubmitOutcome {
        if pending.token != self.latest_token {
            log::debug!(
                target: "lookup.controller",
                "discarding response {} superseded by {}",
                pending.token,
                self.latest_token
            );
            return SubmitOutcome::Superseded;
        }

        self.view.set_loading(false);

        match result {
            Ok(StockResponse::Failure { error }) => {
                self.show_error(&error);
                SubmitOutcome::ServerError(error)
            }
            Ok(StockResponse::Success {
                stock_info,
                plot_data,
            }) => {
                let summary = PriceSummary::from(&stock_info);
                self.view.set_result(Some(&summary));
                self.view.set_chart_source(Some(&chart_data_uri(&plot_data)));
                SubmitOutcome::Displayed(stock_info)
            }
            Err(err) => {
                log::error!(target: "lookup.controller", "stock lookup failed: {err}");
                self.show_error(FETCH_FAILED_MESSAGE);
                SubmitOutcome::TransportFailed
            }
        }
    }

    pub fn show_error(&mut self, message: &str) {
        self.view.set_error(Some(message));
    }
}

impl<V: StockView, A: StockApi> StockLookupController<V, A> {
    /// Read the input fields, post them and render the response.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let Some(pending) = self.begin() else {
            return SubmitOutcome::Rejected;
        };
        let result = self.api.fetch_stock(&pending.query).await;
        self.complete(&pending, result)
    }

    /// Key press in the ticker field. Returns `None` for keys that do nothing.
    pub async fn handle_key(&mut self, key: &str) -> Option<SubmitOutcome> {
        if is_submit_key(key) {
            Some(self.submit().await)
        } else {
            None
        }
    }
}
