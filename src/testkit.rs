//! In-memory collaborators for exercising the controller without a
//! rendering surface or a server.
use std::cell::RefCell;
use std::collections::VecDeque;

use crate::api::{ApiError, StockApi};
use crate::format::PriceSummary;
use crate::model::{Query, StockResponse};
use crate::view::StockView;

/// One setter call observed by [`RecordingView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Loading(bool),
    Error(Option<String>),
    Result(Option<PriceSummary>),
    Chart(Option<String>),
}

/// View keeping the panel state plus the ordered list of setter calls.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    pub ticker: String,
    pub period: String,
    pub loading: bool,
    pub error: Option<String>,
    pub result: Option<PriceSummary>,
    pub chart: Option<String>,
    pub events: Vec<ViewEvent>,
}

impl RecordingView {
    pub fn new(ticker: &str, period: &str) -> Self {
        Self {
            ticker: ticker.to_string(),
            period: period.to_string(),
            ..Self::default()
        }
    }
}

impl StockView for RecordingView {
    fn ticker_value(&self) -> String {
        self.ticker.clone()
    }

    fn period_value(&self) -> String {
        self.period.clone()
    }

    fn set_loading(&mut self, visible: bool) {
        self.loading = visible;
        self.events.push(ViewEvent::Loading(visible));
    }

    fn set_error(&mut self, message: Option<&str>) {
        self.error = message.map(str::to_string);
        self.events.push(ViewEvent::Error(self.error.clone()));
    }

    fn set_result(&mut self, summary: Option<&PriceSummary>) {
        self.result = summary.cloned();
        self.events.push(ViewEvent::Result(self.result.clone()));
    }

    fn set_chart_source(&mut self, source: Option<&str>) {
        self.chart = source.map(str::to_string);
        self.events.push(ViewEvent::Chart(self.chart.clone()));
    }
}

/// API answering from a fixed script and remembering every query.
#[derive(Debug, Default)]
pub struct ScriptedApi {
    responses: RefCell<VecDeque<Result<StockResponse, ApiError>>>,
    requests: RefCell<Vec<Query>>,
}

impl ScriptedApi {
    pub fn new(responses: Vec<Result<StockResponse, ApiError>>) -> Self {
        Self {
            responses: RefCell::new(responses.into()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Query> {
        self.requests.borrow().clone()
    }
}

impl StockApi for ScriptedApi {
    async fn fetch_stock(&self, query: &Query) -> Result<StockResponse, ApiError> {
        self.requests.borrow_mut().push(query.clone());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response left".into())))
    }
}
