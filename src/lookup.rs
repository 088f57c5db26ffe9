use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use base64::prelude::{Engine, BASE64_STANDARD};
use clap::Args;

use crate::api::HttpStockApi;
use crate::constants::{CHART_MIME_PREFIX, DEFAULT_SERVER_URL};
use crate::controller::{StockLookupController, SubmitOutcome};
use crate::format::PriceSummary;
use crate::model::Period;
use crate::view::StockView;

#[derive(Debug, Args, Clone)]
pub struct LookupArgs {
    /// Stock ticker, sent exactly as typed (e.g. AAPL)
    pub ticker: String,

    /// History window for the price statistics
    #[arg(short, long, default_value_t = Period::default())]
    pub period: Period,

    /// Base URL of the server exposing /get_stock
    #[arg(short, long, default_value = DEFAULT_SERVER_URL)]
    pub server: String,

    /// Write the returned chart image to this PNG file
    #[arg(long)]
    pub save_chart: Option<PathBuf>,
}

pub async fn run(args: LookupArgs) -> Result<()> {
    let api = HttpStockApi::new(&args.server);
    let endpoint = api.endpoint().to_string();
    let view = TerminalView::new(&args.ticker, args.period, io::stdout(), io::stderr());
    let mut controller = StockLookupController::new(view, api);

    match controller.submit().await {
        SubmitOutcome::Displayed(_) => {
            if let Some(path) = &args.save_chart {
                let source = controller
                    .view()
                    .chart_source()
                    .context("server response carried no chart")?;
                save_chart(path, source).await?;
                println!("Chart written to {}", path.display());
            }
            Ok(())
        }
        SubmitOutcome::Rejected => bail!("no ticker given"),
        SubmitOutcome::ServerError(message) => bail!("server rejected the lookup: {message}"),
        SubmitOutcome::TransportFailed => bail!("no usable response from {endpoint}"),
        SubmitOutcome::Superseded => bail!("lookup was superseded"),
    }
}

/// Panels rendered as lines: results on `out`, the error panel on `err`.
pub struct TerminalView<O, E> {
    ticker: String,
    period: Period,
    out: O,
    err: E,
    chart_source: Option<String>,
}

impl<O: Write, E: Write> TerminalView<O, E> {
    pub fn new(ticker: &str, period: Period, out: O, err: E) -> Self {
        Self {
            ticker: ticker.to_string(),
            period,
            out,
            err,
            chart_source: None,
        }
    }

    pub fn chart_source(&self) -> Option<&str> {
        self.chart_source.as_deref()
    }

    pub fn into_sinks(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> StockView for TerminalView<O, E> {
    fn ticker_value(&self) -> String {
        self.ticker.clone()
    }

    fn period_value(&self) -> String {
        self.period.as_str().to_string()
    }

    fn set_loading(&mut self, visible: bool) {
        if visible {
            let _ = writeln!(
                self.out,
                "Fetching {} over {}...",
                self.ticker,
                self.period.label()
            );
        }
    }

    fn set_error(&mut self, message: Option<&str>) {
        if let Some(message) = message {
            let _ = writeln!(self.err, "Error: {message}");
        }
    }

    fn set_result(&mut self, summary: Option<&PriceSummary>) {
        if let Some(summary) = summary {
            let _ = writeln!(self.out, "{:<14} {:>12}", "Current price", summary.current_price);
            let _ = writeln!(self.out, "{:<14} {:>12}", "Period high", summary.high);
            let _ = writeln!(self.out, "{:<14} {:>12}", "Period low", summary.low);
        }
    }

    fn set_chart_source(&mut self, source: Option<&str>) {
        self.chart_source = source.map(str::to_string);
    }
}

/// Recover the PNG bytes from a chart data URI.
pub fn decode_chart(source: &str) -> Result<Vec<u8>> {
    let encoded = source
        .strip_prefix(CHART_MIME_PREFIX)
        .context("chart source is not a base64 PNG data URI")?;
    BASE64_STANDARD
        .decode(encoded)
        .context("chart data is not valid base64")
}

async fn save_chart(path: &Path, source: &str) -> Result<()> {
    let bytes = decode_chart(source)?;
    tokio::fs::write(path, bytes)
        .await
        .with_context(|| format!("failed to write chart to {}", path.display()))
}
