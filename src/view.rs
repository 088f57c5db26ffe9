use crate::format::PriceSummary;

/// Panel state and input fields of a lookup surface.
///
/// Setters taking an `Option` hide their panel on `None` and write the
/// content before revealing it on `Some`. Every setter is idempotent.
pub trait StockView {
    /// Current value of the ticker input, untrimmed.
    fn ticker_value(&self) -> String;

    /// Current value of the period selector.
    fn period_value(&self) -> String;

    fn set_loading(&mut self, visible: bool);

    fn set_error(&mut self, message: Option<&str>);

    fn set_result(&mut self, summary: Option<&PriceSummary>);

    fn set_chart_source(&mut self, source: Option<&str>);
}
