use stock_lookup::{PriceSummary, StockView};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement};

use crate::elements::{
    CHART_CONTAINER, CURRENT_PRICE, ERROR_MESSAGE, HIDDEN_CLASS, LOADING, PERIOD, PERIOD_HIGH,
    PERIOD_LOW, STOCK_CHART, STOCK_INFO, TICKER,
};

/// [`StockView`] over the page markup, addressed by element id.
///
/// Elements are looked up on every access; a missing element is logged and
/// the write is skipped.
pub struct DomView {
    document: Document,
}

impl DomView {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn from_window() -> Option<Self> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(Self::new)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn element(&self, id: &str) -> Option<Element> {
        let element = self.document.get_element_by_id(id);
        if element.is_none() {
            log::warn!("page has no #{id} element");
        }
        element
    }

    fn set_hidden(&self, id: &str, hidden: bool) {
        let Some(element) = self.element(id) else {
            return;
        };
        let classes = element.class_list();
        let toggled = if hidden {
            classes.add_1(HIDDEN_CLASS)
        } else {
            classes.remove_1(HIDDEN_CLASS)
        };
        if let Err(err) = toggled {
            log::warn!("failed to toggle visibility of #{id}: {err:?}");
        }
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(element) = self.element(id) {
            element.set_text_content(Some(text));
        }
    }

    fn field_value(&self, id: &str) -> String {
        let Some(element) = self.element(id) else {
            return String::new();
        };
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else {
            log::warn!("#{id} is neither an input nor a select");
            String::new()
        }
    }
}

impl StockView for DomView {
    fn ticker_value(&self) -> String {
        self.field_value(TICKER)
    }

    fn period_value(&self) -> String {
        self.field_value(PERIOD)
    }

    fn set_loading(&mut self, visible: bool) {
        self.set_hidden(LOADING, !visible);
    }

    fn set_error(&mut self, message: Option<&str>) {
        match message {
            Some(message) => {
                self.set_text(ERROR_MESSAGE, message);
                self.set_hidden(ERROR_MESSAGE, false);
            }
            None => self.set_hidden(ERROR_MESSAGE, true),
        }
    }

    fn set_result(&mut self, summary: Option<&PriceSummary>) {
        match summary {
            Some(summary) => {
                self.set_text(CURRENT_PRICE, &summary.current_price);
                self.set_text(PERIOD_HIGH, &summary.high);
                self.set_text(PERIOD_LOW, &summary.low);
                self.set_hidden(STOCK_INFO, false);
            }
            None => self.set_hidden(STOCK_INFO, true),
        }
    }

    fn set_chart_source(&mut self, source: Option<&str>) {
        match source {
            Some(source) => {
                if let Some(chart) = self.element(STOCK_CHART) {
                    if let Err(err) = chart.set_attribute("src", source) {
                        log::warn!("failed to set chart source: {err:?}");
                    }
                }
                self.set_hidden(CHART_CONTAINER, false);
            }
            None => self.set_hidden(CHART_CONTAINER, true),
        }
    }
}
