use wasm_bindgen::prelude::{JsValue, wasm_bindgen};

pub mod elements;
pub mod global;
mod logging;

#[cfg(target_arch = "wasm32")]
mod bind;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod fetch;

#[cfg(target_arch = "wasm32")]
pub use dom::DomView;
#[cfg(target_arch = "wasm32")]
pub use fetch::FetchStockApi;
pub use global::get_stock_data;
pub use logging::init_logging;

/// WASM entry point called automatically by `trunk` once the page loads.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    init_logging();
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    {
        use std::{cell::RefCell, rc::Rc};

        let view = DomView::from_window().ok_or_else(|| JsValue::from_str("no document"))?;
        let controller = stock_lookup::StockLookupController::new(view, FetchStockApi::default());
        bind::attach(Rc::new(RefCell::new(controller)))?;
    }

    Ok(())
}
