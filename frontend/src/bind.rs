use std::cell::RefCell;
use std::rc::Rc;

use stock_lookup::{StockApi, StockLookupController, is_submit_key};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::{Closure, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{KeyboardEvent, MouseEvent};

use crate::dom::DomView;
use crate::elements::{LOOKUP_BUTTON, TICKER};
use crate::fetch::FetchStockApi;
use crate::global;

pub type SharedController = Rc<RefCell<StockLookupController<DomView, FetchStockApi>>>;

/// Hook the ticker field, the lookup button and `getStockData` up to `controller`.
pub fn attach(controller: SharedController) -> Result<(), JsValue> {
    let document = controller.borrow().view().document().clone();

    match document.get_element_by_id(TICKER) {
        Some(ticker) => {
            let controller = controller.clone();
            let on_keypress = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                if is_submit_key(&event.key()) {
                    submit(&controller);
                }
            });
            ticker.add_event_listener_with_callback("keypress", on_keypress.as_ref().unchecked_ref())?;
            on_keypress.forget();
        }
        None => log::warn!("page has no #{TICKER} element; Enter will not submit"),
    }

    {
        let controller = controller.clone();
        global::install(move || submit(&controller));
    }

    if let Some(button) = document.get_element_by_id(LOOKUP_BUTTON) {
        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
            submit(&controller);
        });
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    Ok(())
}

/// Start a submission and finish it once the request resolves.
///
/// The controller is only borrowed around `begin` and `complete`, so a
/// second submission can start while the first is still in flight.
pub fn submit(controller: &SharedController) {
    let Some(pending) = controller.borrow_mut().begin() else {
        return;
    };
    let api = controller.borrow().api().clone();
    let controller = controller.clone();

    spawn_local(async move {
        let result = api.fetch_stock(pending.query()).await;
        controller.borrow_mut().complete(&pending, result);
    });
}
