//! Submission hook reachable from inline page handlers.
use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::wasm_bindgen;

type Trigger = Rc<dyn Fn()>;

thread_local! {
    static TRIGGER: RefCell<Option<Trigger>> = const { RefCell::new(None) };
}

/// Replace the action run by [`get_stock_data`].
pub fn install(trigger: impl Fn() + 'static) {
    TRIGGER.with(|slot| *slot.borrow_mut() = Some(Rc::new(trigger)));
}

/// Run the installed action; `false` before the page has started.
pub fn fire() -> bool {
    let trigger = TRIGGER.with(|slot| slot.borrow().clone());
    match trigger {
        Some(trigger) => {
            trigger();
            true
        }
        None => false,
    }
}

/// Submit the lookup form, as the button and the Enter key do.
///
/// Exported as `getStockData`; a trunk build exposes it as
/// `window.wasmBindings.getStockData()`.
#[wasm_bindgen(js_name = getStockData)]
pub fn get_stock_data() {
    if !fire() {
        log::warn!("getStockData called before the page finished loading");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn nothing_runs_before_install() {
        assert!(!fire());
    }

    #[test]
    fn installed_trigger_runs_on_every_call() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        install(move || counter.set(counter.get() + 1));

        get_stock_data();
        assert!(fire());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn later_install_replaces_the_trigger() {
        let calls = Rc::new(Cell::new((0, 0)));
        let first = calls.clone();
        install(move || first.set((first.get().0 + 1, first.get().1)));
        let second = calls.clone();
        install(move || second.set((second.get().0, second.get().1 + 1)));

        fire();
        assert_eq!(calls.get(), (0, 1));
    }
}
