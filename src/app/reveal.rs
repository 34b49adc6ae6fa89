use leptos::prelude::*;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::reveal::{RevealController, RevealElement, SCROLL_TARGET_SELECTOR};

impl RevealElement for Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        if let Err(e) = self.class_list().add_1(class) {
            log::warn!("couldn't add class {class}: {e:?}");
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(e) = self.class_list().remove_1(class) {
            log::warn!("couldn't remove class {class}: {e:?}");
        }
    }
}

/// Scans the document for scroll targets and hands the ones nobody watches yet
/// to a new intersection observer. Call again after injecting markup.
pub fn observe_scroll_targets(threshold: f64) {
    let controller = RevealController::new(threshold);
    let targets = match document().query_selector_all(SCROLL_TARGET_SELECTOR) {
        Ok(targets) => targets,
        Err(e) => {
            log::warn!("couldn't query scroll targets: {e:?}");
            return;
        }
    };

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                let target = entry.target();
                let outcome = controller.on_intersection(
                    &target,
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                );
                if outcome.should_unobserve() {
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin("0px");
    options.set_threshold(&JsValue::from_f64(controller.threshold()));
    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("couldn't create intersection observer: {e:?}");
                return;
            }
        };
    // lives for the rest of the page
    callback.forget();

    let mut registered = 0;
    for i in 0..targets.length() {
        let Some(el) = targets.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        if controller.register(&el) {
            observer.observe(&el);
            registered += 1;
        }
    }
    log::debug!("observing {registered} scroll targets");
}
