//! Browser implementations of the timer and visibility seams.
//!
//! Only called from effects and event handlers, which never run during
//! server-side rendering.

use std::rc::Rc;
use std::time::Duration;

use leptos::logging::warn;
use leptos::prelude::{IntervalHandle, set_interval_with_handle};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions,
};

use crate::carousel::Ticker;
use crate::reveal::{ObserveOptions, ViewportObserver, Watch};

/// `setInterval` backed ticker.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntervalTicker;

impl Ticker for IntervalTicker {
    type Handle = Option<IntervalHandle>;

    fn start(&self, period: Duration, on_tick: Rc<dyn Fn()>) -> Self::Handle {
        match set_interval_with_handle(move || on_tick(), period) {
            Ok(handle) => Some(handle),
            Err(e) => {
                warn!("autoplay timer unavailable: {e:?}");
                None
            }
        }
    }

    fn stop(&self, handle: Self::Handle) {
        if let Some(handle) = handle {
            handle.clear();
        }
    }
}

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// `IntersectionObserver` watching a single element.
#[derive(Clone, Debug)]
pub struct IntersectionTarget {
    element: Element,
}

impl IntersectionTarget {
    /// Watch `element`.
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

/// Live observer plus the JS closure it calls into.
pub struct IntersectionRegistration {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl ViewportObserver for IntersectionTarget {
    type Registration = IntersectionRegistration;

    fn observe(
        &self,
        options: ObserveOptions,
        mut on_change: Box<dyn FnMut(bool) -> Watch>,
    ) -> Option<Self::Registration> {
        let callback: EntriesCallback = Closure::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if on_change(entry.is_intersecting()) == Watch::Stop {
                        observer.unobserve(&entry.target());
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(options.root_margin);

        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => observer,
                Err(e) => {
                    warn!("IntersectionObserver unavailable: {e:?}");
                    return None;
                }
            };
        observer.observe(&self.element);

        Some(IntersectionRegistration {
            observer,
            _callback: callback,
        })
    }

    fn unobserve(&self, registration: Self::Registration) {
        registration.observer.unobserve(&self.element);
        registration.observer.disconnect();
    }
}

/// Smoothly scroll `element` into view.
pub fn scroll_into_view(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
