use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

/// An `IntersectionObserver` bundled with its callback closure; the closure
/// must outlive the observer or the browser would call into freed memory.
pub struct SentinelObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Vec<IntersectionObserverEntry>)>,
}

impl SentinelObserver {
    /// Watches `target` and runs `on_visible` whenever any part of it
    /// intersects the viewport.
    pub fn watch(target: &Element, on_visible: impl Fn() + 'static) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Vec<IntersectionObserverEntry>)>::new(
            move |entries: Vec<IntersectionObserverEntry>| {
                if entries.iter().any(|entry| entry.intersection_ratio() > 0.0) {
                    on_visible();
                }
            },
        );
        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
        observer.observe(target);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}
