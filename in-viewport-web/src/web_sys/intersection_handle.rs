use std::mem;

use js_sys::Array;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::ObserverError;

/// Owns a native observer together with the closure backing its callback.
pub(crate) struct IntersectionObserverHandle {
    observer: IntersectionObserver,
    _closure: Closure<dyn FnMut(Array)>,
}

impl IntersectionObserverHandle {
    /// `options`, when supplied, are handed to the native constructor
    /// untouched; `callback` runs once per entry of every batch, in the order
    /// the platform delivers them.
    pub fn new<F>(
        mut callback: F,
        options: Option<&IntersectionObserverInit>,
    ) -> Result<Self, ObserverError>
    where
        F: 'static + FnMut(IntersectionObserverEntry),
    {
        let closure = Closure::new(move |entries: Array| {
            for entry in entries.iter() {
                callback(entry.unchecked_into());
            }
        });
        let observer = match options {
            Some(options) => {
                IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), options)
            },
            None => IntersectionObserver::new(closure.as_ref().unchecked_ref()),
        }
        .map_err(ObserverError)?;

        Ok(Self { observer, _closure: closure })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }

    /// Keeps observation running for the rest of the document's lifetime.
    ///
    /// Leaks the closure and skips [`Drop`], leaving nothing to disconnect
    /// with; the platform keeps the observer alive while it has observed
    /// targets.
    pub fn forget(self) {
        mem::forget(self);
    }
}

impl Drop for IntersectionObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect()
    }
}
