//! Observer-construction failure.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use wasm_bindgen::JsValue;

/// Returned when the native observer rejects construction, commonly because
/// of malformed options such as an unparsable root margin.
///
/// The exception raised by the browser is preserved untouched and can be
/// recovered with [`into_inner()`](Self::into_inner).
#[derive(Clone, Debug, PartialEq)]
pub struct ObserverError(pub(crate) JsValue);

impl ObserverError {
    /// The exception raised by the browser.
    pub fn into_inner(self) -> JsValue {
        self.0
    }
}

impl Display for ObserverError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0.as_string() {
            Some(message) => write!(f, "failed to create `IntersectionObserver`: {message}"),
            None => write!(f, "failed to create `IntersectionObserver`: {:?}", self.0),
        }
    }
}

impl Error for ObserverError {}
