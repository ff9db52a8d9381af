//! Base types for a viewport-intersection watcher.
//!
//! This crate contains the types and the attribute-derivation logic that are
//! platform independent: which `data-*` attributes a watched element carries,
//! the value vocabulary written into them, and how the next attribute values
//! follow from one observation. The browser backend driving a native
//! [`IntersectionObserver`] lives in [`in-viewport-web`]; keeping the
//! derivation here lets it be tested without a DOM.
//!
//! [`IntersectionObserver`]: https://developer.mozilla.org/en-US/docs/Web/API/IntersectionObserver
//! [`in-viewport-web`]: https://docs.rs/in-viewport-web

pub mod attribute;
pub mod observation;
pub mod update;
