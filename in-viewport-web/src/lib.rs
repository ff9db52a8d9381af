//! # in-viewport
//!
//! Annotates DOM elements with viewport-intersection attributes, compiled to
//! WebAssembly with [`wasm-bindgen`]. Every watched element is registered
//! with a native [`IntersectionObserver`][observer]; whenever the browser
//! reports a change, two `data-*` attributes on the element are rewritten:
//!
//! - a *direction* attribute (`data-in-viewport-direction` by default) with
//!   the side the element last entered from, `from-above`/`from-below`,
//!   present only while the element intersects the viewport;
//! - a *position* attribute (`data-in-viewport-position` by default) with the
//!   element's coarse location, `above`/`below`/`intersecting`.
//!
//! Attribute names and value tokens are plain strings and can be overridden
//! through [`AttributeNames`] and [`Vocabulary`], so visibility-driven
//! styling stays in CSS. [`LifecycleHooks`] fire around each processed entry
//! for side effects from Rust.
//!
//! Geometry and scheduling are entirely the browser's: there is no polling
//! loop and no layout read beyond what the native entry already carries.
//! Observer options are passed through to the platform untouched, and once
//! started the observer runs for the rest of the document's lifetime.
//!
//! ```no_run
//! use in_viewport_web::{start, LifecycleHooks, WatcherAttributes};
//!
//! let document = web_sys::window().unwrap().document().unwrap();
//! let hero = document.get_element_by_id("hero").unwrap();
//!
//! let attributes = WatcherAttributes::default()
//!     .with_target(hero)
//!     .with_hooks(LifecycleHooks::default().on_enter(|entry| {
//!         tracing::debug!("hero entered: {:?}", entry.target());
//!     }));
//!
//! start(attributes).unwrap();
//! ```
//!
//! [observer]: https://developer.mozilla.org/en-US/docs/Web/API/IntersectionObserver
//! [`wasm-bindgen`]: https://docs.rs/wasm-bindgen

mod error;
mod hooks;
pub(crate) mod web_sys;

use ::web_sys::{Element, IntersectionObserverEntry, IntersectionObserverInit};
use in_viewport_core::observation::Observation;
use in_viewport_core::update;
use tracing::debug;

pub use self::error::ObserverError;
pub use self::hooks::{Hook, LifecycleHooks};
pub use in_viewport_core::attribute::{AttributeNames, Vocabulary};

use self::hooks::NormalizedHooks;
use self::web_sys as backend;

/// Configuration for a watcher, consumed by [`start()`].
#[derive(Debug, Default)]
pub struct WatcherAttributes {
    pub(crate) targets: Vec<Element>,
    pub(crate) options: Option<IntersectionObserverInit>,
    pub(crate) hooks: LifecycleHooks,
    pub(crate) names: AttributeNames,
    pub(crate) vocabulary: Vocabulary,
}

impl WatcherAttributes {
    /// Replaces the collection of watched elements.
    ///
    /// An empty collection makes [`start()`] a silent no-op.
    pub fn with_targets(mut self, targets: impl IntoIterator<Item = Element>) -> Self {
        self.targets = targets.into_iter().collect();
        self
    }

    /// Adds one element to the watched collection.
    pub fn with_target(mut self, target: Element) -> Self {
        self.targets.push(target);
        self
    }

    /// Options handed to the [`IntersectionObserver`] constructor untouched:
    /// root, margins and threshold list.
    ///
    /// Platform defaults apply when not supplied.
    ///
    /// [`IntersectionObserver`]: https://developer.mozilla.org/en-US/docs/Web/API/IntersectionObserver
    pub fn with_observer_options(mut self, options: IntersectionObserverInit) -> Self {
        self.options = Some(options);
        self
    }

    /// Overrides the names of the two written attributes.
    pub fn with_attribute_names(mut self, names: AttributeNames) -> Self {
        self.names = names;
        self
    }

    /// Overrides the value tokens written into the attributes.
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Lifecycle callbacks fired around each processed entry.
    pub fn with_hooks(mut self, hooks: LifecycleHooks) -> Self {
        self.hooks = hooks;
        self
    }
}

/// Starts watching the configured targets.
///
/// With no targets, nothing is registered and `Ok(())` is returned. Once
/// registered, observation runs for the rest of the document's lifetime;
/// no cancellation handle is retained or exposed. The only failure is the
/// platform rejecting observer construction, returned untouched as
/// [`ObserverError`].
pub fn start(attributes: WatcherAttributes) -> Result<(), ObserverError> {
    let WatcherAttributes { targets, options, hooks, names, vocabulary } = attributes;

    if targets.is_empty() {
        debug!("no targets supplied, skipping observer registration");
        return Ok(());
    }

    let mut hooks = hooks.normalize();
    let handle = backend::IntersectionObserverHandle::new(
        move |entry| process(&entry, &names, &vocabulary, &mut hooks),
        options.as_ref(),
    )?;

    debug!("observing {} targets for viewport intersection", targets.len());
    for target in &targets {
        handle.observe(target);
    }

    handle.forget();

    Ok(())
}

/// One entry of a callback batch: start hook, attribute writes, enter/leave
/// hook, end hook. Entries are processed independently, in platform order.
fn process(
    entry: &IntersectionObserverEntry,
    names: &AttributeNames,
    vocabulary: &Vocabulary,
    hooks: &mut NormalizedHooks,
) {
    (hooks.start)(entry);

    let target = entry.target();
    let observation = Observation {
        is_intersecting: entry.is_intersecting(),
        top: entry.bounding_client_rect().top(),
    };
    // The snapshot is read in full before either attribute is written; the
    // direction derivation keys off the position of the *previous* firing.
    let update = update::derive(&backend::snapshot(&target, names), &observation, vocabulary);
    backend::apply(&target, names, &update);

    if observation.is_intersecting {
        (hooks.enter)(entry);
    } else {
        (hooks.leave)(entry);
    }

    (hooks.end)(entry);
}
