//! Lifecycle callbacks around each processed observation.

use std::fmt::{self, Debug, Formatter};

use web_sys::IntersectionObserverEntry;

/// A lifecycle hook, invoked with the native entry that triggered it.
pub type Hook = Box<dyn FnMut(&IntersectionObserverEntry)>;

/// Optional callbacks fired while processing each observation.
///
/// For every entry of a callback batch the order is fixed: `start`, then the
/// attribute writes, then `enter` or `leave` depending on the intersection
/// state, then `end`. Hooks left unset are replaced by no-ops when the
/// watcher starts; supplying none is equivalent to supplying four empty
/// closures.
#[derive(Default)]
pub struct LifecycleHooks {
    pub(crate) start: Option<Hook>,
    pub(crate) enter: Option<Hook>,
    pub(crate) leave: Option<Hook>,
    pub(crate) end: Option<Hook>,
}

impl LifecycleHooks {
    /// Fired for every entry, before any attribute is touched.
    pub fn on_start(mut self, hook: impl FnMut(&IntersectionObserverEntry) + 'static) -> Self {
        self.start = Some(Box::new(hook));
        self
    }

    /// Fired when the entry reports the target intersecting.
    pub fn on_enter(mut self, hook: impl FnMut(&IntersectionObserverEntry) + 'static) -> Self {
        self.enter = Some(Box::new(hook));
        self
    }

    /// Fired when the entry reports the target outside the viewport.
    pub fn on_leave(mut self, hook: impl FnMut(&IntersectionObserverEntry) + 'static) -> Self {
        self.leave = Some(Box::new(hook));
        self
    }

    /// Fired for every entry, after everything else.
    pub fn on_end(mut self, hook: impl FnMut(&IntersectionObserverEntry) + 'static) -> Self {
        self.end = Some(Box::new(hook));
        self
    }

    /// Substitutes a no-op for every unset hook. Done once per watcher, not
    /// per call.
    pub(crate) fn normalize(self) -> NormalizedHooks {
        fn noop() -> Hook {
            Box::new(|_| {})
        }

        NormalizedHooks {
            start: self.start.unwrap_or_else(noop),
            enter: self.enter.unwrap_or_else(noop),
            leave: self.leave.unwrap_or_else(noop),
            end: self.end.unwrap_or_else(noop),
        }
    }
}

impl Debug for LifecycleHooks {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleHooks")
            .field("start", &self.start.is_some())
            .field("enter", &self.enter.is_some())
            .field("leave", &self.leave.is_some())
            .field("end", &self.end.is_some())
            .finish()
    }
}

/// Hook record after no-op substitution.
pub(crate) struct NormalizedHooks {
    pub(crate) start: Hook,
    pub(crate) enter: Hook,
    pub(crate) leave: Hook,
    pub(crate) end: Hook,
}
