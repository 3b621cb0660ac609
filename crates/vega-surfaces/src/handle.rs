//! Relinkable shared handles.
//!
//! Surfaces represent live market data, so objects built on top of other
//! surfaces must observe them through an indirection rather than hold a
//! value copy: when the observed surface is swapped out, every downstream
//! object must see the new one on its next query. [`Handle`] is that
//! indirection — a shared, relinkable cell holding an `Arc` to the current
//! target.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

/// A shared, relinkable reference to a surface.
///
/// Cloning a handle shares the underlying cell: relinking through any clone
/// is visible through all of them. Holders re-resolve the target on every
/// use via [`linked_to`](Handle::linked_to) and must never cache the result
/// across queries, otherwise the live-linkage guarantee is lost.
///
/// Reads take a shared lock and relinks take an exclusive lock, so many
/// concurrent readers are safe against a concurrent relink.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use vega_surfaces::Handle;
///
/// let handle = Handle::new(Arc::new(1));
/// let observer = handle.clone();
///
/// handle.relink(Arc::new(2));
/// assert_eq!(*observer.linked_to(), 2);
/// ```
pub struct Handle<T: ?Sized> {
    link: Arc<RwLock<Arc<T>>>,
}

impl<T: ?Sized> Handle<T> {
    /// Creates a handle linked to the given target.
    #[must_use]
    pub fn new(target: Arc<T>) -> Self {
        Handle {
            link: Arc::new(RwLock::new(target)),
        }
    }

    /// Returns the current target.
    ///
    /// The returned `Arc` is a snapshot of the link, not of the target's
    /// state; callers needing live linkage must call this again on every
    /// query rather than hold on to the result.
    #[must_use]
    pub fn linked_to(&self) -> Arc<T> {
        Arc::clone(&self.link.read())
    }

    /// Relinks the handle to a new target.
    ///
    /// The change is visible through every clone of this handle.
    pub fn relink(&self, target: Arc<T>) {
        *self.link.write() = target;
    }
}

impl<T: ?Sized> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Handle {
            link: Arc::clone(&self.link),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle").finish_non_exhaustive()
    }
}

impl<T: ?Sized> From<Arc<T>> for Handle<T> {
    fn from(target: Arc<T>) -> Self {
        Handle::new(target)
    }
}
