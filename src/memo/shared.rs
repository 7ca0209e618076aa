//! Reference-identity handles: `Shared<T>` and `Callback`.

use super::shallow::ShallowEq;
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// A shared, immutable value compared by identity.
///
/// Cloning a `Shared` keeps the identity; `Shared::new` always creates a new
/// one, even for an equal value. That is exactly the difference between a
/// value that was memoized and one that was rebuilt.
pub struct Shared<T: ?Sized>(Rc<T>);

impl<T> Shared<T> {
    /// Allocate a new shared value with a fresh identity.
    pub fn new(value: T) -> Self {
        Self(Rc::new(value))
    }
}

impl<T: ?Sized> Shared<T> {
    /// Returns `true` if both handles point to the same allocation.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.0, &other.0)
    }

    /// Address of the allocation, for diagnostics.
    pub fn addr(this: &Self) -> usize {
        Rc::as_ptr(&this.0).cast::<()>() as usize
    }
}

impl<T: ?Sized> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Shared<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> ShallowEq for Shared<T> {
    #[inline]
    fn shallow_eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl<T: fmt::Debug + ?Sized> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shared@{:#x}({:?})", Self::addr(self), &*self.0)
    }
}

impl<T: Serialize + ?Sized> Serialize for Shared<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (*self.0).serialize(serializer)
    }
}

/// A callback reference compared by identity.
///
/// Built from any closure. Two callbacks built from the same closure source
/// are still different callbacks; only clones share an identity.
#[derive(Clone)]
pub struct Callback(Rc<dyn Fn()>);

impl Callback {
    /// Wrap a closure in a new callback identity.
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// A callback that does nothing. Each call allocates a new identity.
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    /// Invoke the callback.
    pub fn call(&self) {
        (self.0)();
    }

    /// Returns `true` if both callbacks are the same allocation.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.0, &other.0)
    }

    /// Address of the closure, for diagnostics.
    pub fn addr(this: &Self) -> usize {
        Rc::as_ptr(&this.0).cast::<()>() as usize
    }
}

impl ShallowEq for Callback {
    #[inline]
    fn shallow_eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callback@{:#x}", Self::addr(self))
    }
}
