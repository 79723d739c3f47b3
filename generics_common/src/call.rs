//! Callable interfaces.
//!
//! [`Call`] fixes its argument type when the interface is named, [`GenericCall`]
//! picks it at every call. A single generic function such as
//! [`identity`](crate::map::identity) satisfies both.

use crate::map::identity;

/// A value that can be called with a `T`, returning a `T`.
pub trait Call<T> {
    fn call(&self, obj: T) -> T;
}

impl<T, F> Call<T> for F
where
    F: Fn(T) -> T,
{
    #[inline]
    fn call(&self, obj: T) -> T {
        self(obj)
    }
}

/// A value that can be called with any `T`, returning the same `T`.
pub trait GenericCall {
    fn call<T>(&self, obj: T) -> T;
}

/// Callable wrapper around [`identity`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Identity;

impl GenericCall for Identity {
    #[inline]
    fn call<T>(&self, obj: T) -> T {
        identity(obj)
    }
}
