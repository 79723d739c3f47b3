/// Creates a new [`Span`] with the given `name` at the current callsite.
///
/// ```
/// let _span = generics_tracing::trace_span!("build").entered();
/// ```
#[macro_export]
macro_rules! trace_span {
    ($name:expr) => {
        $crate::__trace_span_impl!($name)
    };
}

#[cfg(feature = "spans")]
#[macro_export]
#[doc(hidden)]
macro_rules! __trace_span_impl {
    ($name:expr) => {{
        $crate::span::Span {
            inner: $crate::tracing::span!($crate::tracing::Level::TRACE, $name),
            _priv: (),
        }
    }};
}

#[cfg(not(feature = "spans"))]
#[macro_export]
#[doc(hidden)]
macro_rules! __trace_span_impl {
    ($name:expr) => {{
        $crate::span::Span { _priv: () }
    }};
}

/// A `Span` represents a zone of time in which an operation is being run.
#[derive(Clone, Debug)]
pub struct Span {
    #[cfg(feature = "spans")]
    #[doc(hidden)]
    pub inner: tracing::span::Span,
    #[doc(hidden)]
    pub _priv: (),
}

impl Span {
    /// Enters this span, returning a guard that exits it on drop.
    pub fn entered(self) -> EnteredSpan {
        EnteredSpan {
            #[cfg(feature = "spans")]
            _inner: self.inner.entered(),
        }
    }

    /// Returns `true` if this span is not recorded by any subscriber.
    #[cfg(feature = "spans")]
    pub fn is_disabled(&self) -> bool {
        self.inner.is_disabled()
    }

    /// Returns `true` if this span is not recorded by any subscriber.
    #[cfg(not(feature = "spans"))]
    pub fn is_disabled(&self) -> bool {
        true
    }
}

/// A handle to a [`Span`] that is currently active.
#[derive(Debug)]
#[non_exhaustive]
pub struct EnteredSpan {
    #[cfg(feature = "spans")]
    _inner: tracing::span::EnteredSpan,
}
