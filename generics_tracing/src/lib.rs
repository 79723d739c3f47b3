//! Span helpers shared by all `generics_*` crates.
//!
//! Library crates never talk to a subscriber directly. They open spans through
//! [`trace_span!`] and emit events through the re-exported [`tracing`] macros;
//! the binary decides where those end up.

pub mod span;

#[doc(hidden)]
pub use tracing;

pub use span::{EnteredSpan, Span};
