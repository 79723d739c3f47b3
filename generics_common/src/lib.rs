//! Generic building blocks without any dependency on a document.

pub mod call;
pub mod map;
pub mod pad;
pub mod slot;

pub use call::{Call, GenericCall, Identity};
pub use map::{identity, map, parse_int, scale, transform};
pub use pad::{pad_left, Padding};
pub use slot::{Backpack, Slot, SlotError};
