//! # remote-data
//!
//! A container for values fetched over the wire (or from any other
//! asynchronous source). A `RemoteData<T, E>` is always in exactly one of
//! four states: nothing requested yet, a request in flight, a value, or an
//! error. The caller drives the transitions; this crate only represents the
//! current status and provides combinators for transforming and combining
//! such values without manual flag juggling.

#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(warnings)]

mod remote_data;
mod untuple;

pub use crate::remote_data::RemoteData;
pub use crate::untuple::{
    untuple10, untuple2, untuple3, untuple4, untuple5, untuple6, untuple7, untuple8, untuple9,
};
