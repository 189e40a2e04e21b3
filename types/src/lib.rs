//! Integer literal conversion for intconv.
//!
//! Pure functions and error types with no IO and no async. The only side
//! effect is `tracing` instrumentation, which is inert unless a subscriber
//! is installed by the caller.

#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod convert;

pub use convert::{
    ConvertError, FormatError, OverflowBound, Sign, TargetInt, convert_to, convert_to_int,
};
