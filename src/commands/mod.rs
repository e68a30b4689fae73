//! Backend Command Wrappers
//!
//! Frontend bindings to the bill upload endpoint.

mod submit;

pub use submit::*;
