//! Library half of the `sample-tracker` binary.

pub mod logging;
pub mod request;
