//! Known-answer test vectors

pub mod rfc8032;
