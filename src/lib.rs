//! greet: Print a greeting to standard output
//!
//! This library provides the core functionality for building the greeting
//! line from an optional caller-supplied name and writing it out.

/// Greeting construction and output
pub mod greeting;
