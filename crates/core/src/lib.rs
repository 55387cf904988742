//! Core library for bacon
//!
//! This crate implements the **Functional Core** of the bacon base converter,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`bacon_core`** (this crate): Pure conversion functions with zero I/O
//! - **`bacon`**: Argument parsing, output and exit status (the Imperative Shell)
//!
//! Every function in this crate is deterministic and side-effect free, so it
//! can be tested with plain string fixtures.
//!
//! # Module Organization
//!
//! - [`base`]: The supported number bases and their decoder/encoder pairs
//! - [`classify`]: Infers the base a literal is written in from its shape
//! - [`decode`]: Literal to `u32` conversion, one function per base
//! - [`encode`]: `u32` to fixed-layout literal, one function per base
//! - [`convert`]: Orchestrates a full conversion and builds the report
//!
//! # Example Usage
//!
//! ```rust
//! use bacon_core::{convert, Base};
//!
//! let report = convert("0x10", Base::Decimal).unwrap();
//! assert_eq!(report.to_string(), "0x10 (HEX) = 16 (DEC)");
//! ```

pub mod base;
pub mod classify;
pub mod convert;
pub mod decode;
pub mod encode;

pub use base::{Base, Codec};
pub use classify::classify;
pub use convert::{convert, ConversionReport, ConvertError};
