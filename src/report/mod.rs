//! Regulatory REM report
//!
//! The monthly fixed-schema statistical report required by the
//! health-ministry reporting standard. The document shape is a frozen
//! contract ([`document`]); the assembler ([`assembler`]) is a pure
//! function from a record snapshot to that shape.

pub mod assembler;
pub mod document;

pub use assembler::assemble_rem;
pub use document::{NULL_POLICY, NullPolicy, RemReport};
