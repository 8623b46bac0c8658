//! Microbenchmarks for text-input buffer marshaling across the Dear ImGui FFI boundary.
//!
//! Every frame, an immediate-mode text input needs the current string value
//! copied into a widget-visible buffer, and possibly copied back out after an
//! edit. This crate measures six strategies for scheduling those copies:
//!
//! 1. Managed `String` handed to the high-level binding (no flags)
//! 2. Managed `String` with `EnterReturnsTrue` set
//! 3. Raw fixed buffer, reused as-is (no copies)
//! 4. Raw fixed buffer, copy-in before every widget call
//! 5. Raw fixed buffer, copy-in plus copy-out only on edit completion
//! 6. Raw fixed buffer, copy-in plus unconditional copy-out
//!
//! Strategy 5 is the realistic production pattern: most frames complete no
//! edit, so the write-back copy is skipped unless the widget reports one.
//!
//! The scenarios run headless (context with a fixed virtual display, no
//! backend); timing and statistics come from criterion. Run with:
//! `cargo bench --bench input_text`

#![deny(rust_2018_idioms)]

pub use self::buffer::*;
pub use self::error::*;
pub use self::harness::*;
pub use self::labels::*;
pub use self::policy::*;

mod buffer;
mod error;
mod harness;
mod labels;
mod policy;

/// Number of text-input widgets submitted per frame.
pub const BATCH_SIZE: usize = 32;

/// Widget-visible buffer capacity in bytes. The backing buffer allocates one
/// extra byte so the NUL terminator survives a full-length edit.
pub const BUF_SIZE: usize = 64;

/// Initial contents of the source string in every scenario.
pub const INITIAL_TEXT: &str = "Hello World!";
