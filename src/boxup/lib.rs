//! # Boxup Architecture
//!
//! Boxup is a **layout library with a CLI client**: everything from
//! [`layout`] inward operates on plain Rust types and never touches
//! stdout/stderr, process exit codes, or a terminal. Only the binary
//! (`main.rs` + `args.rs`) does I/O.
//!
//! The pipeline is short:
//!
//! ```text
//! stdin lines ──▶ width (display columns) ──▶ layout (geometry + rows) ──▶ stdout
//!                                  ▲
//!                        style (border glyph sets)
//! ```
//!
//! ## Module Overview
//!
//! - [`width`]: display-column measurement, East-Asian-width aware. Every
//!   length comparison and padding calculation in the crate goes through
//!   this module, never byte or char counts, which break alignment for
//!   wide scripts.
//! - [`style`]: the `BorderStyle` glyph record, the fixed registry of
//!   builtin styles, and the single-glyph custom constructor.
//! - [`layout`]: the box layout engine. It sizes the interior to the
//!   widest line and any title decoration, then emits the top border,
//!   content rows, and bottom border.
//! - [`error`]: error types.

pub mod error;
pub mod layout;
pub mod style;
pub mod width;
