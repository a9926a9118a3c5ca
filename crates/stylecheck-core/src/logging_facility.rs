//! Logging for check runs.
//!
//! Binaries call [`init`] once with a [`Profile`]; library code never
//! installs a subscriber. Operation boundaries (`check_document`,
//! `load_spec_file`, `load_document_file`) go through
//! [`log_op_start!`](crate::log_op_start), [`log_op_end!`](crate::log_op_end)
//! and [`log_op_error!`](crate::log_op_error) so every run emits the same
//! `op`/`event`/`run_id` keys. Findings inside a run (an unused substyle, a
//! paragraph diff) are plain `tracing::warn!`/`tracing::debug!` events.
//!
//! ```rust
//! use stylecheck_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```
//!
//! Tests install [`init_test_capture`] instead and assert on
//! [`CapturedEvent`]s.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
