//! Core primitives for the caret-complete component.
//!
//! This crate provides the foundational pieces shared by the autocomplete
//! widget component:
//!
//! - **Signal/Slot System**: Type-safe notification from the component to
//!   its host (see [`Signal`])
//! - **Logging**: `tracing` targets and conventions (see [`logging`])
//!
//! # Signal/Slot Example
//!
//! ```
//! use caret_complete_core::Signal;
//!
//! // Create a signal that notifies when a candidate is committed
//! let activated = Signal::<String>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = activated.connect(|candidate| {
//!     println!("Committed: {}", candidate);
//! });
//!
//! // Emit the signal
//! activated.emit("#include".to_string());
//!
//! // Disconnect when done
//! activated.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
