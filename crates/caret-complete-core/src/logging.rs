//! Logging and debugging facilities for caret-complete.
//!
//! Caret-complete uses the `tracing` crate for instrumentation. The library
//! never installs a subscriber and never writes to stdout on its own; to see
//! logs, install a subscriber in the host application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! The candidate-filter recompute event carries the current search key and
//! match count as structured fields under [`targets::COMPLETER`]; enable it
//! with a directive such as `caret_complete::completer=debug`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core primitives target.
    pub const CORE: &str = "caret_complete_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "caret_complete_core::signal";
    /// Autocomplete controller target.
    pub const COMPLETER: &str = "caret_complete::completer";
    /// Candidate vocabulary target.
    pub const VOCABULARY: &str = "caret_complete::vocabulary";
}
