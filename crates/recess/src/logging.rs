//! Tracing targets used by the resolver.
//!
//! Recess emits `tracing` events but never installs a subscriber. Filter on
//! these targets to follow a single subsystem:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("recess::resolve=trace,recess::host=debug")
//!     .init();
//! ```

/// Target names for log filtering.
pub mod targets {
    /// Per-node selector matching and recursion.
    pub const RESOLVE: &str = "recess::resolve";
    /// Stylesheet construction and loading.
    pub const SHEET: &str = "recess::sheet";
    /// Event dispatch and interaction-state updates.
    pub const HOST: &str = "recess::host";
}
