//! Outbound adapters implementing domain ports.
//!
//! - **memory**: the process-lifetime Application Store.
//!
//! Adapters translate between domain types and their storage medium and
//! contain no business logic.

pub mod memory;
