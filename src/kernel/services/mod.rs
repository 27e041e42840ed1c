//! Services layer (ports + adapters).
//!
//! - `ports`: contracts and data types the kernel consumes.
//! - `adapters`: concrete implementations (rope buffer, settings files, LSP conversion).

pub mod adapters;
pub mod ports;
