//! Top-level facade crate for soapwire.
//!
//! Re-exports the core codec and the blocking client so users can depend on a single crate.

pub mod core {
    pub use soapwire_core::*;
}

pub mod client {
    pub use soapwire_client::*;
}
