//! Type definitions for channels, manifests, publish metadata and catalog entries

mod catalog_types;
mod channel;
mod event_types;
mod manifest_types;

pub use catalog_types::*;
pub use channel::*;
pub use event_types::*;
pub use manifest_types::*;
