//! Runtime module - host integration
//!
//! This module connects the pure update loop to the embedding environment:
//! - `host` - the virtualized list contract the picker scrolls through
//! - `picker` - message dispatch and side-effect execution

pub mod host;
pub mod picker;

pub use host::{HostList, RecordingHost, ScrollError};
pub use picker::Picker;
