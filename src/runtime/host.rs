//! The host list contract
//!
//! The virtualized list itself belongs to the embedder. The picker only needs to
//! ask it to scroll; visibility reports come back as messages.

use thiserror::Error;

/// Why a scroll request could not be honoured
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScrollError {
    #[error("item {index} is out of range")]
    OutOfRange { index: usize },
    #[error("list is not ready to scroll")]
    NotReady,
}

/// A virtualized list that can jump to a precomputed offset
pub trait HostList {
    /// Scroll so the item at `index` starts at `offset`. Best effort.
    fn scroll_to_offset(&mut self, index: usize, offset: f32) -> Result<(), ScrollError>;
}

/// Host that records scroll requests, for headless use and tests
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    pub scrolls: Vec<(usize, f32)>,
    /// When set, every request fails with this error
    pub fail_with: Option<ScrollError>,
}

impl HostList for RecordingHost {
    fn scroll_to_offset(&mut self, index: usize, offset: f32) -> Result<(), ScrollError> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.scrolls.push((index, offset));
        Ok(())
    }
}
