//! Boundary to the external move-suggestion service.
//!
//! The service sees a serialized position and may answer with a hole. It is
//! an untrusted oracle: whatever it says is re-validated by the engine, and
//! it never touches game state.
//!
//! - `wire`: JSON request/response shapes
//! - `MoveSuggester`: the async seam a transport implements
//! - `http`: a `reqwest` transport (cargo feature `http`)

pub mod wire;
#[cfg(feature = "http")]
pub mod http;

use async_trait::async_trait;

use crate::error::SuggestionError;

pub use wire::{SuggestionRequest, SuggestionResponse};
#[cfg(feature = "http")]
pub use http::HttpSuggester;

/// Something that can propose a hole for a position.
///
/// Implementations may block on I/O for as long as they like; callers bound
/// the wait with a timeout and drop the future when it expires.
#[async_trait]
pub trait MoveSuggester: Send + Sync {
    async fn suggest(&self, request: &SuggestionRequest) -> Result<usize, SuggestionError>;
}
