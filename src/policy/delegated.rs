//! Asking the suggestion service, with a deadline and re-validation.

use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;

use crate::core::GameState;
use crate::error::SuggestionError;
use crate::rules::Tsoro;
use crate::suggest::{MoveSuggester, SuggestionRequest};

/// Await a suggestion for at most `timeout`. The pending call is dropped
/// when the deadline passes.
///
/// The deadline needs a tokio runtime with its time driver enabled. Without
/// one the service is not asked and `NoTimer` is returned.
pub async fn suggest_within(
    suggester: &dyn MoveSuggester,
    request: &SuggestionRequest,
    timeout: Duration,
) -> Result<usize, SuggestionError> {
    if tokio::runtime::Handle::try_current().is_err() {
        return Err(SuggestionError::NoTimer);
    }
    // Registering the deadline panics when the runtime was built without timers.
    let bounded = panic::catch_unwind(AssertUnwindSafe(|| {
        tokio::time::timeout(timeout, suggester.suggest(request))
    }))
    .map_err(|_| SuggestionError::NoTimer)?;

    match bounded.await {
        Ok(answer) => answer,
        Err(_) => Err(SuggestionError::Timeout(timeout.as_millis())),
    }
}

/// Ask the service and keep the answer only if the engine accepts it.
pub async fn validated_suggestion(
    suggester: &dyn MoveSuggester,
    engine: &Tsoro,
    state: &GameState,
    request: &SuggestionRequest,
    timeout: Duration,
) -> Result<usize, SuggestionError> {
    let hole = suggest_within(suggester, request, timeout).await?;
    engine
        .check_legal_move(state, hole)
        .map_err(SuggestionError::Illegal)?;
    Ok(hole)
}
