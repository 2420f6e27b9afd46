//! Provider trait

use crate::error::SuggestError;
use crate::suggestions::{AddressSuggestion, SuggestionOptions};
use async_trait::async_trait;

/// Something that turns a partial address into address suggestions
///
/// Implementations must be safe to call concurrently; each call is
/// independent of every other.
#[async_trait]
pub trait AddressProvider: Send + Sync {
    /// Provider name, used in logs and error messages
    fn name(&self) -> &str;

    /// Fetch suggestions for a partial address
    async fn get_suggestions(
        &self,
        query: &str,
        options: &SuggestionOptions,
    ) -> Result<Vec<AddressSuggestion>, SuggestError>;
}
