use crate::RenderError;
use progbook_types::TrackName;

/// Supplies the introductory text printed under a track heading.
pub trait DescriptionProvider: Send + Sync {
    /// Raw HTML description of `track`, or `None` when it has none.
    fn description(&self, track: &TrackName) -> Result<Option<String>, RenderError>;
}

/// A provider for books without track descriptions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDescriptions;

impl DescriptionProvider for NoDescriptions {
    fn description(&self, _track: &TrackName) -> Result<Option<String>, RenderError> {
        Ok(None)
    }
}
