use serde::Deserialize;

/// An event as it appears in the source schedule, before validation.
///
/// Every field is optional here; the normalizer decides which ones are
/// required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawEvent {
    pub id: Option<String>,
    /// `YYYY-MM-DD`
    pub day: Option<String>,
    pub room: Option<String>,
    pub track: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "persons")]
    pub speakers: Vec<String>,
    /// `HH:MM`
    pub start: Option<String>,
    /// `HH:MM`
    pub duration: Option<String>,
    /// `HH:MM`, used when no duration is given.
    pub stop: Option<String>,
}

impl RawEvent {
    /// Identifier used in error messages, falling back to the position in the
    /// schedule.
    pub fn label(&self, position: usize) -> String {
        match self.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => format!("#{}", position + 1),
        }
    }
}
