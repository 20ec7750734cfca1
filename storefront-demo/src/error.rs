use themedom::SelectorError;
use thiserror::Error;

/// Errors that stop the scripted visit.
#[derive(Debug, Error)]
pub enum VisitError {
    #[error("invalid selector: {0}")]
    Selector(#[from] SelectorError),

    #[error("nothing matches {0}")]
    Missing(String),

    #[error("panel {0} has no slider")]
    NoSlider(String),
}
