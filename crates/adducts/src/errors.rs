use std::num::ParseIntError;

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T, E = AdductError> = std::result::Result<T, E>;

// NOTE: None of these ever escape `clean()` and friends, which degrade to a best-effort answer instead, but they are
// public for callers that want to know *why* an annotation was ignored
#[derive(Debug, Diagnostic, Clone, Eq, PartialEq, Error)]
pub enum AdductError {
    #[diagnostic(help(
        "charge annotations should be a small whole number followed by a '+' or '-', like the 2+ in [M+2H]2+"
    ))]
    #[error("the charge magnitude {text:?} could not be read as an integer")]
    InvalidChargeMagnitude {
        text: String,
        #[source]
        source: ParseIntError,
    },
}

impl AdductError {
    pub(crate) fn invalid_charge_magnitude(text: &str, source: ParseIntError) -> Self {
        let text = text.to_owned();

        Self::InvalidChargeMagnitude { text, source }
    }
}
