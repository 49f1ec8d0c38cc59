// File: src/error.rs
// Purpose: Engine error taxonomy

use thiserror::Error;

/// Errors raised by the form engine itself.
///
/// Rule-evaluation outcomes are not errors; they feed the pass/fail verdict.
#[derive(Debug, Error)]
pub enum Error {
    /// The controller was constructed without a root, or with a root that is
    /// not a form element.
    #[error("the form controller only accepts a form element as its root")]
    NotAForm,

    /// A node that does not accept listeners was handed to the binder.
    #[error("only elements that accept event listeners can be managed")]
    InvalidTarget,

    /// A trigger name outside the registry was supplied at configuration
    /// time.
    #[error("unknown validation trigger `{0}`")]
    UnknownTrigger(String),

    /// A `match` or `trigger` attribute referenced an id with no element.
    #[error("no element with id `{0}`")]
    UnknownElement(String),

    /// A `pattern` attribute did not compile as a regular expression.
    #[error("invalid pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Configuration overrides did not deserialize into a valid config.
    #[error("invalid configuration")]
    Config(#[from] serde_json::Error),
}
