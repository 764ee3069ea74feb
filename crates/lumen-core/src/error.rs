use thiserror::Error;

/// Failures a render, mount callback or deferred task can hit.
///
/// None of these are recovered from. The dispatch loop logs them and the
/// event that produced them is simply abandoned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("no element with id `{0}`")]
    MissingElement(String),
    #[error("`{0}` is not a #rrggbb color")]
    InvalidColor(String),
    #[error("audio `{src}`: {message}")]
    Audio { src: String, message: String },
    #[error("host call failed: {0}")]
    Host(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
