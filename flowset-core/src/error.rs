//! Error types for flowset-core.
//!
//! All decode failures are local to a single [`decode`](crate::decode)
//! call; the caller may drop the offending datagram and continue with the
//! next one. An unknown template id is deliberately *not* an error: the
//! affected data set is surfaced with its raw bytes instead (see
//! [`DataSet::Unresolved`](crate::DataSet)).

use thiserror::Error;

/// Main error type for flowset-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The buffer ended before a declared field was satisfied.
    #[error("short buffer: need {needed} bytes, have {have}")]
    ShortBuffer { needed: usize, have: usize },

    /// The peeked version word is not a known export format.
    #[error("unsupported version {0}")]
    UnsupportedVersion(u16),

    /// The inner header version disagrees with the dispatched parser.
    #[error("version mismatch: expected {expected}, got {actual}")]
    VersionMismatch { expected: u16, actual: u16 },

    /// Structural violation of the wire format.
    #[error("v{version} protocol error: {reason}")]
    Protocol { version: u16, reason: String },

    /// An information element with this key is already registered.
    #[error("information element ({enterprise}, {id}) is already registered")]
    DuplicateElement { enterprise: u32, id: u16 },
}

impl Error {
    pub(crate) fn protocol(version: u16, reason: impl Into<String>) -> Self {
        Error::Protocol {
            version,
            reason: reason.into(),
        }
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
