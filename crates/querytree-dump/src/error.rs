//! Errors surfaced while dumping a query tree.

use std::io;

/// Errors that can occur while serializing or writing a query tree.
///
/// Traversal over a well-formed tree cannot fail: decoders are total and
/// every encoder reads only fields its variant guarantees. What remains is
/// the depth guard and the output destination.
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    /// The tree nests deeper than the configured limit allows.
    #[error("query tree nesting exceeds the depth limit of {limit}")]
    DepthExceeded { limit: u32 },

    /// The output destination rejected the encoded document.
    #[error("failed to write dump output")]
    Sink(#[from] io::Error),
}
