use thiserror::Error;

use crate::graph::NodeId;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Errors fall into two groups. Construction errors abort a build before any graph is
/// published, so a caller never observes a partially built [`DirectedGraph`](crate::graph::DirectedGraph).
/// Lookup errors signal caller misuse after construction, such as asking a numberer for an
/// internal id it never handed out. Absent nodes are not errors: graph lookups return
/// [`Option`] because sparse id universes are legitimate.
///
/// # Error Categories
///
/// ## Construction Errors
/// - [`Error::Malformed`] - An edge record violated the input contract
/// - [`Error::Error`] - The record supplier itself failed
///
/// ## Lookup Errors
/// - [`Error::UnknownInternalId`] - A numberer was asked to reverse-map an unallocated id
///
/// ## Verification Errors
/// - [`Error::GraphError`] - A graph did not match its reference adjacency
///
/// # Examples
///
/// ```rust
/// use densegraph::{graph::{DirectedGraph, EdgeRecord, StoredGraphDir}, Error};
///
/// let records = vec![EdgeRecord::from_raw(1, vec![-2], 1)];
/// match DirectedGraph::from_records(&records, StoredGraphDir::OnlyOut) {
///     Ok(_) => println!("built"),
///     Err(Error::Malformed { message, file, line }) => {
///         eprintln!("Malformed input: {} ({}:{})", message, file, line);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The input records are malformed and no graph could be built.
    ///
    /// Raised for negative ids, ids above a record's declared maximum, duplicate
    /// records under [`DuplicateRecordPolicy::Reject`](crate::graph::DuplicateRecordPolicy::Reject),
    /// and any other structural violation detected during construction. The error
    /// includes the source location where the malformation was detected.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// A numberer was asked for the external id of an internal id it never allocated.
    #[error("Internal id {0} has not been allocated")]
    UnknownInternalId(NodeId),

    /// A graph differs from the reference adjacency it was checked against.
    ///
    /// The message names the first node where the two disagree.
    #[error("{0}")]
    GraphError(String),

    /// Generic error for miscellaneous failures.
    ///
    /// Used by fallible record suppliers to report their own failures (I/O, decoding)
    /// through the builder.
    #[error("{0}")]
    Error(String),
}
