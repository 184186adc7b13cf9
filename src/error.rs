use thiserror::Error;

use crate::colour::{NodeId, NB_COLOURS};

/// result type of the colouring pipeline
pub type Result<T> = std::result::Result<T, Error>;

/** reasons why an interference graph description is rejected.
The messages are the ones shown to the user. */
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// the input has no lines at all
    #[error("Error: The file is empty.")]
    FileEmpty,

    /// a line contains something else than digits, commas or whitespace
    #[error("Invalid file content; contains characters other than digits, commas, or end-of-line.")]
    InvalidCharacter,

    /// a node is declared a second time
    #[error("Error: Duplicate node definition found for node {0}.")]
    DuplicateNode(NodeId),

    /// a node is declared before the ones preceding it
    #[error("Error: Missing node definitions or nodes are not in consecutive order. Expected node {expected}, found {found}.")]
    OutOfOrderNode {
        /// next node id in the sequence
        expected: NodeId,
        /// node id actually declared
        found: NodeId,
    },

    /// node id outside [MIN_NODE, MAX_NODE]
    #[error("Node number out of range. Each node must be between 1 and 50.")]
    NodeOutOfRange,

    /// neighbour id outside [MIN_NODE, MAX_NODE]
    #[error("Neighbor number out of range. Each neighbor must be between 1 and 50.")]
    NeighbourOutOfRange,

    /// the node token of a line is not an integer
    #[error("Invalid file content; unable to convert to integers.")]
    MalformedInteger,
}

/** errors reported by the colouring pipeline */
#[derive(Error, Debug)]
pub enum Error {
    /// the input file is not a valid interference graph
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// every colour of the alphabet is already used around this node
    #[error("Error: No colour left for node {node}; its neighbours already use all {} colours.", NB_COLOURS)]
    ColourSpaceExhausted {
        /// node that could not be coloured
        node: NodeId,
    },

    /// wrong number of command line arguments
    #[error("Usage: greedy_colour input.txt output.txt")]
    Usage,

    /// reading the input or writing the output failed
    #[error("Unexpected error: {0}")]
    Io(#[from] std::io::Error),
}
