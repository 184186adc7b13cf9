//! Greedy colouring of small interference graphs

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// colours, colourings, checker and solution writer
pub mod colour;

/// error types of the colouring pipeline
pub mod error;

/// read interference graph descriptions
pub mod interference;

/// helper and utility methods for executables
pub mod util;

/// colouring heuristics
pub mod search;
