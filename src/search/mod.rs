//! Colouring heuristics for interference graphs.

/// degree ranking and greedy colouring
pub mod greedy_degree;
