use std::fs;
use std::path::Path;

use bit_set::BitSet;

use crate::error::Result;
use crate::interference::InterferenceGraph;

/** Node Id (1-based, as written in the input file) */
pub type NodeId = usize;

/** Colour Id (0-based index in the colour alphabet) */
pub type ColourId = usize;

/// smallest node id accepted
pub const MIN_NODE:NodeId = 1;

/// largest node id accepted
pub const MAX_NODE:NodeId = 50;

/// number of colours in the alphabet ('A'..='Z')
pub const NB_COLOURS:usize = 26;

/// symbol of the first colour
const FIRST_SYMBOL:u8 = b'A';

/// true iff v is a valid node (or neighbour) id
pub fn in_node_range(v:NodeId) -> bool { (MIN_NODE..=MAX_NODE).contains(&v) }

/** symbol of a colour. colour 0 is 'A', colour 25 is 'Z'.

# Panics
 - if c is not smaller than NB_COLOURS
*/
pub fn colour_symbol(c:ColourId) -> char {
    assert!(c < NB_COLOURS, "colour_symbol: colour {} outside of the alphabet", c);
    (FIRST_SYMBOL + c as u8) as char
}

/** colour assignment of the nodes 1..=n of a graph.
colours[v-1]: colour of node v (None while not assigned)
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Colouring {
    colours: Vec<Option<ColourId>>,
}

impl Colouring {

    /** empty colouring for nodes 1..=n */
    pub fn new(n:usize) -> Self {
        Self { colours: vec![None ; n] }
    }

    /// number of nodes
    pub fn nb_vertices(&self) -> usize { self.colours.len() }

    /// colour of node v (None if not coloured or not a node)
    pub fn get(&self, v:NodeId) -> Option<ColourId> {
        v.checked_sub(1)
            .and_then(|i| self.colours.get(i))
            .copied()
            .flatten()
    }

    /// assigns colour c to node v
    ///
    /// # Panics
    /// - if v is not a node of the colouring
    pub fn set(&mut self, v:NodeId, c:ColourId) {
        self.colours[v-1] = Some(c);
    }

    /// number of distinct colours used
    pub fn nb_colours(&self) -> usize {
        self.colours.iter().flatten().copied().collect::<BitSet>().len()
    }

    /// (node, colour) pairs of the coloured nodes, by ascending node id
    pub fn iter(&self) -> impl Iterator<Item=(NodeId, ColourId)> + '_ {
        self.colours.iter().enumerate()
            .filter_map(|(i,c)| c.map(|c| (i+1, c)))
    }
}

/** result of the colouring checker */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// valid colouring, with its number of colours
    Ok(usize),
    /// node without colour
    NodeNotColoured(NodeId),
    /// a node shares its colour with one of its listed neighbours
    ConflictingEdge(NodeId, NodeId),
}

/**
checks a colouring against the graph:
 - every node is coloured
 - no node has the colour of a listed neighbour (neighbours that are not declared nodes are skipped)
*/
pub fn checker(inst:&InterferenceGraph, sol:&Colouring) -> CheckerResult {
    for u in inst.nodes() {
        let cu = match sol.get(u) {
            None => return CheckerResult::NodeNotColoured(u),
            Some(c) => c,
        };
        for v in inst.neighbors(u).iter().filter(|v| inst.contains(*v)) {
            if sol.get(v) == Some(cu) {
                return CheckerResult::ConflictingEdge(u, v);
            }
        }
    }
    CheckerResult::Ok(sol.nb_colours())
}

/** one line per node, by ascending id: the id immediately followed by its colour symbol */
pub fn colouring_to_string(sol:&Colouring) -> String {
    let mut res = String::default();
    for (v,c) in sol.iter() {
        res += format!("{}{}\n", v, colour_symbol(c)).as_str();
    }
    res
}

/** writes a colouring into a file (created or truncated), in a single write. */
pub fn write_colouring(filename:&Path, sol:&Colouring) -> Result<()> {
    fs::write(filename, colouring_to_string(sol))?;
    Ok(())
}
