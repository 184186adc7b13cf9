use std::cmp::Reverse;

use bit_set::BitSet;
use log::debug;

use crate::colour::{Colouring, ColourId, NodeId, NB_COLOURS, colour_symbol};
use crate::error::{Error, Result};
use crate::interference::InterferenceGraph;

/** ranks the nodes by number of neighbours (largest first), ties broken by the smallest id. */
pub fn rank_by_degree(inst:&InterferenceGraph) -> Vec<(NodeId, &BitSet)> {
    let mut res:Vec<(NodeId, &BitSet)> = inst.nodes()
        .map(|u| (u, inst.neighbors(u)))
        .collect();
    res.sort_by_key(|(u, neighbors)| (Reverse(neighbors.len()), *u));
    res
}

/** implements a greedy colouring following a fixed order.
    1. take the next node of the order
    2. collect the colours of its already coloured neighbours
    3. give it the first colour (A, B, ...) none of them uses

returns ColourSpaceExhausted if the neighbours of a node already use every colour.
*/
pub fn greedy_colour(inst:&InterferenceGraph, ranked:&[(NodeId, &BitSet)]) -> Result<Colouring> {
    let mut res = Colouring::new(inst.nb_vertices());
    for &(current_vertex, _) in ranked {
        let adj_colours:BitSet = inst.neighbors(current_vertex).iter()
            .filter_map(|v| res.get(v))
            .collect();
        let colour:ColourId = match (0..NB_COLOURS).find(|c| !adj_colours.contains(*c)) {
            None => return Err(Error::ColourSpaceExhausted { node: current_vertex }),
            Some(c) => c,
        };
        debug!("node {} -> {}", current_vertex, colour_symbol(colour));
        res.set(current_vertex, colour);
    }
    Ok(res)
}
