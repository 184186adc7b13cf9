use std::fs;
use std::path::Path;

use bit_set::BitSet;
use log::info;
use nom::IResult;
use nom::bytes::complete::{take_till, take_while};
use nom::character::complete::{char, digit1};
use nom::combinator::all_consuming;
use nom::multi::separated_list1;

use crate::colour::{NodeId, MIN_NODE, MAX_NODE, in_node_range};
use crate::error::{ParseError, Result};


/** models an interference graph whose nodes are 1..=n.  */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterferenceGraph {
    /// adj[v-1]: neighbour ids listed on the line of node v
    adj: Vec<BitSet>,
}

impl InterferenceGraph {

    /** constructor using the neighbour sets of nodes 1..=n */
    pub fn new(adj:Vec<BitSet>) -> Self {
        Self { adj }
    }

    /// number of nodes
    pub fn nb_vertices(&self) -> usize { self.adj.len() }

    /// node ids, ascending
    pub fn nodes(&self) -> impl Iterator<Item=NodeId> { 1..=self.adj.len() }

    /// true iff v is a declared node
    pub fn contains(&self, v:NodeId) -> bool { v >= 1 && v <= self.adj.len() }

    /// neighbours listed for node u
    ///
    /// # Panics
    /// - if u is not a declared node
    pub fn neighbors(&self, u:NodeId) -> &BitSet { &self.adj[u-1] }

    /// number of neighbours listed for node u
    pub fn degree(&self, u:NodeId) -> usize { self.neighbors(u).len() }

    /// true iff v is listed as a neighbour of u
    pub fn are_adjacent(&self, u:NodeId, v:NodeId) -> bool {
        self.contains(u) && self.neighbors(u).contains(v)
    }

    /// number of distinct edges (an edge declared from both ends counts once)
    pub fn nb_edges(&self) -> usize {
        let mut m = 0;
        for u in self.nodes() {
            for v in self.neighbors(u).iter() {
                if u < v || !self.are_adjacent(v, u) { m += 1; }
            }
        }
        m
    }

    /// true iff every edge between declared nodes is listed from both of its ends
    pub fn is_symmetric(&self) -> bool {
        self.nodes().all(|u| {
            self.neighbors(u).iter()
                .filter(|v| self.contains(*v))
                .all(|v| self.are_adjacent(v, u))
        })
    }

    /// logs statistics of the graph
    pub fn display_statistics(&self) {
        info!("\t{} \t vertices", self.nb_vertices());
        info!("\t{} \t edges", self.nb_edges());
        let degrees:Vec<usize> = self.nodes().map(|u| self.degree(u)).collect();
        if let (Some(min), Some(max)) = (degrees.iter().min(), degrees.iter().max()) {
            info!("\t{} \t min degree", min);
            info!("\t{} \t max degree", max);
        }
        if !self.is_symmetric() {
            info!("\tsome edges are only listed from one end");
        }
    }
}


/// reads an interference graph from a file
pub fn read_from_file(filename:&Path) -> Result<InterferenceGraph> {
    let content = fs::read_to_string(filename)?;
    Ok(parse(content.as_str())?)
}

/** parses an interference graph description: one line per node,
`node(,neighbour)*`, nodes declared in order 1, 2, 3...
Neighbour tokens that are not plain digit runs are ignored. */
pub fn parse(s:&str) -> std::result::Result<InterferenceGraph, ParseError> {
    let mut adj:Vec<BitSet> = Vec::new();
    for line in split_lines(s) {
        if !has_valid_characters(line) {
            return Err(ParseError::InvalidCharacter);
        }
        let tokens = match split_tokens(line.trim()) {
            Ok((_, tokens)) => tokens,
            Err(_) => return Err(ParseError::MalformedInteger),
        };
        let node = read_node(tokens[0])?;
        let expected = adj.len() + 1;
        if node < expected {
            return Err(ParseError::DuplicateNode(node));
        }
        if node > expected {
            return Err(ParseError::OutOfOrderNode { expected, found: node });
        }
        if node > MAX_NODE {
            return Err(ParseError::NodeOutOfRange);
        }
        let mut neighbours = BitSet::new();
        for token in tokens[1..].iter().filter(|t| is_number(t)) {
            match token.parse::<NodeId>() {
                Ok(v) if in_node_range(v) => { neighbours.insert(v); },
                _ => return Err(ParseError::NeighbourOutOfRange),
            }
        }
        adj.push(neighbours);
    }
    if adj.is_empty() {
        return Err(ParseError::FileEmpty);
    }
    Ok(InterferenceGraph::new(adj))
}

/** node id of a line (surrounding whitespace allowed).
Only the lower bound is checked here, the upper one comes after the order check. */
fn read_node(token:&str) -> std::result::Result<NodeId, ParseError> {
    let digits = token.trim();
    if !is_number(digits) {
        return Err(ParseError::MalformedInteger);
    }
    // a run of digits only fails to parse when it overflows
    match digits.parse::<NodeId>() {
        Ok(v) if v >= MIN_NODE => Ok(v),
        _ => Err(ParseError::NodeOutOfRange),
    }
}

/** splits a text in lines. "\n", "\r\n" and a lone "\r" all end a line,
a terminator at the end of the text does not start a new one. */
fn split_lines(s:&str) -> Vec<&str> {
    let mut res = Vec::new();
    let mut remaining = s;
    while !remaining.is_empty() {
        match remaining.find(|c:char| c == '\n' || c == '\r') {
            None => {
                res.push(remaining);
                remaining = "";
            },
            Some(i) => {
                res.push(&remaining[..i]);
                let terminator_len = if remaining[i..].starts_with("\r\n") { 2 } else { 1 };
                remaining = &remaining[i+terminator_len..];
            },
        }
    }
    res
}

/// true iff the line only contains digits, commas and whitespace
fn has_valid_characters(line:&str) -> bool {
    let res:IResult<&str, &str> = all_consuming(
        take_while(|c:char| c.is_ascii_digit() || c == ',' || c.is_whitespace())
    )(line);
    res.is_ok()
}

/// splits a line on commas (empty tokens are kept)
fn split_tokens(s:&str) -> IResult<&str, Vec<&str>> {
    all_consuming(separated_list1(char(','), take_till(|c| c == ',')))(s)
}

/// true iff the token is a non-empty run of digits
fn is_number(token:&str) -> bool {
    let res:IResult<&str, &str> = all_consuming(digit1)(token);
    res.is_ok()
}


#[cfg(test)]
mod tests {
    use super::*;

    fn neighbours(inst:&InterferenceGraph, u:NodeId) -> Vec<NodeId> {
        inst.neighbors(u).iter().collect()
    }

    #[test]
    fn test_read_instance() {
        let inst = read_from_file(Path::new("insts/triangle.txt")).unwrap();
        assert_eq!(inst.nb_vertices(), 3);
        assert_eq!(inst.nb_edges(), 3);
        assert_eq!(neighbours(&inst, 1), vec![2,3]);
        assert!(inst.is_symmetric());
    }

    #[test]
    fn test_read_missing_file() {
        let res = read_from_file(Path::new("insts/does-not-exist.txt"));
        assert!(matches!(res, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn test_read_empty_file() {
        let res = read_from_file(Path::new("insts/empty.txt"));
        assert!(matches!(res, Err(crate::error::Error::Parse(ParseError::FileEmpty))));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(""), Err(ParseError::FileEmpty));
    }

    #[test]
    fn test_blank_line_is_malformed() {
        assert_eq!(parse("\n"), Err(ParseError::MalformedInteger));
        assert_eq!(parse("1\n\n2\n"), Err(ParseError::MalformedInteger));
    }

    #[test]
    fn test_node_without_neighbours() {
        let inst = parse("1\n2\n").unwrap();
        assert_eq!(inst.nb_vertices(), 2);
        assert_eq!(inst.degree(1), 0);
        assert_eq!(inst.nb_edges(), 0);
    }

    #[test]
    fn test_invalid_character() {
        assert_eq!(parse("1,2\n2,x\n"), Err(ParseError::InvalidCharacter));
        assert_eq!(parse("1;2\n"), Err(ParseError::InvalidCharacter));
        assert_eq!(parse("-1\n"), Err(ParseError::InvalidCharacter));
    }

    #[test]
    fn test_first_offending_line_decides() {
        assert_eq!(parse("1\n1\nz\n"), Err(ParseError::DuplicateNode(1)));
        assert_eq!(parse("z\n1\n1\n"), Err(ParseError::InvalidCharacter));
    }

    #[test]
    fn test_out_of_order() {
        assert_eq!(
            parse("2,1\n"),
            Err(ParseError::OutOfOrderNode { expected: 1, found: 2 })
        );
        assert_eq!(
            parse("1\n2\n4\n"),
            Err(ParseError::OutOfOrderNode { expected: 3, found: 4 })
        );
    }

    #[test]
    fn test_duplicate() {
        assert_eq!(parse("1\n1\n"), Err(ParseError::DuplicateNode(1)));
        assert_eq!(parse("1\n2\n3\n2\n"), Err(ParseError::DuplicateNode(2)));
    }

    #[test]
    fn test_node_out_of_range() {
        assert_eq!(parse("0\n"), Err(ParseError::NodeOutOfRange));
        assert_eq!(parse("0,1\n"), Err(ParseError::NodeOutOfRange));
        assert_eq!(parse("99999999999999999999999\n"), Err(ParseError::NodeOutOfRange));
        let fifty_one:String = (1..=51).map(|v| format!("{}\n", v)).collect();
        assert_eq!(parse(fifty_one.as_str()), Err(ParseError::NodeOutOfRange));
    }

    #[test]
    fn test_large_node_out_of_order() {
        assert_eq!(
            parse("60\n"),
            Err(ParseError::OutOfOrderNode { expected: 1, found: 60 })
        );
        assert_eq!(
            parse("1\n99\n"),
            Err(ParseError::OutOfOrderNode { expected: 2, found: 99 })
        );
    }

    #[test]
    fn test_line_endings() {
        assert_eq!(split_lines(""), Vec::<&str>::new());
        assert_eq!(split_lines("\n"), vec![""]);
        assert_eq!(split_lines("1\r\n2\r3\n4"), vec!["1", "2", "3", "4"]);
        assert_eq!(split_lines("1\r\r2\n"), vec!["1", "", "2"]);
        let inst = parse("1,2\r2,1\r").unwrap();
        assert_eq!(inst.nb_vertices(), 2);
        assert_eq!(neighbours(&inst, 1), vec![2]);
        assert_eq!(neighbours(&inst, 2), vec![1]);
    }

    #[test]
    fn test_fifty_nodes_accepted() {
        let fifty:String = (1..=50).map(|v| format!("{},{}\n", v, 51-v)).collect();
        let inst = parse(fifty.as_str()).unwrap();
        assert_eq!(inst.nb_vertices(), 50);
        assert!(inst.are_adjacent(50, 1));
    }

    #[test]
    fn test_neighbour_out_of_range() {
        assert_eq!(parse("1,51\n"), Err(ParseError::NeighbourOutOfRange));
        assert_eq!(parse("1,0\n"), Err(ParseError::NeighbourOutOfRange));
        assert_eq!(parse("1,99999999999999999999999\n"), Err(ParseError::NeighbourOutOfRange));
    }

    #[test]
    fn test_malformed_node() {
        assert_eq!(parse(",2\n"), Err(ParseError::MalformedInteger));
        assert_eq!(parse("1 2,3\n"), Err(ParseError::MalformedInteger));
    }

    #[test]
    fn test_whitespace_around_node() {
        let inst = parse("  1 ,2\r\n2,1  \r\n").unwrap();
        assert_eq!(neighbours(&inst, 1), vec![2]);
        assert_eq!(neighbours(&inst, 2), vec![1]);
    }

    #[test]
    fn test_non_digit_neighbours_are_dropped() {
        let inst = parse("1, 2,,3 ,4\n").unwrap();
        assert_eq!(neighbours(&inst, 1), vec![4]);
    }

    #[test]
    fn test_duplicate_neighbours_collapse() {
        let inst = parse("1,2,2,2\n2,1\n").unwrap();
        assert_eq!(inst.degree(1), 1);
        assert_eq!(inst.nb_edges(), 1);
    }

    #[test]
    fn test_asymmetric_edges_are_kept() {
        let inst = parse("1,2\n2\n3,1,40\n").unwrap();
        assert!(inst.are_adjacent(1, 2));
        assert!(!inst.are_adjacent(2, 1));
        assert!(inst.are_adjacent(3, 40));
        assert!(!inst.is_symmetric());
        assert_eq!(inst.nb_edges(), 3);
    }
}
