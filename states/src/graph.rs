use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::{Debug, Formatter},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopologyError<T>
where
    T: Debug,
{
    #[error("Cycle detected in dependency graph, from {:?}", .0)]
    CycleDetected(DepRoute<T>),
}

pub struct DepRoute<T> {
    // first is where the walk started, last closes the loop
    route: Vec<T>,
}

impl<T> DepRoute<T> {
    pub fn nodes(&self) -> &[T] {
        &self.route
    }
}

impl<T> Debug for DepRoute<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Some((last, init)) = self.route.split_last() else {
            return write!(f, "[]");
        };
        for item in init {
            write!(f, "{item:?} -> ")?;
        }
        write!(f, "{last:?}")
    }
}

/// Dependency graph: an edge `from -> to` means `to` reads `from`.
#[derive(Debug)]
pub struct Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    edges: BTreeMap<Node, BTreeSet<Node>>,
}

impl<Node> Default for Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Node> Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    pub fn new() -> Self {
        Self {
            edges: BTreeMap::new(),
        }
    }

    /// Adds `from -> to`. Repeating an edge is a no-op.
    pub fn route_to(&mut self, from: Node, to: Node) {
        self.edges.entry(from).or_default().insert(to);
        self.edges.entry(to).or_default();
    }

    /// Nodes that read `node` directly.
    pub fn successors(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        self.edges.get(&node).into_iter().flatten().copied()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Kahn's algorithm. Every node comes after all of the nodes it reads.
    pub fn topology_sort(&self) -> Result<Vec<Node>, TopologyError<Node>> {
        let mut in_degree: BTreeMap<Node, usize> = self.edges.keys().map(|n| (*n, 0)).collect();
        for targets in self.edges.values() {
            for to in targets {
                *in_degree.entry(*to).or_default() += 1;
            }
        }

        let mut ready: Vec<Node> = in_degree
            .iter()
            .filter(|(_, deg)| **deg == 0)
            .map(|(node, _)| *node)
            .collect();
        // pop from the back, keep the smallest node first
        ready.reverse();

        let mut sorted = Vec::with_capacity(in_degree.len());
        while let Some(node) = ready.pop() {
            sorted.push(node);
            for next in self.successors(node) {
                if let Some(deg) = in_degree.get_mut(&next) {
                    *deg -= 1;
                    if *deg == 0 {
                        ready.push(next);
                    }
                }
            }
        }

        if sorted.len() == in_degree.len() {
            return Ok(sorted);
        }

        let placed: BTreeSet<Node> = sorted.into_iter().collect();
        let remaining: Vec<Node> = in_degree
            .keys()
            .filter(|node| !placed.contains(node))
            .copied()
            .collect();
        let route = self.find_cycle(&remaining).unwrap_or(remaining);
        Err(TopologyError::CycleDetected(DepRoute { route }))
    }

    /// Walks successors among `nodes` until a node repeats.
    ///
    /// Only called with nodes left over by Kahn's algorithm, and every one of those has a
    /// predecessor among them, so walking predecessors would work just as well.
    fn find_cycle(&self, nodes: &[Node]) -> Option<Vec<Node>> {
        let allowed: BTreeSet<Node> = nodes.iter().copied().collect();
        let mut path: Vec<Node> = Vec::new();
        let mut on_path = BTreeSet::new();
        let mut current = *nodes.first()?;

        loop {
            if on_path.contains(&current) {
                let start = path.iter().position(|n| *n == current)?;
                let mut cycle = path.split_off(start);
                cycle.push(current);
                return Some(cycle);
            }
            on_path.insert(current);
            path.push(current);
            current = self.successors(current).find(|n| allowed.contains(n))?;
        }
    }
}
