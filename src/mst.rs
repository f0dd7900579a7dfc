//! Weighted room graphs and Prim's minimum spanning tree.

use crate::coord::Coord2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub to: usize,
    pub weight: u32,
}

/// Undirected graph over room centers, stored as adjacency lists. Every edge
/// appears in the lists of both endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    pub vertices: Vec<Coord2>,
    pub adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    pub fn new(vertices: Vec<Coord2>) -> Self {
        let adjacency = vec![Vec::new(); vertices.len()];
        Self {
            vertices,
            adjacency,
        }
    }

    /// Complete graph weighted by Manhattan distance.
    pub fn complete(points: &[Coord2]) -> Self {
        let mut graph = Graph::new(points.to_vec());
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                graph.add_edge(i, j, points[i].manhattan_distance(points[j]));
            }
        }
        graph
    }

    pub fn add_edge(&mut self, from: usize, to: usize, weight: u32) {
        self.adjacency[from].push(Edge { to, weight });
        self.adjacency[to].push(Edge { to: from, weight });
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Each undirected edge once, as `(lower, higher, weight)` index pairs.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(from, edges)| {
            edges
                .iter()
                .filter(move |e| from < e.to)
                .map(move |e| (from, e.to, e.weight))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    pub fn total_weight(&self) -> u64 {
        self.edges().map(|(_, _, w)| w as u64).sum()
    }

    /// Prim's algorithm from vertex 0.
    ///
    /// Each round scans the edges of every visited vertex for the lightest one
    /// leading to an unvisited vertex; ties go to the first edge found. Stops
    /// early, keeping the partial tree, if no crossing edge is left.
    pub fn minimum_spanning_tree(&self) -> Graph {
        let count = self.vertex_count();
        let mut tree = Graph::new(self.vertices.clone());
        if count == 0 {
            return tree;
        }

        let mut visited = vec![false; count];
        visited[0] = true;
        let mut visited_count = 1;

        while visited_count < count {
            let mut best: Option<(usize, Edge)> = None;
            for (from, edges) in self.adjacency.iter().enumerate() {
                if !visited[from] {
                    continue;
                }
                for edge in edges {
                    if visited[edge.to] {
                        continue;
                    }
                    if best.map_or(true, |(_, b)| edge.weight < b.weight) {
                        best = Some((from, *edge));
                    }
                }
            }

            let Some((from, edge)) = best else {
                log::debug!(
                    "graph is disconnected, spanning tree covers {visited_count} of {count} vertices"
                );
                break;
            };
            visited[edge.to] = true;
            visited_count += 1;
            tree.add_edge(from, edge.to, edge.weight);
        }

        tree
    }
}

/// Minimum spanning tree of the complete Manhattan graph over `points`.
pub fn build_minimum_spanning_tree(points: &[Coord2]) -> Graph {
    Graph::complete(points).minimum_spanning_tree()
}
