//! Test fixture generators for integration tests.
#![allow(dead_code)]

use graph_routes::domain::collaboration::CollaborationGraph;
use graph_routes::domain::road_map::WeightedGraph;

pub const ACTORS_TSV: &str = "Actor/Actress\tMovie\tYear
Kevin Bacon\tFootloose\t1984
Lori Singer\tFootloose\t1984
Lori Singer\tShort Cuts\t1993
Tim Robbins\tShort Cuts\t1993
Tim Robbins\tMystic River\t2003
Kevin Bacon\tMystic River\t2003
Sean Penn\tMystic River\t2003
Sean Penn\tMilk\t2008
James Franco\tMilk\t2008
Hermit\tNobody Watched\t1970
";

/// Alice–M1–Bob–M2–Carol, plus Dan who shares nothing.
pub fn create_chain_cast() -> CollaborationGraph {
    let mut graph = CollaborationGraph::new();
    graph.add_appearance("Alice", "M1", 2000);
    graph.add_appearance("Bob", "M1", 2000);
    graph.add_appearance("Bob", "M2", 2001);
    graph.add_appearance("Carol", "M2", 2001);
    graph.add_appearance("Dan", "Solo", 1999);
    graph
}

/// Build a map from `(name, x, y)` vertices and `(a, b)` edges.
pub fn create_map(vertices: &[(&str, f64, f64)], edges: &[(&str, &str)]) -> WeightedGraph {
    let mut map = WeightedGraph::new();
    for &(name, x, y) in vertices {
        map.add_vertex(name, x, y);
    }
    for &(a, b) in edges {
        map.add_edge(a, b).expect("fixture edge endpoints exist");
    }
    map
}

/// Unit square A-B-C-D-A.
pub fn create_unit_square() -> WeightedGraph {
    create_map(
        &[("A", 0.0, 0.0), ("B", 1.0, 0.0), ("C", 1.0, 1.0), ("D", 0.0, 1.0)],
        &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")],
    )
}

/// Deterministic pseudo-random generator for fixture graphs.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407))
    }

    pub fn next_below(&mut self, bound: u64) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) % bound
    }
}

/// Small random map: integer coordinates on a 10x10 grid, possibly
/// disconnected, with parallel edges and self loops allowed.
pub fn create_random_map(seed: u64, vertex_count: usize, edge_count: usize) -> WeightedGraph {
    let mut rng = Lcg::new(seed);
    let mut map = WeightedGraph::new();
    let mut ids = Vec::new();
    for i in 0..vertex_count {
        let x = rng.next_below(10) as f64;
        let y = rng.next_below(10) as f64;
        ids.push(map.add_vertex(&format!("v{}", i), x, y).unwrap());
    }
    for _ in 0..edge_count {
        let a = ids[rng.next_below(vertex_count as u64) as usize];
        let b = ids[rng.next_below(vertex_count as u64) as usize];
        map.connect(a, b);
    }
    map
}
