//! Shortest routes on generated maps, checked against petgraph's Dijkstra
//! and against the accumulation rule hop by hop.

mod common;

use common::fixtures::{create_map, create_random_map, create_unit_square};
use graph_routes::domain::dijkstra::Accumulation;
use graph_routes::domain::query::{InvalidQuery, QueryOutcome};
use graph_routes::domain::road_map::WeightedGraph;
use petgraph::visit::EdgeRef;

const EPSILON: f64 = 1e-9;

fn hop_weight(map: &WeightedGraph, a: usize, b: usize, path: &[petgraph::graph::NodeIndex]) -> f64 {
    let edge = map
        .graph
        .find_edge(path[a], path[b])
        .expect("consecutive route stops share an edge");
    map.graph[edge]
}

#[test]
fn test_precise_distances_match_petgraph() {
    for seed in 0..20 {
        let map = create_random_map(seed, 9, 14);
        let names: Vec<String> = map.graph.node_weights().map(|v| v.name.clone()).collect();

        for from in &names {
            let start = map.get_vertex_by_name(from).unwrap();
            let expected = petgraph::algo::dijkstra(&map.graph, start, None, |e| *e.weight());

            for to in &names {
                let goal = map.get_vertex_by_name(to).unwrap();
                let outcome = map.shortest_path_with(from, to, Accumulation::Precise);
                match expected.get(&goal) {
                    Some(&distance) => {
                        let path = outcome.found().unwrap_or_else(|| {
                            panic!("seed {}: {} -> {} should be reachable", seed, from, to)
                        });
                        assert!(
                            (path.total_distance() - distance).abs() < EPSILON,
                            "seed {}: {} -> {} got {} expected {}",
                            seed,
                            from,
                            to,
                            path.total_distance(),
                            distance
                        );
                    }
                    None => assert_eq!(outcome, QueryOutcome::NoPath, "seed {}", seed),
                }
            }
        }
    }
}

#[test]
fn test_truncated_distances_follow_hops() {
    for seed in 0..20 {
        let map = create_random_map(seed, 9, 14);
        let names: Vec<String> = map.graph.node_weights().map(|v| v.name.clone()).collect();

        for from in &names {
            for to in &names {
                let Some(path) = map.shortest_path(from, to).found() else {
                    continue;
                };
                assert_eq!(path.vertices.len(), path.distances.len());
                assert_eq!(path.distances[0], 0.0);
                assert_eq!(map.name(path.vertices[0]), from.as_str());
                assert_eq!(map.name(*path.vertices.last().unwrap()), to.as_str());

                for i in 1..path.vertices.len() {
                    let weight = hop_weight(&map, i - 1, i, &path.vertices);
                    assert_eq!(
                        path.distances[i],
                        ((path.distances[i - 1] as f32) + (weight as f32)).trunc() as f64,
                        "seed {}: stop {} of {} -> {}",
                        seed,
                        i,
                        from,
                        to
                    );
                    assert!(path.distances[i] >= path.distances[i - 1]);
                }
            }
        }
    }
}

#[test]
fn test_truncated_never_exceeds_precise() {
    for seed in 0..10 {
        let map = create_random_map(seed, 8, 12);
        let names: Vec<String> = map.graph.node_weights().map(|v| v.name.clone()).collect();
        for from in &names {
            for to in &names {
                let truncated = map.shortest_path_with(from, to, Accumulation::Truncated);
                let precise = map.shortest_path_with(from, to, Accumulation::Precise);
                assert_eq!(truncated.is_found(), precise.is_found());
                if let (Some(t), Some(p)) = (truncated.found(), precise.found()) {
                    // Single precision weights may round up by less than 1e-3.
                    assert!(t.total_distance() <= p.total_distance() + 1e-3);
                }
            }
        }
    }
}

#[test]
fn test_repeated_queries_are_identical() {
    let map = create_random_map(42, 10, 16);
    let names: Vec<String> = map.graph.node_weights().map(|v| v.name.clone()).collect();
    let first: Vec<_> = names
        .iter()
        .map(|to| map.shortest_path(&names[0], to))
        .collect();
    let second: Vec<_> = names
        .iter()
        .map(|to| map.shortest_path(&names[0], to))
        .collect();
    assert_eq!(first, second);
}

#[test]
fn test_square_opposite_corner_tie_broken_by_name() {
    // A->C via B or via D both cost 2; B settles first.
    let map = create_unit_square();
    let path = map.shortest_path("A", "C").found().unwrap();
    assert_eq!(path.names(&map), vec!["A", "B", "C"]);
    assert_eq!(path.total_distance(), 2.0);
}

#[test]
fn test_truncated_length_just_below_whole_number_rounds_up() {
    let map = create_map(&[("A", 0.0, 0.0), ("B", 91.0, 4141.0)], &[("A", "B")]);
    let weight = map.edges().next().unwrap().weight;
    assert!(weight < 4142.0, "f64 length is {}", weight);

    let path = map.shortest_path("A", "B").found().unwrap();
    assert_eq!(path.total_distance(), 4142.0);
}

#[test]
fn test_invalid_and_unreachable_routes() {
    let map = create_map(
        &[("A", 0.0, 0.0), ("B", 3.0, 4.0), ("Far", 100.0, 100.0)],
        &[("A", "B")],
    );
    assert_eq!(map.shortest_path("A", "Far"), QueryOutcome::NoPath);
    assert_eq!(
        map.shortest_path("A", ""),
        QueryOutcome::Invalid(InvalidQuery::EmptyName)
    );
    assert_eq!(
        map.shortest_path("Nowhere", "A"),
        QueryOutcome::Invalid(InvalidQuery::UnknownName("Nowhere".to_string()))
    );
    let path = map.shortest_path("A", "B").found().unwrap();
    assert_eq!(path.distances, vec![0.0, 5.0]);
}
