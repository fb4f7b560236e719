//! Actor-to-actor search over datasets built from text.

mod common;

use common::fixtures::{ACTORS_TSV, create_chain_cast};
use graph_routes::adapters::dataset::cast::build_collaboration_graph;
use graph_routes::domain::query::{InvalidQuery, QueryOutcome};

#[test]
fn test_two_hop_connection_through_dataset() {
    let (graph, report) = build_collaboration_graph(ACTORS_TSV);
    assert_eq!(report.lines, 11);
    assert_eq!(report.accepted, 10);
    assert_eq!(report.skipped, 0);

    let path = graph
        .find_path("Kevin Bacon", "James Franco")
        .found()
        .expect("Kevin Bacon and James Franco are connected");
    assert_eq!(
        path.to_string(),
        "(Kevin Bacon)--[Mystic River#@2003]-->(Sean Penn)--[Milk#@2008]-->(James Franco)"
    );
    assert_eq!(path.len(), 2);
    assert_eq!(path.destination(), "James Franco");
}

#[test]
fn test_direct_costar_beats_longer_chain() {
    let (graph, _) = build_collaboration_graph(ACTORS_TSV);
    // Lori Singer -> Short Cuts -> Tim Robbins also exists, but Mystic River is one hop.
    let path = graph.find_path("Kevin Bacon", "Tim Robbins").found().unwrap();
    assert_eq!(
        path.to_string(),
        "(Kevin Bacon)--[Mystic River#@2003]-->(Tim Robbins)"
    );
}

#[test]
fn test_path_is_symmetric_in_length() {
    let (graph, _) = build_collaboration_graph(ACTORS_TSV);
    let actors = ["Kevin Bacon", "Lori Singer", "Tim Robbins", "Sean Penn", "James Franco"];
    for from in actors {
        for to in actors {
            let there = graph.find_path(from, to).found().unwrap();
            let back = graph.find_path(to, from).found().unwrap();
            assert_eq!(
                there.len(),
                back.len(),
                "hop count differs between {} -> {} and back",
                from,
                to
            );
        }
    }
}

#[test]
fn test_each_hop_is_a_shared_movie() {
    let (graph, _) = build_collaboration_graph(ACTORS_TSV);
    let path = graph.find_path("Lori Singer", "James Franco").found().unwrap();

    let mut previous = path.origin.clone();
    for hop in &path.hops {
        let movie = graph.movie(graph.get_movie_by_key(&hop.movie).unwrap());
        let cast: Vec<&str> = movie
            .cast()
            .iter()
            .map(|&a| graph.actor(a).name.as_str())
            .collect();
        assert!(cast.contains(&previous.as_str()), "{} not in {}", previous, hop.movie);
        assert!(cast.contains(&hop.actor.as_str()), "{} not in {}", hop.actor, hop.movie);
        previous = hop.actor.clone();
    }
}

#[test]
fn test_isolated_actor_has_no_path() {
    let (graph, _) = build_collaboration_graph(ACTORS_TSV);
    assert_eq!(graph.find_path("Kevin Bacon", "Hermit"), QueryOutcome::NoPath);

    let chain = create_chain_cast();
    assert_eq!(chain.find_path("Alice", "Dan"), QueryOutcome::NoPath);
}

#[test]
fn test_invalid_queries() {
    let graph = create_chain_cast();
    assert_eq!(
        graph.find_path("", "Alice"),
        QueryOutcome::Invalid(InvalidQuery::EmptyName)
    );
    assert_eq!(
        graph.find_path("Alice", "Nobody"),
        QueryOutcome::Invalid(InvalidQuery::UnknownName("Nobody".to_string()))
    );
}

#[test]
fn test_self_query_is_single_actor() {
    let graph = create_chain_cast();
    let path = graph.find_path("Carol", "Carol").found().unwrap();
    assert!(path.is_empty());
    assert_eq!(path.to_string(), "(Carol)");
}

#[test]
fn test_searches_do_not_disturb_each_other() {
    let graph = create_chain_cast();
    let first = graph.find_path("Alice", "Carol");
    let _ = graph.find_path("Carol", "Dan");
    let _ = graph.find_path("Bob", "Alice");
    assert_eq!(graph.find_path("Alice", "Carol"), first);
    assert_eq!(
        first.found().unwrap().to_string(),
        "(Alice)--[M1#@2000]-->(Bob)--[M2#@2001]-->(Carol)"
    );
}

#[test]
fn test_same_title_different_year_are_distinct_movies() {
    let (graph, _) = build_collaboration_graph(
        "Actor\tMovie\tYear\nA\tHamlet\t1948\nB\tHamlet\t1996\nB\tOther\t2000\nC\tOther\t2000\n",
    );
    assert_eq!(graph.movie_count(), 3);
    let path = graph.find_path("A", "C");
    assert_eq!(path, QueryOutcome::NoPath);
}
