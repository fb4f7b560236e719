pub mod query;
pub mod collaboration;
pub mod road_map;
pub mod dijkstra;
pub mod disjoint_set;
pub mod spanning;
pub mod bridges;
pub mod ports;
