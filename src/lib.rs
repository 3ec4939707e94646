// Biblioteca raíz del crate `stableset`.
// Lee certificados de dominós (.dom), construye el grafo de intersección y
// extrae conjuntos estables impares con surplus total acotado.
pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;

pub use algorithm::{
    build_intersection_graph, run_experiment, select_stable_set, IndependentSetProvider,
    IntersectionGraph, StableSet, StableSetOutcome,
};
pub use error::DomError;
