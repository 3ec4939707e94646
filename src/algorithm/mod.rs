// Flujo: archivo .dom -> dominós -> grafo de intersección -> conjunto
// independiente maximal -> conjunto estable impar -> estadísticas.
pub mod domfile;
pub mod experiment;
pub mod independent;
pub mod intersection;
pub mod stable;

pub use domfile::{parse_dom_file, parse_dom_reader};
pub use experiment::{run_experiment, ExperimentReport};
pub use independent::{FirstFit, IndependentSetProvider, RandomizedGreedy};
pub use intersection::{build_intersection_graph, BuildStats, IntersectionGraph};
pub use stable::{select_from_independent, select_stable_set, StableSet, StableSetOutcome};
