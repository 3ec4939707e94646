// Grafo de intersección de dominós: un nodo por dominó aceptado, una arista
// entre dos dominós si sus conjuntos de vértices se intersectan.
use std::path::Path;
use std::time::{Duration, Instant};

use petgraph::graph::{NodeIndex, UnGraph};
use tracing::info;

use crate::algorithm::domfile::parse_dom_file;
use crate::error::DomError;
use crate::models::Domino;

/// Grafo de sólo lectura una vez construido. Los índices de nodo siguen el
/// orden de aceptación del parser (0, 1, 2, ...).
#[derive(Debug, Clone)]
pub struct IntersectionGraph {
    graph: UnGraph<Domino, ()>,
}

/// Resumen de la construcción: nodos, aristas y tiempo total (lectura + grafo).
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct BuildStats {
    pub nodes: usize,
    pub edges: usize,
    #[serde(serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

fn serialize_secs<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

impl IntersectionGraph {
    /// Construye el grafo probando cada par no ordenado exactamente una vez: O(n²).
    pub fn build(dominoes: Vec<Domino>) -> Self {
        let mut graph = UnGraph::<Domino, ()>::with_capacity(dominoes.len(), 0);
        let nodes: Vec<NodeIndex> = dominoes.into_iter().map(|d| graph.add_node(d)).collect();

        for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                if graph[nodes[i]].intersects(&graph[nodes[j]]) {
                    graph.add_edge(nodes[i], nodes[j], ());
                }
            }
        }

        IntersectionGraph { graph }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn domino(&self, node: NodeIndex) -> Option<&Domino> {
        self.graph.node_weight(node)
    }

    pub fn contains_edge(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.graph.contains_edge(a, b)
    }

    pub fn neighbors(&self, node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors(node)
    }

    /// True si ningún par de `nodes` es adyacente.
    pub fn is_independent(&self, nodes: &[NodeIndex]) -> bool {
        nodes.iter().enumerate().all(|(i, &u)| {
            nodes[i + 1..].iter().all(|&v| u != v && !self.contains_edge(u, v))
        })
    }
}

/// Lee `path` y construye el grafo de intersección sobre los dominós con
/// surplus <= `surplus_bound`, deteniéndose en `node_cap` nodos.
///
/// Ejemplo: `build_intersection_graph("pr76.dom", 0.5, 5000)`.
/// Los mejores valores de `surplus_bound` y `node_cap` dependen del archivo.
pub fn build_intersection_graph<P: AsRef<Path>>(
    path: P,
    surplus_bound: f64,
    node_cap: usize,
) -> Result<(IntersectionGraph, BuildStats), DomError> {
    let start = Instant::now();
    let dominoes = parse_dom_file(path.as_ref(), surplus_bound, node_cap)?;
    info!("[intersection] number of nodes in the graph: {}", dominoes.len());

    let graph = IntersectionGraph::build(dominoes);
    let stats = BuildStats {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        elapsed: start.elapsed(),
    };
    info!(
        "[intersection] number of edges in the graph: {} (built in {:.5} s)",
        stats.edges,
        stats.elapsed.as_secs_f64()
    );
    Ok((graph, stats))
}
