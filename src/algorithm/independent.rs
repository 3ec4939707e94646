// Proveedores de conjuntos independientes maximales.
//
// El selector de conjuntos estables no depende de cómo se obtiene el conjunto
// independiente; sólo exige que sea independiente y maximal. Se inyecta como
// trait para poder fijar semillas o usar mocks en las pruebas.
use petgraph::graph::NodeIndex;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::algorithm::intersection::IntersectionGraph;

pub trait IndependentSetProvider {
    /// Devuelve un conjunto independiente maximal (no necesariamente máximo).
    /// Llamadas repetidas sobre el mismo grafo pueden devolver conjuntos distintos.
    ///
    /// Cada índice debe pertenecer a `graph` y aparecer una sola vez; el
    /// selector rechaza con `InvalidArgument` lo que no cumpla.
    fn maximal_independent_set(&mut self, graph: &IntersectionGraph) -> Vec<NodeIndex>;
}

/// Recorre los nodos en el orden dado y acepta cada uno que no sea vecino de
/// uno ya aceptado. El resultado siempre es maximal.
fn greedy_scan(graph: &IntersectionGraph, order: &[NodeIndex]) -> Vec<NodeIndex> {
    let mut blocked = vec![false; graph.node_count()];
    let mut chosen = Vec::new();
    for &node in order {
        if blocked[node.index()] {
            continue;
        }
        chosen.push(node);
        blocked[node.index()] = true;
        for nb in graph.neighbors(node) {
            blocked[nb.index()] = true;
        }
    }
    chosen
}

/// Greedy aleatorio: baraja los nodos y aplica `greedy_scan`. Equivale a
/// elegir repetidamente un nodo al azar y descartar sus vecinos.
#[derive(Debug, Clone)]
pub struct RandomizedGreedy {
    rng: ChaCha8Rng,
}

impl RandomizedGreedy {
    /// Semilla fija: la secuencia de conjuntos es reproducible.
    pub fn seeded(seed: u64) -> Self {
        RandomizedGreedy { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn from_entropy() -> Self {
        RandomizedGreedy { rng: ChaCha8Rng::from_entropy() }
    }

    /// `Some(seed)` -> reproducible, `None` -> entropía del sistema.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::from_entropy(),
        }
    }
}

impl IndependentSetProvider for RandomizedGreedy {
    fn maximal_independent_set(&mut self, graph: &IntersectionGraph) -> Vec<NodeIndex> {
        let mut order: Vec<NodeIndex> = graph.node_indices().collect();
        order.shuffle(&mut self.rng);
        greedy_scan(graph, &order)
    }
}

/// Determinista: recorre los nodos por índice. Útil para reproducir resultados
/// sin RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFit;

impl IndependentSetProvider for FirstFit {
    fn maximal_independent_set(&mut self, graph: &IntersectionGraph) -> Vec<NodeIndex> {
        let order: Vec<NodeIndex> = graph.node_indices().collect();
        greedy_scan(graph, &order)
    }
}
