// Selección de un conjunto estable impar con surplus total acotado.
use petgraph::graph::NodeIndex;

use crate::algorithm::independent::IndependentSetProvider;
use crate::algorithm::intersection::IntersectionGraph;
use crate::error::{check_unit_bound, DomError};

/// Conjunto estable impar: `candidate` ordenado por surplus ascendente y su
/// surplus total. Se crea de nuevo en cada llamada.
#[derive(Debug, Clone, PartialEq)]
pub struct StableSet {
    pub candidate: Vec<NodeIndex>,
    pub total_surplus: f64,
}

impl StableSet {
    pub fn len(&self) -> usize {
        self.candidate.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidate.is_empty()
    }

    /// Índices de nodo como `usize` (orden de aceptación del parser).
    pub fn node_ids(&self) -> Vec<usize> {
        self.candidate.iter().map(|n| n.index()).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StableSetOutcome {
    Stable(StableSet),
    /// El conjunto independiente recibido tiene menos de 3 nodos.
    Infeasible,
}

impl StableSetOutcome {
    pub fn stable(self) -> Option<StableSet> {
        match self {
            StableSetOutcome::Stable(s) => Some(s),
            StableSetOutcome::Infeasible => None,
        }
    }

    pub fn is_infeasible(&self) -> bool {
        matches!(self, StableSetOutcome::Infeasible)
    }
}

/// Construye el conjunto estable impar a partir de un conjunto independiente.
///
/// Ordena por surplus, toma el de menor surplus como semilla y luego acepta
/// pares consecutivos `(sorted[1], sorted[2])`, `(sorted[3], sorted[4])`, ...
/// mientras `total + par < total_surplus_bound`. El primer par que no cabe
/// termina la búsqueda (sin backtracking), así que el tamaño siempre es impar.
///
/// Falla con `InvalidArgument` si la cota no está en [0, 1] o si
/// `independent` trae nodos ajenos al grafo o repetidos.
pub fn select_from_independent(
    graph: &IntersectionGraph,
    independent: &[NodeIndex],
    total_surplus_bound: f64,
) -> Result<StableSetOutcome, DomError> {
    check_unit_bound("total_surplus_bound", total_surplus_bound)?;

    let mut seen = vec![false; graph.node_count()];
    let mut sorted: Vec<(NodeIndex, f64)> = Vec::with_capacity(independent.len());
    for &node in independent {
        let domino = graph.domino(node).ok_or_else(|| {
            DomError::InvalidArgument(format!("node {} is not in the graph", node.index()))
        })?;
        if std::mem::replace(&mut seen[node.index()], true) {
            return Err(DomError::InvalidArgument(format!(
                "node {} appears twice in the independent set",
                node.index()
            )));
        }
        sorted.push((node, domino.surplus));
    }

    if sorted.len() < 3 {
        return Ok(StableSetOutcome::Infeasible);
    }
    sorted.sort_by(|a, b| a.1.total_cmp(&b.1));

    let (seed, seed_surplus) = sorted[0];
    let mut candidate = vec![seed];
    let mut total_surplus = seed_surplus;

    for pair in sorted[1..].chunks_exact(2) {
        let pair_sum = pair[0].1 + pair[1].1;
        if total_surplus + pair_sum < total_surplus_bound {
            candidate.push(pair[0].0);
            candidate.push(pair[1].0);
            total_surplus += pair_sum;
        } else {
            break;
        }
    }

    Ok(StableSetOutcome::Stable(StableSet { candidate, total_surplus }))
}

/// Pide un conjunto independiente maximal al proveedor y selecciona sobre él.
pub fn select_stable_set<P: IndependentSetProvider + ?Sized>(
    graph: &IntersectionGraph,
    provider: &mut P,
    total_surplus_bound: f64,
) -> Result<StableSetOutcome, DomError> {
    check_unit_bound("total_surplus_bound", total_surplus_bound)?;
    let independent = provider.maximal_independent_set(graph);
    select_from_independent(graph, &independent, total_surplus_bound)
}
