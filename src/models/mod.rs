// Estructuras de datos principales
use std::collections::HashSet;

/// Etiqueta de vértice de la instancia TSP (ciudad del tour).
pub type Vertex = i64;

/// Un dominó del certificado: dos conjuntos disjuntos de vértices ("teeth")
/// y su surplus. Inmutable una vez creado; el grafo lo guarda como peso de nodo.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Domino {
    /// Posición (0-based) del registro dentro del archivo .dom
    pub file_index: usize,
    pub surplus: f64,
    /// Tamaños declarados en la línea (Asize, Bsize)
    pub a_size: usize,
    pub b_size: usize,
    pub teeth_a: HashSet<Vertex>,
    pub teeth_b: HashSet<Vertex>,
    /// teeth_a ∪ teeth_b
    pub vertices: HashSet<Vertex>,
}

impl Domino {
    pub fn new(
        file_index: usize,
        surplus: f64,
        teeth_a: Vec<Vertex>,
        teeth_b: Vec<Vertex>,
    ) -> Self {
        let a_size = teeth_a.len();
        let b_size = teeth_b.len();
        let teeth_a: HashSet<Vertex> = teeth_a.into_iter().collect();
        let teeth_b: HashSet<Vertex> = teeth_b.into_iter().collect();
        let vertices = teeth_a.union(&teeth_b).copied().collect();
        Domino { file_index, surplus, a_size, b_size, teeth_a, teeth_b, vertices }
    }

    /// True si los conjuntos de vértices de ambos dominós se intersectan.
    pub fn intersects(&self, other: &Domino) -> bool {
        // HashSet::is_disjoint ya itera sobre el conjunto más pequeño
        !self.vertices.is_disjoint(&other.vertices)
    }

    /// True si A y B comparten algún vértice (viola el contrato de entrada).
    pub fn teeth_overlap(&self) -> bool {
        !self.teeth_a.is_disjoint(&self.teeth_b)
    }
}
