// Parámetros de ejecución. Se pueden fijar por línea de comandos o por
// variables de entorno (STABLESET_*), con un `.env` opcional cargado al inicio.
use crate::algorithm::RandomizedGreedy;
use crate::error::{check_unit_bound, DomError};

pub const DEFAULT_SURPLUS_BOUND: f64 = 0.5;
pub const DEFAULT_NODE_CAP: usize = 5000;
pub const DEFAULT_TOTAL_SURPLUS_BOUND: f64 = 0.75;
pub const DEFAULT_RUNS: usize = 100;

/// Carga `.env` si existe; la ausencia del archivo no es un error.
pub fn load_dotenv() {
    let _ = dotenv::dotenv();
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Sólo se consideran dominós con surplus <= surplus_bound
    pub surplus_bound: f64,
    /// Máximo de nodos del grafo (la lectura se detiene al alcanzarlo)
    pub node_cap: usize,
    /// Cota estricta para el surplus total del conjunto estable
    pub total_surplus_bound: f64,
    pub runs: usize,
    /// Semilla del proveedor aleatorio; None = entropía
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            surplus_bound: DEFAULT_SURPLUS_BOUND,
            node_cap: DEFAULT_NODE_CAP,
            total_surplus_bound: DEFAULT_TOTAL_SURPLUS_BOUND,
            runs: DEFAULT_RUNS,
            seed: None,
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), DomError> {
        check_unit_bound("surplus_bound", self.surplus_bound)?;
        check_unit_bound("total_surplus_bound", self.total_surplus_bound)?;
        if self.node_cap == 0 {
            return Err(DomError::InvalidArgument("node_cap must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn provider(&self) -> RandomizedGreedy {
        RandomizedGreedy::new(self.seed)
    }
}
