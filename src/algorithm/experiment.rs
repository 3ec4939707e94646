// Ejecuta el selector muchas veces sobre el mismo grafo y cuenta el tamaño
// de los conjuntos estables obtenidos. La variación entre corridas viene
// únicamente del proveedor de conjuntos independientes.
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::algorithm::independent::IndependentSetProvider;
use crate::algorithm::intersection::IntersectionGraph;
use crate::algorithm::stable::{select_stable_set, StableSetOutcome};
use crate::error::{check_unit_bound, DomError};

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct ExperimentReport {
    pub runs: usize,
    /// Corridas donde el conjunto independiente tenía < 3 nodos
    pub infeasible: usize,
    /// Sólo la semilla (ningún par cupo bajo la cota)
    pub below_three: usize,
    pub three: usize,
    pub five: usize,
    pub seven: usize,
    pub nine: usize,
    pub eleven_or_more: usize,
    #[serde(serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

fn serialize_secs<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

impl ExperimentReport {
    fn record(&mut self, size: usize) {
        match size {
            0..=2 => self.below_three += 1,
            3 => self.three += 1,
            5 => self.five += 1,
            7 => self.seven += 1,
            9 => self.nine += 1,
            _ => self.eleven_or_more += 1,
        }
    }

    /// Fracción de corridas en el bucket (0 si no hubo corridas).
    pub fn frequency(&self, count: usize) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            count as f64 / self.runs as f64
        }
    }

    /// (etiqueta, cantidad, frecuencia) por bucket, en orden de tamaño.
    pub fn buckets(&self) -> Vec<(&'static str, usize, f64)> {
        [
            ("infeasible", self.infeasible),
            ("1 domino", self.below_three),
            ("3 dominoes", self.three),
            ("5 dominoes", self.five),
            ("7 dominoes", self.seven),
            ("9 dominoes", self.nine),
            (">=11 dominoes", self.eleven_or_more),
        ]
        .into_iter()
        .map(|(label, count)| (label, count, self.frequency(count)))
        .collect()
    }
}

/// Corre `select_stable_set` `runs` veces y agrupa los tamaños en
/// {3, 5, 7, 9, >=11}. La cota se valida antes de la primera corrida.
pub fn run_experiment<P: IndependentSetProvider + ?Sized>(
    graph: &IntersectionGraph,
    provider: &mut P,
    total_surplus_bound: f64,
    runs: usize,
) -> Result<ExperimentReport, DomError> {
    check_unit_bound("total_surplus_bound", total_surplus_bound)?;
    let start = Instant::now();
    let mut report = ExperimentReport { runs, ..Default::default() };

    for run in 0..runs {
        match select_stable_set(graph, provider, total_surplus_bound)? {
            StableSetOutcome::Stable(s) => {
                debug!(
                    "[experiment] run {}: number of dominoes: {}, surplus: {:.4}",
                    run,
                    s.len(),
                    s.total_surplus
                );
                report.record(s.len());
            }
            StableSetOutcome::Infeasible => {
                debug!("[experiment] run {}: infeasible", run);
                report.infeasible += 1;
            }
        }
    }

    report.elapsed = start.elapsed();
    info!(
        "[experiment] {} runs in {:.5} s (3: {}, 5: {}, 7: {}, 9: {}, >=11: {}, infeasible: {})",
        runs,
        report.elapsed.as_secs_f64(),
        report.three,
        report.five,
        report.seven,
        report.nine,
        report.eleven_or_more,
        report.infeasible
    );
    Ok(report)
}
