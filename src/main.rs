// --- stableset: grafo de intersección de dominós y conjuntos estables impares ---

use std::error::Error;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde_json::json;

use stableset::algorithm::{
    build_intersection_graph, run_experiment, select_stable_set, StableSetOutcome,
};
use stableset::config::{self, RunConfig};

#[derive(Parser, Debug)]
#[command(name = "stableset", about = "Odd stable sets over domino intersection graphs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Construye el grafo e informa nodos, aristas y tiempo
    Graph(CommonArgs),
    /// Extrae un conjunto estable impar
    Select(CommonArgs),
    /// Repite la selección y reporta la distribución de tamaños
    Experiment {
        #[command(flatten)]
        common: CommonArgs,
        #[arg(long, env = "STABLESET_RUNS", default_value_t = config::DEFAULT_RUNS)]
        runs: usize,
    },
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Archivo .dom
    file: PathBuf,
    #[arg(long, env = "STABLESET_SURPLUS_BOUND", default_value_t = config::DEFAULT_SURPLUS_BOUND)]
    surplus_bound: f64,
    #[arg(long, env = "STABLESET_NODE_CAP", default_value_t = config::DEFAULT_NODE_CAP)]
    node_cap: usize,
    #[arg(
        long,
        env = "STABLESET_TOTAL_SURPLUS_BOUND",
        default_value_t = config::DEFAULT_TOTAL_SURPLUS_BOUND
    )]
    total_surplus_bound: f64,
    #[arg(long, env = "STABLESET_SEED")]
    seed: Option<u64>,
    /// Imprime el resultado como JSON
    #[arg(long)]
    json: bool,
}

impl CommonArgs {
    fn run_config(&self, runs: usize) -> RunConfig {
        RunConfig {
            surplus_bound: self.surplus_bound,
            node_cap: self.node_cap,
            total_surplus_bound: self.total_surplus_bound,
            runs,
            seed: self.seed,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    config::load_dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let (common, runs) = match &cli.command {
        Command::Graph(c) | Command::Select(c) => (c, config::DEFAULT_RUNS),
        Command::Experiment { common, runs } => (common, *runs),
    };
    let cfg = common.run_config(runs);
    cfg.validate()?;

    let (graph, stats) = build_intersection_graph(&common.file, cfg.surplus_bound, cfg.node_cap)?;

    match &cli.command {
        Command::Graph(_) => {
            if common.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("number of nodes in the graph G: {}", stats.nodes);
                println!("number of edges in the graph G: {}", stats.edges);
                println!("running time: {:.5} seconds", stats.elapsed.as_secs_f64());
            }
        }
        Command::Select(_) => {
            let mut provider = cfg.provider();
            match select_stable_set(&graph, &mut provider, cfg.total_surplus_bound)? {
                StableSetOutcome::Stable(s) => {
                    let file_indices: Vec<usize> = s
                        .candidate
                        .iter()
                        .filter_map(|&n| graph.domino(n).map(|d| d.file_index))
                        .collect();
                    if common.json {
                        let out = json!({
                            "candidate": s.node_ids(),
                            "file_indices": file_indices,
                            "total_surplus": s.total_surplus,
                        });
                        println!("{}", serde_json::to_string_pretty(&out)?);
                    } else {
                        println!(
                            "number of dominoes: {}, surplus: {:.4}",
                            s.len(),
                            s.total_surplus
                        );
                        println!("dominoes (file records): {:?}", file_indices);
                    }
                }
                StableSetOutcome::Infeasible => {
                    if common.json {
                        println!("{}", json!({ "infeasible": true }));
                    } else {
                        println!("infeasible: maximal independent set has fewer than 3 dominoes");
                    }
                }
            }
        }
        Command::Experiment { .. } => {
            let mut provider = cfg.provider();
            let report = run_experiment(&graph, &mut provider, cfg.total_surplus_bound, cfg.runs)?;
            if common.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for (label, count, freq) in report.buckets() {
                    println!("{}: {}, which is {:.3}", label, count, freq);
                }
                println!("running time: {:.5} seconds", report.elapsed.as_secs_f64());
            }
        }
    }

    Ok(())
}
