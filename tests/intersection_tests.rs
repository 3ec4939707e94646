use std::io::Write;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use stableset::algorithm::{build_intersection_graph, IntersectionGraph};
use stableset::models::Domino;

const SCENARIO: &str = "\
scenario 4
0.1 1 1 1 2
0.2 1 1 3 4
0.3 1 1 5 6
0.4 1 1 2 7
";

fn random_dominoes(rng: &mut ChaCha8Rng, n: usize, universe: i64) -> Vec<Domino> {
    (0..n)
        .map(|i| {
            let a_len = rng.gen_range(1..3);
            let b_len = rng.gen_range(1..3);
            let a: Vec<i64> = (0..a_len).map(|_| rng.gen_range(0..universe)).collect();
            let b: Vec<i64> = (0..b_len).map(|_| rng.gen_range(0..universe)).collect();
            Domino::new(i, rng.gen_range(0.0..1.0), a, b)
        })
        .collect()
}

#[test]
fn test_scenario_has_single_edge() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(SCENARIO.as_bytes()).unwrap();
    f.flush().unwrap();

    let (g, stats) = build_intersection_graph(f.path(), 1.0, 4).unwrap();
    assert_eq!(stats.nodes, 4);
    assert_eq!(stats.edges, 1);
    assert_eq!(g.node_count(), 4);
    assert_eq!(g.edge_count(), 1);

    let nodes: Vec<_> = g.node_indices().collect();
    assert!(g.contains_edge(nodes[0], nodes[3]));
    assert!(g.contains_edge(nodes[3], nodes[0]));
    assert!(!g.contains_edge(nodes[0], nodes[1]));
    assert!(!g.contains_edge(nodes[1], nodes[2]));
}

#[test]
fn test_edges_match_vertex_overlap_exhaustively() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xD0_311);
    for _ in 0..20 {
        let doms = random_dominoes(&mut rng, 25, 40);
        let g = IntersectionGraph::build(doms);
        let nodes: Vec<_> = g.node_indices().collect();
        for (i, &u) in nodes.iter().enumerate() {
            for &v in &nodes[i + 1..] {
                let du = g.domino(u).unwrap();
                let dv = g.domino(v).unwrap();
                let overlap = du.vertices.intersection(&dv.vertices).next().is_some();
                assert_eq!(g.contains_edge(u, v), overlap, "pair ({}, {})", u.index(), v.index());
            }
        }
    }
}

#[test]
fn test_no_self_loops_or_duplicate_edges() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let g = IntersectionGraph::build(random_dominoes(&mut rng, 30, 15));
    let nodes: Vec<_> = g.node_indices().collect();
    // cada dominó comparte vértices consigo mismo, pero no hay lazos
    assert!(nodes.iter().all(|&u| !g.contains_edge(u, u)));
    // una arista por par adyacente: edge_count coincide con los pares conectados
    let adjacent_pairs = nodes
        .iter()
        .enumerate()
        .flat_map(|(i, &u)| nodes[i + 1..].iter().map(move |&v| (u, v)))
        .filter(|&(u, v)| g.contains_edge(u, v))
        .count();
    assert!(adjacent_pairs > 0);
    assert_eq!(g.edge_count(), adjacent_pairs);
    // y neighbors no repite vecinos
    for &u in &nodes {
        let nbs: Vec<_> = g.neighbors(u).collect();
        let unique: std::collections::HashSet<_> = nbs.iter().collect();
        assert_eq!(nbs.len(), unique.len());
    }
}

#[test]
fn test_node_ids_follow_acceptance_order() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(f, "x 3\n0.9 1 1 1 2\n0.1 1 1 3 4\n0.2 1 1 5 6\n").unwrap();
    f.flush().unwrap();

    let (g, _) = build_intersection_graph(f.path(), 0.5, 10).unwrap();
    let file_idx: Vec<usize> = g.node_indices().map(|n| g.domino(n).unwrap().file_index).collect();
    assert_eq!(file_idx, vec![1, 2]);
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn test_empty_graph() {
    let g = IntersectionGraph::build(Vec::new());
    assert_eq!(g.node_count(), 0);
    assert_eq!(g.edge_count(), 0);
}
