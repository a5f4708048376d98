use std::fmt::Write as _;
use std::fs;
use std::process;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};

use circuits::{
    algorithm::paton, count_all_sccs, count_sccs, cycle_summary, find_all_sccs, find_sccs,
    find_simple_cycles, Algorithm, DiGraph, UnGraph,
};

/// Parse an integer edge-list file: one "u v" pair per line, a single
/// integer declares an isolated vertex, '#' starts a comment.
fn parse_graph_file(path: &str) -> Vec<(u64, Option<u64>)> {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        process::exit(1);
    });

    let mut entries = Vec::new();
    for (lineno, raw) in text.lines().enumerate() {
        let line = match raw.find('#') {
            Some(i) => &raw[..i],
            None => raw,
        };
        let mut fields = line.split_whitespace();
        let Some(first) = fields.next() else {
            continue;
        };
        let parse = |s: &str| -> u64 {
            s.parse().unwrap_or_else(|_| {
                eprintln!("{}:{}: invalid vertex '{}'", path, lineno + 1, s);
                process::exit(1);
            })
        };
        let u = parse(first);
        let v = fields.next().map(parse);
        if fields.next().is_some() {
            eprintln!("{}:{}: expected at most two vertices", path, lineno + 1);
            process::exit(1);
        }
        entries.push((u, v));
    }
    entries
}

fn directed_graph(entries: &[(u64, Option<u64>)]) -> DiGraph<u64> {
    let mut g = DiGraph::new();
    for &(u, v) in entries {
        match v {
            Some(v) => {
                g.add_edge(u, v);
            }
            None => {
                g.add_vertex(u);
            }
        }
    }
    g
}

fn undirected_graph(entries: &[(u64, Option<u64>)]) -> UnGraph<u64> {
    let mut g = UnGraph::new();
    for &(u, v) in entries {
        match v {
            Some(v) => {
                g.add_edge(u, v);
            }
            None => {
                g.add_vertex(u);
            }
        }
    }
    g
}

fn format_cycle(cycle: &[u64]) -> String {
    let mut s = String::new();
    for (i, v) in cycle.iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        let _ = write!(s, "{}", v);
    }
    s
}

fn print_cycles(cycles: &[Vec<u64>], limit: usize) {
    let shown = cycles.len().min(limit);
    if shown == 0 {
        return;
    }
    println!("First {} cycle(s):", shown);
    for cycle in &cycles[..shown] {
        println!("  {}", format_cycle(cycle));
    }
    if cycles.len() > shown {
        println!("  ... {} more", cycles.len() - shown);
    }
}

// ── CLI types ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    Tiernan,
    Tarjan,
    Johnson,
    SzwarcfiterLauer,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(a: AlgorithmArg) -> Self {
        match a {
            AlgorithmArg::Tiernan => Algorithm::Tiernan,
            AlgorithmArg::Tarjan => Algorithm::Tarjan,
            AlgorithmArg::Johnson => Algorithm::Johnson,
            AlgorithmArg::SzwarcfiterLauer => Algorithm::SzwarcfiterLauer,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PatonVariant {
    /// Depth-first fundamental cycle base
    Base,
    /// Breadth-first fundamental cycles
    Cycles,
}

#[derive(Parser)]
#[command(about = "Simple cycle enumeration (Tiernan, Tarjan, Johnson, Szwarcfiter-Lauer, Paton)")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate simple cycles of a directed graph
    Cycles {
        /// Algorithm to use
        #[arg(value_enum)]
        algorithm: AlgorithmArg,

        /// Edge-list file, one "u v" pair per line
        graph: String,

        /// Print only the summary, not the cycles
        #[arg(long)]
        count: bool,

        /// Maximum number of cycles to print
        #[arg(long, default_value_t = 25)]
        limit: usize,
    },

    /// Strongly connected components of a directed graph
    Sccs {
        /// Edge-list file
        graph: String,

        /// Include single-vertex components without a self-loop
        #[arg(long)]
        all: bool,
    },

    /// Fundamental cycles of an undirected graph (Paton)
    Undirected {
        /// Spanning-forest variant
        #[arg(value_enum)]
        variant: PatonVariant,

        /// Edge-list file, one "u v" pair per line
        graph: String,

        /// Print only the summary, not the cycles
        #[arg(long)]
        count: bool,

        /// Maximum number of cycles to print
        #[arg(long, default_value_t = 25)]
        limit: usize,
    },
}

// ── main ─────────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Cycles {
            algorithm,
            graph,
            count,
            limit,
        } => {
            let entries = parse_graph_file(&graph);
            let g = directed_graph(&entries);

            let algo: Algorithm = algorithm.into();
            let t0 = Instant::now();
            let cycles = find_simple_cycles(algo, &g);
            let elapsed = t0.elapsed();

            let stats = cycle_summary(&cycles);
            let algo_name = format!("{:?}", algo).to_lowercase();
            println!("Algorithm:    {}", algo_name);
            println!(
                "Graph:        {} ({} vertices, {} edges)",
                graph,
                g.vertex_count(),
                g.edge_count()
            );
            println!("Cycles:       {}", stats.num_cycles);
            println!("Self-loops:   {}", stats.num_self_loops);
            if stats.num_cycles > 0 {
                println!(
                    "Lengths:      min {}, max {}",
                    stats.min_len, stats.max_len
                );
            }
            println!("Time:         {:.3}s", elapsed.as_secs_f64());
            if !count {
                print_cycles(&cycles, limit);
            }
        }

        Commands::Sccs { graph, all } => {
            let entries = parse_graph_file(&graph);
            let g = directed_graph(&entries);

            let t0 = Instant::now();
            let sccs = if all { find_all_sccs(&g) } else { find_sccs(&g) };
            let elapsed = t0.elapsed();

            let kind = if all { "all" } else { "non-trivial" };
            println!(
                "Graph:        {} ({} vertices, {} edges)",
                graph,
                g.vertex_count(),
                g.edge_count()
            );
            println!("Components:   {} ({})", sccs.len(), kind);
            if all {
                println!("Non-trivial:  {}", count_sccs(&g));
            } else {
                println!("Total:        {}", count_all_sccs(&g));
            }
            println!("Time:         {:.3}s", elapsed.as_secs_f64());
            for scc in &sccs {
                println!("  {}", format_cycle(scc));
            }
        }

        Commands::Undirected {
            variant,
            graph,
            count,
            limit,
        } => {
            let entries = parse_graph_file(&graph);
            let g = undirected_graph(&entries);

            let t0 = Instant::now();
            let (name, cycles) = match variant {
                PatonVariant::Base => ("paton cycle base", paton::cycle_base(&g)),
                PatonVariant::Cycles => ("paton simple cycles", paton::simple_cycles(&g)),
            };
            let elapsed = t0.elapsed();

            let stats = cycle_summary(&cycles);
            println!("Algorithm:    {}", name);
            println!(
                "Graph:        {} ({} vertices, {} edges)",
                graph,
                g.vertex_count(),
                g.edge_count()
            );
            println!("Cycles:       {}", stats.num_cycles);
            println!("Self-loops:   {}", stats.num_self_loops);
            if stats.num_cycles > 0 {
                println!(
                    "Lengths:      min {}, max {}",
                    stats.min_len, stats.max_len
                );
            }
            println!("Time:         {:.3}s", elapsed.as_secs_f64());
            if !count {
                print_cycles(&cycles, limit);
            }
        }
    }
}
