use contagion::explore::{explore_range, ExploreMode, CSV_HEADER};
use contagion::graph::CirculantGraph;
use contagion::percolation;
use contagion::search::{self, SearchConfig};
use contagion::verify::{self, VerifierConfig};
use tracing_subscriber::EnvFilter;

enum Command {
    Range(usize, usize),
    Graph(usize, i64),
    Trace(usize, i64, Vec<usize>),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut cfg = SearchConfig::default();
    let mut mode = ExploreMode::Parallel;
    let mut command = Command::Range(5, 10);

    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--range" => {
                command = Command::Range(parse_arg(&args, i + 1), parse_arg(&args, i + 2));
                i += 3;
            }
            "--graph" => {
                command = Command::Graph(parse_arg(&args, i + 1), parse_arg(&args, i + 2));
                i += 3;
            }
            "--trace" => {
                let seed: Vec<usize> = args
                    .get(i + 3)
                    .unwrap_or_else(|| usage_and_exit(2))
                    .split(',')
                    .map(|v| v.trim().parse().unwrap_or_else(|_| usage_and_exit(2)))
                    .collect();
                command = Command::Trace(parse_arg(&args, i + 1), parse_arg(&args, i + 2), seed);
                i += 4;
            }
            "--max-size" => {
                cfg.max_size = Some(parse_arg(&args, i + 1));
                i += 2;
            }
            "--seed" => {
                cfg.seed = parse_arg(&args, i + 1);
                i += 2;
            }
            "--sequential" => {
                mode = ExploreMode::Sequential;
                i += 1;
            }
            "--help" | "-h" => usage_and_exit(0),
            _ => usage_and_exit(2),
        }
    }

    match command {
        Command::Range(n_min, n_max) => {
            let reports = explore_range(n_min, n_max, &cfg, mode);
            println!("{CSV_HEADER}");
            for report in &reports {
                println!("{}", report.csv_row());
            }
            let heuristic = reports.iter().filter(|r| !r.exhaustively_verified).count();
            eprintln!(
                "{} graphs, {} exact, {} heuristic upper bounds",
                reports.len(),
                reports.len() - heuristic,
                heuristic
            );
        }
        Command::Graph(n, a) => {
            let graph = build_graph(n, a);
            let result = search::find(&graph, &cfg);
            let verifier = VerifierConfig {
                seed: cfg.seed,
                ..VerifierConfig::default()
            };
            let verdict = verify::verdict(&graph, result.m2, &verifier);
            println!("{graph}");
            println!("  m2 = {}", result.m2);
            println!("  contagious set = {}", result.witness);
            println!("  exhaustively verified = {}", result.exhaustively_verified);
            println!("  verdict = {verdict:?}");
        }
        Command::Trace(n, a, seed) => {
            let graph = build_graph(n, a);
            if let Some(&v) = seed.iter().find(|&&v| v >= n) {
                eprintln!("Seed vertex {v} is outside C_{n}(3,{a}).");
                std::process::exit(2);
            }
            let seed = graph.vertex_set(seed);
            let rounds = percolation::trace(&graph, &seed);
            println!("{graph} from {seed}");
            for (round, infected) in rounds.iter().enumerate() {
                println!("  round {round}: {} infected {infected}", infected.len());
            }
            let done = rounds.last().is_some_and(|s| s.is_full());
            println!("  percolates = {done}");
        }
    }
}

fn build_graph(n: usize, a: i64) -> CirculantGraph {
    CirculantGraph::new(n, a).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(2);
    })
}

fn parse_arg<T: std::str::FromStr>(args: &[String], idx: usize) -> T {
    args.get(idx)
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(|| usage_and_exit(2))
}

fn usage_and_exit(code: i32) -> ! {
    eprintln!(
        "Usage:\n  contagion [--range NMIN NMAX] [--max-size K] [--seed SEED] [--sequential]\n  contagion --graph N A [--max-size K] [--seed SEED]\n  contagion --trace N A V1,V2,...\n\nOptions:\n  --range NMIN NMAX   Search every valid C_n(3,a) with NMIN <= n <= NMAX, CSV on stdout (default: 5 10)\n  --graph N A         Search one graph and verify the result\n  --trace N A SEED    Print the round-by-round infection from a comma-separated seed\n  --max-size K        Largest seed size to try (default: n)\n  --seed SEED         Seed for random candidates (default: 42)\n  --sequential        Run the range search on one thread\n\nSet RUST_LOG=debug for per-size search details.\n"
    );
    std::process::exit(code)
}
