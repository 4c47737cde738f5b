use u_aco::aco::{AcoConfig, Colony, Goal, Graph};

const DISTANCES: [[f64; 5]; 5] = [
    [0.0, 10.0, 20.0, 30.0, 15.0],
    [10.0, 0.0, 12.0, 5.0, 25.0],
    [20.0, 12.0, 0.0, 18.0, 8.0],
    [30.0, 5.0, 18.0, 0.0, 22.0],
    [15.0, 25.0, 8.0, 22.0, 0.0],
];

fn usage() -> ! {
    eprintln!("Usage: aco [--tour] [seed]");
    eprintln!();
    eprintln!("Runs the colony on a built-in 5-node graph, from node 0 to node 4,");
    eprintln!("or over a closed tour of all nodes with --tour.");
    std::process::exit(2);
}

fn main() {
    let mut goal = Goal::path(0, 4);
    let mut config = AcoConfig::default();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--tour" => {
                goal = Goal::Tour { start: None };
                config = config.with_beta(5.0);
            }
            "-h" | "--help" => usage(),
            other => match other.parse::<u64>() {
                Ok(seed) => config = config.with_seed(seed),
                Err(_) => usage(),
            },
        }
    }

    let graph = match Graph::new(DISTANCES.iter().map(|row| row.to_vec()).collect()) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    match goal {
        Goal::Path { start, end } => println!("Finding path from {start} to {end}"),
        Goal::Tour { .. } => println!("Finding shortest closed tour"),
    }
    println!(
        "Parameters: ants={}, rounds={}, alpha={}, beta={}, evaporation={}",
        config.num_ants, config.max_rounds, config.alpha, config.beta, config.evaporation_rate
    );

    let mut colony = match Colony::new(&graph, goal, &config) {
        Ok(colony) => colony,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    while let Some(report) = colony.step() {
        println!("{report}");
    }

    println!("Best: {}", colony.into_result(false));
}
