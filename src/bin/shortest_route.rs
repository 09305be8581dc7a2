use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use u_route_exact::evaluation::CostModel;
use u_route_exact::generate::random_instance;
use u_route_exact::models::{Instance, Location, Route};
use u_route_exact::solver::{ExhaustiveSolver, SolverConfig};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON instance file (`{"origin": {...}, "customers": [...]}`)
    #[arg(short, long, conflicts_with = "random")]
    input: Option<PathBuf>,

    /// Generate a random instance with this many customers
    #[arg(short, long)]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = 0, requires = "random")]
    seed: u64,

    /// Coordinate range [0, extent] for --random
    #[arg(long, default_value_t = 100, requires = "random")]
    extent: i32,

    /// Only route the first N customers of the instance
    #[arg(short, long)]
    take: Option<usize>,

    /// Override the starting X coordinate
    #[arg(long, allow_hyphen_values = true)]
    origin_x: Option<i32>,

    /// Override the starting Y coordinate
    #[arg(long, allow_hyphen_values = true)]
    origin_y: Option<i32>,

    /// How visiting orders are scored
    #[arg(short, long, value_enum, default_value_t = CostModel::Legs)]
    cost_model: CostModel,

    /// Refuse instances with more customers than this
    #[arg(long)]
    max_customers: Option<usize>,

    /// Print the route as JSON
    #[arg(long)]
    json: bool,

    /// Log at debug level
    #[arg(short, long)]
    debug: bool,
}

fn load_instance(cli: &Cli) -> Result<Instance, anyhow::Error> {
    let mut instance = match (&cli.input, cli.random) {
        (Some(path), _) => Instance::load(path)?,
        (None, Some(n)) => random_instance(n, cli.extent, cli.seed),
        (None, None) => Instance::sample(),
    };
    if let Some(n) = cli.take {
        instance = instance.truncate(n);
    }
    let origin = instance.origin;
    instance.origin = Location::new(
        cli.origin_x.unwrap_or(origin.x),
        cli.origin_y.unwrap_or(origin.y),
    );
    Ok(instance)
}

fn print_route(route: &Route) {
    let origin = route.origin();
    println!("Starting at {} and {}", origin.x, origin.y);
    println!("Total distance: {}", route.path_length());
    if route.cost_model() != CostModel::Legs {
        println!("Cost ({:?}): {}", route.cost_model(), route.cost());
    }
    println!("Customer route:");
    for c in route.customers() {
        println!("{} (X: {}, Y: {})", c.name(), c.x(), c.y());
    }
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let instance = load_instance(&cli)?;
    let mut config = SolverConfig::default().with_cost_model(cli.cost_model);
    if let Some(limit) = cli.max_customers {
        config = config.with_max_customers(limit);
    }

    info!(customers = instance.customers.len(), "searching all orderings");
    let route = ExhaustiveSolver::new(config).solve(instance.origin, &instance.customers)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&route)?);
    } else {
        print_route(&route);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("shortest-route").chain(args.iter().copied()))
    }

    fn instance(args: &[&str]) -> Instance {
        let cli = parse(args).expect("valid arguments");
        load_instance(&cli).expect("instance loads")
    }

    #[test]
    fn test_defaults_to_sample() {
        let cli = parse(&[]).expect("no arguments");
        assert_eq!(cli.cost_model, CostModel::Legs);
        assert_eq!(load_instance(&cli).expect("sample"), Instance::sample());
    }

    #[test]
    fn test_take_truncates() {
        let inst = instance(&["--take", "3"]);
        assert_eq!(inst, Instance::sample().truncate(3));
    }

    #[test]
    fn test_random_uses_seed_and_extent() {
        let inst = instance(&["--random", "4", "--seed", "9", "--extent", "10"]);
        assert_eq!(inst, random_instance(4, 10, 9));
    }

    #[test]
    fn test_seed_requires_random() {
        assert!(parse(&["--seed", "5", "--take", "3"]).is_err());
        assert!(parse(&["--extent", "50"]).is_err());
    }

    #[test]
    fn test_input_conflicts_with_random() {
        assert!(parse(&["--input", "instance.json", "--random", "3"]).is_err());
    }

    #[test]
    fn test_input_file() {
        let path = std::env::temp_dir().join(format!(
            "shortest-route-cli-{}.json",
            std::process::id()
        ));
        let expected = Instance::new(Location::new(2, 3), Instance::sample().customers);
        std::fs::write(&path, expected.to_json().expect("serialize")).expect("write");
        let path_arg = path.to_str().expect("utf-8 path").to_string();
        let inst = instance(&["--input", &path_arg, "--take", "2"]);
        std::fs::remove_file(&path).ok();
        assert_eq!(inst, expected.truncate(2));
    }

    #[test]
    fn test_origin_override_single_axis() {
        let inst = instance(&["--origin-x", "-7"]);
        assert_eq!(inst.origin, Location::new(-7, 0));
        let inst = instance(&["--origin-y", "12"]);
        assert_eq!(inst.origin, Location::new(0, 12));
    }

    #[test]
    fn test_cost_model_flag() {
        let cli = parse(&["--cost-model", "origin-sum"]).expect("known model");
        assert_eq!(cli.cost_model, CostModel::OriginSum);
        assert!(parse(&["--cost-model", "fastest"]).is_err());
    }
}
