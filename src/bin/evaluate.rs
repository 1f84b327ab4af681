//! Evaluation Binary
//!
//! Estimates the value of the two-state reference chain with Monte-Carlo
//! and TD(0) and prints each estimate next to its closed-form value.
//!
//! Options: --method, --episodes, --gamma, --alpha, --seed, --workers, --json

use clap::Parser;
use clap::ValueEnum;
use tdmc::toys::*;
use tdmc::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Method {
    /// First-visit Monte-Carlo
    First,
    /// Every-visit Monte-Carlo
    Every,
    /// TD(0)
    Td,
    /// All of the above
    All,
}

#[derive(Parser)]
#[command(author, version, about = "Evaluate a fixed policy on the reference chain", long_about = None)]
struct Args {
    #[arg(long, value_enum, default_value = "all")]
    method: Method,
    #[arg(long, default_value_t = EPISODES_SHORT)]
    episodes: usize,
    #[arg(long, default_value_t = GAMMA)]
    gamma: Rate,
    #[arg(long, default_value_t = ALPHA)]
    alpha: Rate,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = EPISODE_HORIZON)]
    horizon: usize,
    /// Monte-Carlo worker threads, one per core when omitted
    #[arg(long)]
    workers: Option<usize>,
    /// Probability of moving from A to B
    #[arg(long, default_value_t = 0.5)]
    advance: Rate,
    /// Probability of a winning exit from B
    #[arg(long, default_value_t = 0.75)]
    win: Rate,
    /// Print estimates as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tdmc::log();
    for p in [args.advance, args.win] {
        if !(0.0..=1.0).contains(&p) {
            anyhow::bail!(Violation::InvalidParameter(format!("probability {} outside [0, 1]", p)));
        }
    }
    let settings = Evaluation {
        episodes: args.episodes,
        gamma: args.gamma,
        horizon: args.horizon,
        seed: args.seed,
    };
    let workers = args.workers.unwrap_or_else(num_cpus::get);
    let policy = |_: &Link| ();
    let mut env = Chain::new(args.advance, args.win);
    let mut runs = Vec::new();
    if matches!(args.method, Method::First | Method::All) {
        let values = MonteCarlo::<FirstVisit>::default()
            .evaluate_parallel(&policy, &env, &settings, workers)?;
        runs.push(("first-visit", values));
    }
    if matches!(args.method, Method::Every | Method::All) {
        let values = MonteCarlo::<EveryVisit>::default()
            .evaluate_parallel(&policy, &env, &settings, workers)?;
        runs.push(("every-visit", values));
    }
    if matches!(args.method, Method::Td | Method::All) {
        let values = TemporalDifference::new(args.alpha)?.evaluate(&policy, &mut env, &settings)?;
        runs.push(("td(0)", values));
    }
    if args.json {
        let report = runs
            .iter()
            .map(|(method, values)| serde_json::json!({ "method": method, "values": values }))
            .collect::<Vec<_>>();
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for (method, values) in runs.iter() {
            println!("{}", method);
            for link in [Link::A, Link::B] {
                let exact = env.exact(link, args.gamma);
                let estimate = values.get(&link);
                println!(
                    "  {:?}  exact {:>+8.4}  estimate {:>+8.4}  error {:>+8.4}",
                    link,
                    exact,
                    estimate,
                    estimate - exact
                );
            }
        }
    }
    log::info!("evaluated {} methods", runs.len());
    Ok(())
}
