use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use tokio::io::{self, BufReader};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use decisionseer::config::{self, Config};
use decisionseer::evaluator::{Criterion, DecisionMaker};
use decisionseer::shell::{
    format_decision, format_regret_table, format_summary, read_matrix_file, EvaluationReport,
    MatrixBuilder, Session,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter a payoff matrix and pick criteria from a menu (default)
    Interactive,
    /// Evaluate a payoff matrix given on the command line or in a file
    Evaluate {
        /// File with one alternative per line, payoffs separated by spaces
        #[arg(short, long, conflicts_with = "row")]
        file: Option<PathBuf>,

        /// Payoffs of one alternative, e.g. --row "3000 1500 -500"
        #[arg(short, long, allow_hyphen_values = true)]
        row: Vec<String>,

        /// Label for the next alternative, in row order
        #[arg(long = "alternative")]
        alternatives: Vec<String>,

        /// Label for the next state, in column order
        #[arg(long = "state")]
        states: Vec<String>,

        /// Hurwicz coefficient between 0 and 1
        #[arg(short, long)]
        alpha: Option<f64>,

        /// Only evaluate this criterion
        #[arg(short, long)]
        criterion: Option<Criterion>,

        /// Also print the regret matrix
        #[arg(long)]
        regret: bool,

        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_config()?;

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        config.max_level()?
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    debug!("Using configuration: {:?}", config);

    match cli.command {
        None | Some(Commands::Interactive) => {
            info!("Starting interactive session");
            let mut session = Session::new(BufReader::new(io::stdin()), io::stdout(), config);
            session.run().await?;
        }
        Some(Commands::Evaluate {
            file,
            row,
            alternatives,
            states,
            alpha,
            criterion,
            regret,
            json,
        }) => {
            let matrix = match file {
                Some(path) => read_matrix_file(&path).await?,
                None => matrix_from_rows(&row)?,
            };
            let engine = DecisionMaker::with_labels(
                matrix,
                (!alternatives.is_empty()).then_some(alternatives),
                (!states.is_empty()).then_some(states),
            )?;
            run_evaluation(&engine, &config, alpha, criterion, regret, json)?;
        }
    }

    Ok(())
}

fn matrix_from_rows(rows: &[String]) -> Result<Vec<Vec<f64>>> {
    if rows.is_empty() {
        bail!("no payoff matrix given, use --file or --row");
    }

    let mut builder = MatrixBuilder::new();
    for (i, row) in rows.iter().enumerate() {
        builder
            .push_line(row)
            .with_context(|| format!("invalid --row for alternative {}", i + 1))?;
    }
    Ok(builder.into_rows())
}

fn run_evaluation(
    engine: &DecisionMaker,
    config: &Config,
    alpha: Option<f64>,
    criterion: Option<Criterion>,
    regret: bool,
    json: bool,
) -> Result<()> {
    let evaluation = match criterion {
        Some(criterion) => {
            let alpha = alpha.unwrap_or(config.hurwicz_alpha);
            engine.evaluate_selected(&[criterion], alpha)?
        }
        None => engine.evaluate_all(alpha.unwrap_or(config.summary_alpha))?,
    };

    if json {
        let report = EvaluationReport::new(engine, evaluation, regret);
        println!("{}", report.to_json()?);
        return Ok(());
    }

    if criterion.is_some() {
        for (criterion, decision) in evaluation.iter() {
            println!(
                "{} ({}): {}",
                criterion.name(),
                criterion.attitude(),
                format_decision(criterion, decision)
            );
        }
    } else {
        print!("{}", format_summary(&evaluation));
    }

    if regret {
        print!("{}", format_regret_table(engine));
    }

    Ok(())
}
