use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::process;

use heating_advisor::analyzer::SchedulePreferences;
use heating_advisor::cmd::{self, WeatherOverrides};

/// Heating system efficiency advisor
///
/// heating-advisor rates a domestic heating system, predicts load and cost
/// for the weather, builds a daily schedule and suggests optimizations,
/// using a language model when an API key is available.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for scripts or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    /// Directory containing .heating-advisor.toml (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a .heating-advisor.toml with default values
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Rate system efficiency and detect issues
    Analyze {
        /// Treat recent usage as anomalous
        #[arg(long)]
        anomaly: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Predict heating load and cost for given weather
    Predict {
        /// Outdoor temperature in °C [default: 5]
        #[arg(short, long, allow_negative_numbers = true)]
        temperature: Option<f64>,

        /// Relative humidity in percent [default: 60]
        #[arg(long)]
        humidity: Option<f64>,

        /// Cost per heating hour (overrides [usage])
        #[arg(long)]
        cost_per_hour: Option<f64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build the daily heating schedule
    Schedule {
        /// Morning target in °C (from 06:00)
        #[arg(long, allow_negative_numbers = true)]
        morning: Option<f64>,

        /// Daytime target in °C (from 09:00)
        #[arg(long, allow_negative_numbers = true)]
        daytime: Option<f64>,

        /// Evening target in °C (from 18:00)
        #[arg(long, allow_negative_numbers = true)]
        evening: Option<f64>,

        /// Night target in °C (from 23:00)
        #[arg(long, allow_negative_numbers = true)]
        night: Option<f64>,

        /// Off-peak target in °C (from 14:00)
        #[arg(long, allow_negative_numbers = true)]
        off_peak: Option<f64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Get an optimization plan (model-generated when a key is available)
    Recommend {
        /// API key (overrides the environment variable named in [ai])
        #[arg(long, value_name = "KEY")]
        api_key: Option<String>,

        /// Use the local plan without contacting the model
        #[arg(long, conflicts_with = "api_key")]
        offline: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask the heating assistant a question
    Ask {
        /// The question
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,

        /// API key (overrides the environment variable named in [ai])
        #[arg(long, value_name = "KEY")]
        api_key: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let dir = cmd::project_dir(cli.config.as_deref())?;

    match command {
        Commands::Init { force } => cmd::cmd_init(&dir, force),
        Commands::Analyze { anomaly, json } => cmd::cmd_analyze(&dir, anomaly, json),
        Commands::Predict {
            temperature,
            humidity,
            cost_per_hour,
            json,
        } => {
            let overrides = WeatherOverrides {
                temperature,
                humidity,
                cost_per_hour,
            };
            cmd::cmd_predict(&dir, &overrides, json)
        }
        Commands::Schedule {
            morning,
            daytime,
            evening,
            night,
            off_peak,
            json,
        } => {
            let overrides = SchedulePreferences {
                morning,
                daytime,
                evening,
                night,
                off_peak,
            };
            cmd::cmd_schedule(&dir, &overrides, json)
        }
        Commands::Recommend {
            api_key,
            offline,
            json,
        } => cmd::cmd_recommend(&dir, api_key.as_deref(), offline, json),
        Commands::Ask { question, api_key } => {
            cmd::cmd_ask(&dir, &question.join(" "), api_key.as_deref())
        }
        Commands::Completions { shell } => {
            cmd::cmd_completions(shell, &mut Cli::command(), &mut std::io::stdout());
            Ok(())
        }
    }
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    if cli.no_emoji {
        std::env::set_var("NO_EMOJI", "1");
    }

    if let Err(e) = run(cli) {
        use heating_advisor::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        process::exit(ErrorFormatter::exit_code(&e));
    }
}
