use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use gpl::parser::{lexer, validator};
use gpl::{registry, storage, ConsoleReporter, LineNumber, Recorder, RunSummary, Session};

#[derive(Parser)]
#[command(name = "gpl")]
#[command(about = "Interpreter for the GPL pen drawing language", version)]
struct Cli {
    /// More log output (repeat for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Runs a program file
    Run {
        /// Program (.gpl)
        input: PathBuf,

        /// Print the draw requests produced
        #[arg(long)]
        draws: bool,

        /// Only report failing lines
        #[arg(short, long)]
        quiet: bool,
    },

    /// Executes commands one by one, as if typed in
    Exec {
        /// Commands, e.g. "moveto 10,10" "circle 5"
        #[arg(required = true)]
        commands: Vec<String>,

        /// Program that an ad-hoc `run` executes
        #[arg(short, long)]
        program: Option<PathBuf>,

        /// Save the commands that succeeded as a program (.gpl)
        #[arg(short, long)]
        record: Option<PathBuf>,
    },

    /// Tokenizes and validates a program without executing it
    Check {
        /// Program (.gpl)
        input: PathBuf,
    },

    /// Lists the supported commands
    Commands,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // -v / -vv / -vvv, RUST_LOG still wins when set
    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).parse_default_env().init();

    match cli.command {
        Commands::Run { input, draws, quiet } => {
            let program = storage::load_program(&input)?;
            // Recorder keeps the draw requests so they can be listed afterwards
            let mut session = Session::new(Recorder::new(), ConsoleReporter { quiet });
            session.load_program(program.as_str());

            let results = session.run_program(&program);

            if draws {
                println!("=== DRAWS ===");
                for op in &session.surface().ops {
                    println!("  {}", op);
                }
            }

            let summary = RunSummary::from(results.as_slice());
            println!("{}", summary);
            if !summary.all_succeeded() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Exec { commands, program, record } => {
            let mut session = Session::new(Recorder::new(), ConsoleReporter::default());
            if let Some(path) = program {
                session.load_program(storage::load_program(&path)?);
            }

            // Commands worth recording
            let mut accepted = Vec::new();
            let mut failed = false;
            for command in &commands {
                let outcome = session.execute_command(command);
                // an ad-hoc `run` also reports how the loaded program went
                if let Some(summary) = outcome.summary() {
                    println!("{}", summary);
                }
                if outcome.succeeded() {
                    accepted.push(command.trim());
                } else {
                    failed = true;
                }
            }

            for op in &session.surface().ops {
                println!("  {}", op);
            }
            println!("Pen at {} in {}", session.pen().position, session.pen().color);

            // Save what succeeded as a program file
            if let Some(path) = record {
                let mut text = accepted.join("\n");
                text.push('\n');
                storage::save_program(&path, &text)?;
                println!("Recorded {} command(s) to {}", accepted.len(), path.display());
            }

            if failed {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Check { input } => {
            let program = storage::load_program(&input)?;
            let mut ok = 0;
            let mut total = 0;

            for (i, line) in program.lines().enumerate() {
                // Same pipeline as a run, minus the executor
                let parsed = lexer::tokenize(line, LineNumber::Program(i + 1));
                let result = validator::validate(&parsed);
                total += 1;

                println!("{:4}: {:?} {:?}", i + 1, parsed.command, parsed.raw_parameters);
                if result.succeeded() {
                    ok += 1;
                } else {
                    for message in result.messages() {
                        println!("      {}", message.replace('\n', "\n      "));
                    }
                }
            }

            let summary = RunSummary { succeeded: ok, total };
            println!("{}", summary);
            if !summary.all_succeeded() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Commands => {
            println!("Supported commands:");
            for descriptor in registry::all() {
                println!("  {:44} - {}", descriptor.usage, descriptor.kind.description());
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
