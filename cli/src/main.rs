#![recursion_limit = "1024"]

use clap::Parser;
use error_chain::{error_chain, ChainedError, ExitCode};
use log::{error, info};
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode};

mod replay;
mod simulate;
mod util;

error_chain! {
    foreign_links {
        Io(std::io::Error);
        Anyhow(anyhow::Error);
    }

    errors {
        Parameter {
            description("a parameter was missing, superfluous or had an illegal value, see the log for more details")
            display("a parameter was missing, superfluous or had an illegal value, see the log for more details")
        }

        ScriptSyntax(line: usize, content: String) {
            description("a line of the script could not be parsed")
            display("line {} of the script could not be parsed: '{}'", line, content)
        }

        RealisationsDiverged(step: usize) {
            description("the genome representations disagree about the state of the genome")
            display("the genome representations disagree after step {}", step)
        }
    }
}

#[derive(Parser)]
#[clap(name = "Transposon Genome", version = env!("CARGO_PKG_VERSION"), author = "Sebastian Schmidt <sebastian.schmidt@helsinki.fi>")]
struct CliOptions {
    #[clap(subcommand)]
    pub subcommand: Command,

    #[clap(
        long,
        default_value = "Info",
        help = "The log level to use, one of Error, Warn, Info, Debug, Trace"
    )]
    pub log_level: LevelFilter,

    #[clap(long, help = "Print genomes without colours")]
    pub no_colour: bool,
}

#[derive(Parser)]
enum Command {
    #[clap(
        about = "Runs a random simulation on all genome representations at once and verifies that they agree after every step."
    )]
    Simulate(simulate::SimulateCommand),
    #[clap(about = "Applies the operations of a script file to a genome.")]
    Replay(replay::ReplayCommand),
}

// The main is unpacked from an error-chain macro.
// Using just the macro makes IntelliJ complain that there would be no main.
// The real main (programmed manually) is run(), below this method.
fn main() {
    ::std::process::exit(match run() {
        Ok(()) => ExitCode::code(()),
        Err(ref e) => {
            error!("{}", ChainedError::display_chain(e));
            1
        }
    });
}

fn initialise_logging(level_filter: LevelFilter) {
    CombinedLogger::init(vec![TermLogger::new(
        level_filter,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .unwrap();

    info!("Logging initialised successfully");
}

fn run() -> Result<()> {
    let options = &CliOptions::parse();
    initialise_logging(options.log_level);

    if options.no_colour {
        colored::control::set_override(false);
    }

    match &options.subcommand {
        Command::Simulate(subcommand) => simulate::simulate(options, subcommand),
        Command::Replay(subcommand) => replay::replay(options, subcommand),
    }?;

    info!("Goodbye");
    Ok(())
}
