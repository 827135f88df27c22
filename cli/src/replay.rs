use crate::util::{log_summary, print_genome};
use crate::{CliOptions, ErrorKind};
use anyhow::Context;
use clap::{ArgEnum, Parser};
use log::{error, info, warn};
use scan_fmt::scan_fmt;
use std::path::{Path, PathBuf};
use transposon_genome::implementation::linked_genome::LinkedGenome;
use transposon_genome::implementation::vector_genome::VectorGenome;
use transposon_genome::interface::{Genome, TeId};

#[derive(ArgEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Representation {
    Vector,
    Linked,
}

#[derive(Parser)]
pub struct ReplayCommand {
    /// The script file, containing one command per line.
    /// Possible commands are `create <n>`, `insert <pos> <length>`, `copy <te> <offset>`, `disable <te>` and `print`.
    pub script: PathBuf,

    #[clap(
        long,
        arg_enum,
        default_value = "linked",
        help = "The genome representation to apply the script to"
    )]
    pub representation: Representation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScriptCommand {
    Create(usize),
    Insert { pos: isize, length: usize },
    Copy { te: TeId, offset: isize },
    Disable(TeId),
    Print,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ScriptLine {
    number: usize,
    text: String,
    command: ScriptCommand,
}

impl ScriptLine {
    fn syntax_error(&self) -> crate::Error {
        ErrorKind::ScriptSyntax(self.number, self.text.clone()).into()
    }
}

/// Parses a single line, returning `None` for blank lines and comments.
fn parse_line(number: usize, text: &str) -> crate::Result<Option<ScriptLine>> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }

    let syntax_error = || -> crate::Error {
        error!("Could not parse line {}: '{}'", number, text);
        ErrorKind::ScriptSyntax(number, text.to_owned()).into()
    };

    // `scan_fmt!` ignores trailing text, so the arguments are checked to be whole integers first.
    let mut tokens = text.split_whitespace();
    let keyword = tokens.next().unwrap_or_default();
    let arguments: Vec<_> = tokens.collect();
    if arguments
        .iter()
        .any(|argument| argument.parse::<i128>().is_err())
    {
        return Err(syntax_error());
    }

    let command = match (keyword, arguments.len()) {
        ("create", 1) => scan_fmt!(text, "create {d}", usize).map(ScriptCommand::Create),
        ("insert", 2) => scan_fmt!(text, "insert {d} {d}", isize, usize)
            .map(|(pos, length)| ScriptCommand::Insert { pos, length }),
        ("copy", 2) => scan_fmt!(text, "copy {d} {d}", usize, isize).map(|(te, offset)| {
            ScriptCommand::Copy {
                te: TeId::from(te),
                offset,
            }
        }),
        ("disable", 1) => {
            scan_fmt!(text, "disable {d}", usize).map(|te| ScriptCommand::Disable(TeId::from(te)))
        }
        ("print", 0) => Ok(ScriptCommand::Print),
        _ => return Err(syntax_error()),
    }
    .map_err(|_| syntax_error())?;

    Ok(Some(ScriptLine {
        number,
        text: text.to_owned(),
        command,
    }))
}

fn parse_script(script: &str) -> crate::Result<Vec<ScriptLine>> {
    let mut lines = Vec::new();
    for (index, text) in script.lines().enumerate() {
        if let Some(line) = parse_line(index + 1, text)? {
            lines.push(line);
        }
    }
    Ok(lines)
}

/// Applies the script to a new genome. If the script starts with `create`, then the genome gets the given length, otherwise it starts empty.
fn execute_script<G: Genome>(lines: &[ScriptLine], print: bool) -> crate::Result<G> {
    let (initial_length, lines) = match lines.split_first() {
        Some((
            ScriptLine {
                command: ScriptCommand::Create(initial_length),
                ..
            },
            rest,
        )) => (*initial_length, rest),
        _ => (0, lines),
    };

    let mut genome = G::new(initial_length);
    for line in lines {
        match line.command {
            ScriptCommand::Create(_) => {
                error!("Line {}: create must be the first command", line.number);
                return Err(line.syntax_error());
            }
            ScriptCommand::Insert { pos, length } => {
                let te = genome.insert_te(pos, length);
                info!("Line {}: inserted TE {}", line.number, te);
            }
            ScriptCommand::Copy { te, offset } => match genome.copy_te(te, offset) {
                Some(copy) => info!("Line {}: copied TE {} to TE {}", line.number, te, copy),
                None => warn!("Line {}: TE {} is not active, nothing copied", line.number, te),
            },
            ScriptCommand::Disable(te) => {
                if genome.is_active(te) {
                    info!("Line {}: disabled TE {}", line.number, te);
                }
                genome.disable_te(te);
            }
            ScriptCommand::Print => {
                if print {
                    print_genome(&genome)?;
                }
            }
        }
    }

    Ok(genome)
}

fn read_script(path: &Path) -> crate::Result<Vec<ScriptLine>> {
    let script = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read script file {:?}", path))?;
    parse_script(&script)
}

pub(crate) fn replay(_options: &CliOptions, subcommand: &ReplayCommand) -> crate::Result<()> {
    info!("Reading script from: {:?}", &subcommand.script);
    let lines = read_script(&subcommand.script)?;
    info!(
        "Applying {} commands to a {:?} genome",
        lines.len(),
        subcommand.representation
    );

    match subcommand.representation {
        Representation::Vector => log_summary(&execute_script::<VectorGenome>(&lines, true)?),
        Representation::Linked => log_summary(&execute_script::<LinkedGenome>(&lines, true)?),
    }

    Ok(())
}
