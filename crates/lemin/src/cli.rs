use clap::{ArgAction, Parser};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::parser;
use crate::routing;
use crate::routing::colony::Colony;
use crate::routing::paths::PathSet;
use crate::routing::{schedule, serialize};

#[derive(Parser)]
#[command(name = "lemin")]
#[command(author, version, about)]
#[command(long_about = "Ant colony routing.\n\n\
    Reads a farm description, finds a set of room-disjoint paths from the\n\
    ##start room to the ##end room, and prints the turn-by-turn ant movements.\n\n\
    Examples:\n  \
    lemin farm.txt           Echo the input, then print the movement trace\n  \
    lemin farm.txt --plan    Print the computed plan as JSON\n  \
    lemin farm.txt -v        Summarise the winning path set on stderr")]
pub struct Cli {
    /// Farm description file
    pub file: PathBuf,

    /// Print the computed plan as JSON instead of the movement trace
    #[arg(long)]
    pub plan: bool,

    /// Suppress the echo of the input file
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase diagnostic verbosity (-v winning set, -vv every candidate set)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        if self.no_color {
            colored::control::set_override(false);
        }

        let input = fs::read_to_string(&self.file)
            .with_context(|| format!("can't open your input file: {}", self.file.display()))?;
        let farm = parser::parse(&input)?;
        let mut colony = Colony::from_farm(&farm);

        let verbose = self.verbose;
        let plan = routing::solve_observed(&mut colony, |candidate| {
            if verbose > 1 {
                eprintln!(
                    "candidate: {} path(s), {} turn(s)",
                    candidate.path_count(),
                    candidate.turns
                );
            }
        });
        let Some(plan) = plan else {
            bail!("No paths found");
        };

        if verbose > 0 {
            describe(&colony, &plan);
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        if self.plan {
            serde_json::to_writer_pretty(&mut out, &serialize::dump_plan(&colony, &plan))?;
            writeln!(out)?;
        } else {
            if !self.quiet {
                writeln!(out, "{}", input.trim_end())?;
                writeln!(out)?;
            }
            schedule::write_trace(&mut out, &colony, &plan)?;
        }
        Ok(())
    }
}

/// Summarise a path set on stderr.
fn describe(colony: &Colony, set: &PathSet) {
    use colored::Colorize;

    let shares = set.assignments(colony.ants);
    eprintln!(
        "{} {} path(s), {} turn(s) for {} ant(s)",
        "plan:".cyan().bold(),
        set.path_count(),
        set.turns,
        colony.ants
    );
    for (path, ants) in set.paths.iter().zip(shares) {
        eprintln!("  {} ({ants} ants)", serialize::path_to_string(colony, path));
    }
}
