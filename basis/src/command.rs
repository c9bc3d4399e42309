use crate::terminal::Stylus;
use crate::{constants::*, utils::*};
use anyhow::{anyhow, Error};
use prop_basis::{
    trace::{subscriber::JsonLogger, DEFAULT_JSON_LOG_FILE},
    transform::Basis,
};
use std::{fs, path::PathBuf};
use structopt::StructOpt;

#[derive(StructOpt)]
enum ProcessCommand {
    #[structopt(name = "convert", about = "Convert formulae to minimal sets of connectives")]
    Convert {
        #[structopt(
            short = "i",
            long = "input",
            parse(from_os_str),
            help = "Path to the input file, one formula per line"
        )]
        input: Option<PathBuf>,
        #[structopt(
            short = "b",
            long = "basis",
            help = "Target basis: not-and-or, not-and, nand, implies-not or implies-false (all by default)"
        )]
        basis: Vec<Basis>,
        #[structopt(
            long = "verify",
            help = "Check every result for equivalence and basis containment."
        )]
        verify: bool,
    },
    #[structopt(name = "table", about = "Print the truth tables of formulae")]
    Table {
        #[structopt(
            short = "i",
            long = "input",
            parse(from_os_str),
            help = "Path to the input file, one formula per line"
        )]
        input: Option<PathBuf>,
    },
    #[structopt(name = "bases", about = "List the available bases")]
    Bases,
}

impl ProcessCommand {
    fn run(self, stylus: &Stylus) -> Result<(), Error> {
        match self {
            ProcessCommand::Convert {
                input,
                basis,
                verify,
            } => {
                let formulae = read_formulae(input.as_ref().map(|p| p.as_path()))?;
                let bases = if basis.is_empty() {
                    Basis::all().to_vec()
                } else {
                    basis
                };

                stylus.set(STYLE_INFO);
                println!("Converting {} formulae:", formulae.len());
                println!();

                let failures: usize = formulae
                    .iter()
                    .map(|f| print_conversions(f, &bases, verify, stylus))
                    .sum();

                if failures > 0 {
                    return Err(anyhow!("{} conversions failed verification", failures));
                }
                Ok(())
            }
            ProcessCommand::Table { input } => {
                let formulae = read_formulae(input.as_ref().map(|p| p.as_path()))?;
                formulae.iter().for_each(|f| print_truth_table(f, stylus));
                Ok(())
            }
            ProcessCommand::Bases => {
                print_bases(stylus);
                Ok(())
            }
        }
    }
}

#[derive(StructOpt)]
#[structopt(
    name = "basis",
    about = "A tool for converting propositional formulae to minimal sets of connectives"
)]
#[structopt(raw(setting = "structopt::clap::AppSettings::ColoredHelp"))]
pub(super) struct Command {
    #[structopt(subcommand, name = "command")]
    command: ProcessCommand,
    #[structopt(long = "no-color", help = "Disable colored output.")]
    no_color: bool,
    #[structopt(
        short = "l",
        long = "log",
        parse(from_os_str),
        help = "Path to the log file, or a directory for log.json."
    )]
    log: Option<PathBuf>,
}

impl Command {
    pub fn run(self) -> Result<(), Error> {
        let process = self.command;
        let stylus = stylus(!self.no_color);

        let log = self.log.map(log_file_path);

        if !self.no_color {
            stylus.set(STYLE_LOGO);
            println!("{}", ASCII_ART);
        }

        let run = || process.run(&stylus);

        if let Some(log) = log {
            let log = fs::File::create(&log)
                .map_err(|e| Error::new(e).context("failed to create the log file"))?;
            let logger = JsonLogger::new(log);
            tracing::subscriber::with_default(logger, run)
        } else {
            run()
        }
    }
}

// A directory receives the log under the default file name.
fn log_file_path(path: PathBuf) -> PathBuf {
    if path.is_dir() {
        path.join(DEFAULT_JSON_LOG_FILE)
    } else {
        path
    }
}
