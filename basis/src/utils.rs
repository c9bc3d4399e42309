use crate::{
    constants::*,
    terminal::{Style, Stylus},
};
use anyhow::{anyhow, Error};
use itertools::Itertools;
use prop_basis::{
    semantics::TruthTable,
    syntax::{Formula, Prop},
    transform::Basis,
};
use std::{
    fs,
    io::{stdin, Read},
    path::Path,
};

pub(crate) fn stylus(color: bool) -> Stylus {
    let mut stylus = Stylus::new();
    if color {
        stylus.insert_style(
            STYLE_LOGO,
            Style::new().foreground(59).attribute(term::Attr::Dim),
        );
        stylus.insert_style(
            STYLE_INFO,
            Style::new().foreground(59).attribute(term::Attr::Bold),
        );
        stylus.insert_style(STYLE_FORMULA, Style::new().foreground(252));
        stylus.insert_style(
            STYLE_BASIS,
            Style::new().foreground(252).attribute(term::Attr::Bold),
        );
        stylus.insert_style(STYLE_RESULT, Style::new().foreground(252));
        stylus.insert_style(
            STYLE_FAIL,
            Style::new()
                .foreground(term::color::BRIGHT_RED)
                .attribute(term::Attr::Bold),
        );
    }

    stylus
}

/// Parses one formula per line of `contents`, skipping blank lines and `//` comments.
pub(crate) fn parse_formulae(contents: &str) -> Result<Vec<Prop>, Error> {
    contents
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with("//"))
        .map(|(number, line)| {
            line.parse::<Prop>().map_err(|e| {
                Error::new(e).context(format!("failed to parse the formula on line {}", number))
            })
        })
        .collect()
}

pub(crate) fn read_formulae_from_file(filename: &Path) -> Result<Vec<Prop>, Error> {
    let mut f = fs::File::open(filename)
        .map_err(|e| Error::new(e).context("failed to find the input file"))?;

    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .map_err(|e| Error::new(e).context("failed to read the input file"))?;

    parse_formulae(&contents)
}

pub(crate) fn read_formulae_from_stdin() -> Result<Vec<Prop>, Error> {
    let mut buf: Vec<u8> = Vec::new();
    stdin().read_to_end(&mut buf)?;
    let s = String::from_utf8(buf)?;
    parse_formulae(&s)
}

pub(crate) fn read_formulae(input: Option<&Path>) -> Result<Vec<Prop>, Error> {
    if let Some(input) = input {
        read_formulae_from_file(input)
    } else {
        read_formulae_from_stdin()
    }
}

/// Prints the conversion of `formula` to every basis of `bases` and returns the number of
/// conversions that failed verification.
pub(crate) fn print_conversions(
    formula: &Prop,
    bases: &[Basis],
    verify: bool,
    stylus: &Stylus,
) -> usize {
    let mut failures = 0;

    stylus.set(STYLE_FORMULA);
    println!("{}", formula);

    for basis in bases {
        let result = basis.convert(formula);

        stylus.set(STYLE_BASIS);
        print!("  {:<15}", basis.to_string());
        stylus.set(STYLE_RESULT);
        println!("{}", result);

        if verify {
            let vars = formula.vars().into_iter().chain(result.vars()).unique().count();
            if vars > MAX_ENUMERATED_VARS {
                stylus.set(STYLE_INFO);
                println!("  {:<15}skipped ({} variables)", "", vars);
            } else if formula.is_equivalent(&result).unwrap_or(false) && basis.admits(&result) {
                stylus.set(STYLE_INFO);
                println!("  {:<15}verified", "");
            } else {
                failures += 1;
                stylus.set(STYLE_FAIL);
                println!("  {:<15}failed", "");
            }
        }
    }

    println!();
    failures
}

/// Returns the truth table of `formula` unless it has too many variables to print.
pub(crate) fn truth_table(formula: &Prop) -> Result<TruthTable, Error> {
    let vars = formula.vars().len();
    if vars > MAX_ENUMERATED_VARS {
        return Err(anyhow!(
            "the formula has {} variables; truth tables are limited to {}",
            vars,
            MAX_ENUMERATED_VARS
        ));
    }
    formula
        .truth_table()
        .map_err(|e| Error::new(e).context("failed to build the truth table"))
}

pub(crate) fn print_truth_table(formula: &Prop, stylus: &Stylus) {
    stylus.set(STYLE_FORMULA);
    println!("{}", formula);
    println!();
    match truth_table(formula) {
        Ok(table) => {
            stylus.set(STYLE_RESULT);
            print!("{}", table);
        }
        Err(e) => {
            stylus.set(STYLE_FAIL);
            print!("{}", e);
        }
    }
    println!();
    println!();
}

pub(crate) fn print_bases(stylus: &Stylus) {
    for basis in Basis::all() {
        stylus.set(STYLE_BASIS);
        print!("{:<15}", basis.to_string());
        stylus.set(STYLE_RESULT);
        println!(
            "{{{}}}",
            basis.connectives().iter().map(|c| c.to_string()).join(", ")
        );
    }
}
