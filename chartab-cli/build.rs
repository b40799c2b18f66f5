use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the kinds registered in chartab's BuilderRegistry::default.
// We need to duplicate this here since build scripts can't access src/ modules.
const AVAILABLE_KINDS: &[&str] = &["bar", "column", "line", "scatter", "stock"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("chartab")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build static HTML chart pages from tabular data")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Path to the CSV file")
                .required_unless_present("list-kinds")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("kind")
                .long("kind")
                .help("Chart kind")
                .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_KINDS))
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("list-kinds")
                .long("list-kinds")
                .help("List available chart kinds")
                .action(ArgAction::SetTrue),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "chartab", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "chartab", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "chartab", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
