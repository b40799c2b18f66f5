// Command-line interface for chartab
//
// This binary turns CSV tables into static HTML pages with embedded
// Highcharts configuration, using the chartab library.
//
// Rendering:
//
// The render command needs an input CSV and a chart kind. The first CSV
// column becomes the index (dates, numbers or labels, auto-detected);
// the remaining columns become series.
// Usage:
//  chartab <input.csv> --kind <kind> [--title T] [-o out.html]  - Render a chart (default)
//  chartab render <input.csv> --kind <kind> ...                 - Same as above (explicit)
//  chartab scripts [--stock]                                    - Print the script includes
//  chartab --list-kinds                                         - List available chart kinds
//
// Extra Parameters:
//
// Config keys can be overridden using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and applies the overrides.
// Example:
//  chartab data.csv --kind line --extra-width 900 --extra-regression

mod ingest;

use chartab::{BuildParams, BuilderRegistry, ChartFamily, Page, ScatterPair, ScriptSources};
use chartab_config::{ChartabConfig, Loader};
use clap::{Arg, ArgAction, Command, ValueHint};
use std::collections::HashMap;
use std::fs;

// Mirror of the kinds registered in BuilderRegistry::default (see build.rs).
const AVAILABLE_KINDS: &[&str] = &["bar", "column", "line", "scatter", "stock"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if let Some(key) = arg.strip_prefix("--extra-") {
            // Check if the next arg is a value or another flag/end
            let has_value = if i + 1 < args.len() {
                let next = &args[i + 1];
                !next.starts_with('-') && !next.starts_with("--")
            } else {
                false
            };

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                // No value, treat as boolean flag (default to "true")
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("chartab")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build static HTML chart pages from tabular data")
        .long_about(
            "chartab turns CSV tables into static HTML pages embedding Highcharts.\n\n\
            Commands:\n  \
            - render:  Build a chart page from a CSV file (default)\n  \
            - scripts: Print the script includes generated pages rely on\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override config keys per invocation.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            chartab data.csv --kind line --title Prices      # Render to stdout\n  \
            chartab data.csv --kind column -o out.html       # Render to a file\n  \
            chartab data.csv --kind scatter --pair 'h vs w=height:weight'\n  \
            chartab data.csv --kind line --extra-width 900   # Override chart width",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-kinds")
                .long("list-kinds")
                .help("List available chart kinds")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a chartab.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("render")
                .about("Build a chart page from a CSV file (default command)")
                .long_about(
                    "Build one chart from a CSV table and emit a complete HTML page.\n\n\
                    The first CSV column is the index: it becomes a datetime axis when\n\
                    every value parses as a date (2024-01-31) or datetime\n\
                    (2024-01-31T12:00:00), a numeric axis when every value parses as a\n\
                    number, and point labels otherwise. Use --index none to chart every\n\
                    column over row positions instead.\n\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    chartab render prices.csv --kind stock --title Close\n  \
                    chartab render sizes.csv --kind scatter --pair 'h vs w=height:weight'\n  \
                    chartab render sales.csv --kind column -o report.html",
                )
                .arg(
                    Arg::new("input")
                        .help("Input CSV file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("kind")
                        .long("kind")
                        .help("Chart kind (required)")
                        .required(true)
                        .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_KINDS))
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("title")
                        .long("title")
                        .help("Chart title")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("x-title")
                        .long("x-title")
                        .help("x axis title")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("y-title")
                        .long("y-title")
                        .help("y axis title")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("pair")
                        .long("pair")
                        .help("Scatter pair as name=xcol:ycol (repeatable)")
                        .action(ArgAction::Append)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("options")
                        .long("options")
                        .help("Raw JSON options merged over the chart (later keys win)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("index")
                        .long("index")
                        .help("Index handling: 'auto' (first column) or 'none' (row positions)")
                        .value_parser(["auto", "none"])
                        .default_value("auto"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("save")
                        .long("save")
                        .help(
                            "Write to a random-named file in the configured output \
                            directory and print its path",
                        )
                        .action(ArgAction::SetTrue)
                        .conflicts_with("output"),
                ),
        )
        .subcommand(
            Command::new("scripts")
                .about("Print the script includes generated pages rely on")
                .long_about(
                    "Prints the <script> tags a chart page pulls into its head, one per\n\
                    line. Useful when embedding generated chart blocks into an existing\n\
                    page instead of using the full document chartab renders.",
                )
                .arg(
                    Arg::new("stock")
                        .long("stock")
                        .help("Print the includes for stock charts instead")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    // First, try normal parsing with cleaned args. If the first argument
    // looks like a file, inject "render" as the subcommand.
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && cleaned_args[1] != "render"
                && cleaned_args[1] != "scripts"
                && cleaned_args[1] != "help"
            {
                let mut new_args = vec![cleaned_args[0].clone(), "render".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    if matches.get_flag("list-kinds") {
        handle_list_kinds_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    let regression = extra_params
        .remove("regression")
        .map(|raw| parse_bool_arg("regression", &raw))
        .unwrap_or(false);
    if let Some(key) = extra_params.keys().next() {
        eprintln!("Unknown override --extra-{key}");
        std::process::exit(1);
    }

    match matches.subcommand() {
        Some(("render", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let kind = sub_matches
                .get_one::<String>("kind")
                .expect("kind is required");
            handle_render_command(input, kind, sub_matches, &config, regression);
        }
        Some(("scripts", sub_matches)) => {
            let family = if sub_matches.get_flag("stock") {
                ChartFamily::StockChart
            } else {
                ChartFamily::Chart
            };
            handle_scripts_command(&config, family);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the render command
fn handle_render_command(
    input: &str,
    kind: &str,
    sub_matches: &clap::ArgMatches,
    config: &ChartabConfig,
    regression: bool,
) {
    let positional_index = sub_matches
        .get_one::<String>("index")
        .map(|s| s == "none")
        .unwrap_or(false);

    let frame = ingest::read_frame(input, positional_index).unwrap_or_else(|e| {
        eprintln!("Error reading '{input}': {e}");
        std::process::exit(1);
    });

    let pairs = sub_matches
        .get_many::<String>("pair")
        .into_iter()
        .flatten()
        .map(|raw| parse_pair_arg(raw))
        .collect();

    let mut params = BuildParams::default()
        .with_size(config.chart.width, config.chart.height)
        .with_zoom(config.chart.zoom.clone())
        .with_pairs(pairs)
        .with_regression(regression)
        .with_axis_titles(
            sub_matches.get_one::<String>("x-title"),
            sub_matches.get_one::<String>("y-title"),
        );
    if let Some(title) = sub_matches.get_one::<String>("title") {
        params = params.with_title(title);
    }

    let registry = BuilderRegistry::default();
    let mut chart = registry.build(kind, &frame, &params).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    // Raw JSON passthrough for options the CLI does not model.
    if let Some(raw) = sub_matches.get_one::<String>("options") {
        let overlay: serde_json::Value = serde_json::from_str(raw).unwrap_or_else(|e| {
            eprintln!("Invalid --options JSON: {e}");
            std::process::exit(1);
        });
        chart.set_options(&overlay);
    }

    let title = sub_matches
        .get_one::<String>("title")
        .cloned()
        .unwrap_or_else(|| config.page.title.clone());
    let mut page = Page::new(title).with_scripts(ScriptSources::from(&config.scripts));
    page.add_chart(chart);

    if sub_matches.get_flag("save") {
        let path = page
            .write_to(&config.page.output_dir, None)
            .unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
        println!("{}", path.display());
        return;
    }

    let html = page.render().unwrap_or_else(|e| {
        eprintln!("Render error: {e}");
        std::process::exit(1);
    });

    match sub_matches.get_one::<String>("output") {
        Some(path) => {
            fs::write(path, html).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => {
            print!("{html}");
        }
    }
}

/// Handle the scripts command
fn handle_scripts_command(config: &ChartabConfig, family: ChartFamily) {
    let sources = ScriptSources::from(&config.scripts);
    for tag in sources.tags_for(family) {
        println!("{tag}");
    }
}

/// Handle the list-kinds command
fn handle_list_kinds_command() {
    let registry = BuilderRegistry::default();
    println!("Available chart kinds:\n");
    for kind in registry.list_kinds() {
        let builder = registry.get(&kind).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });
        println!("  {kind:<8} {}", builder.description());
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> ChartabConfig {
    let loader = Loader::new().with_optional_file("chartab.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut ChartabConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = extra_params.remove("width") {
        config.chart.width = parse_u32_arg("width", &raw);
    }
    if let Some(raw) = extra_params.remove("height") {
        config.chart.height = parse_u32_arg("height", &raw);
    }
    if let Some(raw) = extra_params.remove("zoom") {
        config.chart.zoom = raw;
    }
    if let Some(raw) = extra_params.remove("page-title") {
        config.page.title = raw;
    }
    if let Some(raw) = extra_params.remove("output-dir") {
        config.page.output_dir = raw;
    }
}

/// Parse a scatter pair argument of the form `name=xcol:ycol`.
fn parse_pair_arg(raw: &str) -> ScatterPair {
    let parsed = raw
        .split_once('=')
        .and_then(|(name, columns)| {
            columns
                .split_once(':')
                .map(|(x, y)| ScatterPair::new(name, x, y))
        });

    parsed.unwrap_or_else(|| {
        eprintln!("Invalid --pair '{raw}': expected name=xcol:ycol");
        std::process::exit(1);
    })
}

fn parse_u32_arg(flag: &str, raw: &str) -> u32 {
    raw.parse().unwrap_or_else(|_| {
        eprintln!("Invalid value '{raw}' for --extra-{flag}");
        std::process::exit(1);
    })
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
