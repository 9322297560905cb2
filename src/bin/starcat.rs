//! starcat - statement catalog printer
//!
//! Loads the warehouse configuration, builds the statement catalog, and
//! prints the requested list for inspection or piping into a driver.

use anyhow::{bail, Context, Result};
use std::env;
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use starcat::{StatementCatalog, WarehouseConfig};

const USAGE: &str = "\
Usage: starcat [options]

Options:
  -c, --config <path>   Configuration file (default: dwh.toml)
  -l, --list <name>     Which list to print: drop, create, copy, insert,
                        analysis, or all (default: all)
      --json            Print the whole catalog as JSON
  -h, --help            Show this help message
";

struct Args {
    config_path: String,
    list: String,
    json: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        config_path: "dwh.toml".to_string(),
        list: "all".to_string(),
        json: false,
    };

    let argv: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "-c" | "--config" => {
                i += 1;
                args.config_path = argv
                    .get(i)
                    .context("--config requires a path")?
                    .clone();
            }
            "-l" | "--list" => {
                i += 1;
                args.list = argv.get(i).context("--list requires a name")?.clone();
            }
            "--json" => args.json = true,
            "-h" | "--help" => {
                print!("{}", USAGE);
                std::process::exit(0);
            }
            other => bail!("unknown argument '{}'\n{}", other, USAGE),
        }
        i += 1;
    }
    Ok(args)
}

fn print_list(title: &str, statements: &[String]) {
    println!("-- {}", title);
    for sql in statements {
        println!("{}\n", sql);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .try_init()
        .ok();

    let args = parse_args()?;

    let config = WarehouseConfig::load(&args.config_path)
        .with_context(|| format!("loading '{}'", args.config_path))?;
    let catalog = StatementCatalog::new(&config)?;
    info!(config = %args.config_path, "catalog built");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    match args.list.as_str() {
        "drop" => print_list("drop tables", catalog.drop_statements()),
        "create" => print_list("create tables", catalog.create_statements()),
        "copy" => print_list("load staging tables", catalog.copy_statements()),
        "insert" => print_list("populate star schema", catalog.insert_statements()),
        "analysis" => print_list("sample analysis queries", catalog.analysis_statements()),
        "all" => {
            print_list("drop tables", catalog.drop_statements());
            print_list("create tables", catalog.create_statements());
            print_list("load staging tables", catalog.copy_statements());
            print_list("populate star schema", catalog.insert_statements());
            print_list("sample analysis queries", catalog.analysis_statements());
        }
        other => bail!("unknown list '{}'\n{}", other, USAGE),
    }

    Ok(())
}
