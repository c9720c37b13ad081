use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use string_analyzer::{Commands, StringStore, analyze, cli_parse, server, translate};

fn main() -> Result<()> {
    let cli = cli_parse();

    match &cli.command {
        Commands::Serve => {
            let mut store = StringStore::new();
            server::run(&mut store)?;
        }
        Commands::Analyze { value, pretty } => {
            print_json(&analyze(value), *pretty)?;
        }
        Commands::Translate { query, pretty } => {
            let filters = translate(query);
            if filters.has_conflicting_bounds() {
                eprintln!(
                    "{} min_length exceeds max_length; the service rejects this query as conflicting",
                    "warning:".yellow().bold()
                );
            }
            print_json(&filters, *pretty)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
