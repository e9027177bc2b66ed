use assetgen::api::{AssetgenApi, CmdMessage, CmdResult, MessageLevel};
use assetgen::config::{GeneratorConfig, CONFIG_FILENAME};
use assetgen::error::Result;
use assetgen::sink::fs::FileSink;
use clap::Parser;
use colored::*;
use env_logger::Env;
use std::path::{Path, PathBuf};

mod args;
use args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
    let config = GeneratorConfig::load(&config_path)?;

    // Only `emoji` writes through the sink; the other commands print.
    let (table, out) = match &cli.command {
        Some(Commands::Emoji { table, out }) => (table.clone(), out.clone()),
        _ => (None, PathBuf::from(".")),
    };
    let mut api = AssetgenApi::new(FileSink::new(out), config, config_path);

    match cli.command {
        Some(Commands::Emoji { .. }) | None => handle_emoji(&mut api, table.as_deref()),
        Some(Commands::Colors) => handle_colors(&api),
        Some(Commands::Config) => handle_config(&api),
    }
}

fn handle_emoji(api: &mut AssetgenApi<FileSink>, table: Option<&Path>) -> Result<()> {
    let result = api.generate_emoji(table)?;
    for path in &result.written {
        log::info!("generated {}", path.display());
    }
    print_result(&result);
    Ok(())
}

fn handle_colors(api: &AssetgenApi<FileSink>) -> Result<()> {
    print_result(&api.color_constants()?);
    Ok(())
}

fn handle_config(api: &AssetgenApi<FileSink>) -> Result<()> {
    print_result(&api.show_config()?);
    Ok(())
}

fn print_result(result: &CmdResult) {
    if let Some(output) = &result.output {
        print!("{}", output);
        if !output.ends_with('\n') {
            println!();
        }
    }
    print_messages(&result.messages);
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => eprintln!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}
