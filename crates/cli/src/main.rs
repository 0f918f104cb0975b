//! designprompt CLI entry point.

use std::fs;

use anyhow::{bail, Context};
use clap::Parser;
use designprompt_cli::cli::{Cli, Commands};
use designprompt_cli::output::format_output;
use designprompt_cli::{
    copy_with_fallback, interactive, logging, Osc52Clipboard, SystemClipboard,
};
use designprompt_core::{Configuration, OptionCatalog, OutputKind};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut configurator = cli.config.load()?;

    match cli.command {
        Commands::Prompt => println!("{}", configurator.output(OutputKind::Prompt)),
        Commands::Code { out } => {
            let document = configurator.output(OutputKind::Code);
            match out {
                Some(path) => {
                    fs::write(&path, document)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!(
                        path = %path.display(),
                        bytes = document.len(),
                        "wrote document"
                    );
                    if !cli.quiet {
                        println!("Wrote {}", path.display());
                    }
                }
                None => println!("{document}"),
            }
        }
        Commands::Generate => println!("{}", format_output(configurator.outputs(), cli.format)),
        Commands::Copy { target } => {
            let kind = OutputKind::from(target);
            let primary = SystemClipboard::detect();
            let mut fallback = Osc52Clipboard::stderr();
            let notice =
                copy_with_fallback(configurator.output(kind), kind, &primary, &mut fallback).await;
            if notice.is_error() {
                bail!("{notice}");
            }
            if !cli.quiet {
                println!("{notice}");
            }
        }
        Commands::Options => {
            let axes = OptionCatalog::axes();
            println!("{}", format_output(axes.as_slice(), cli.format));
        }
        Commands::Defaults => println!("{}", format_output(&Configuration::default(), cli.format)),
        Commands::Interactive => {
            let primary = SystemClipboard::detect();
            let mut fallback = Osc52Clipboard::stderr();
            interactive::run(&mut configurator, &primary, &mut fallback).await?;
        }
    }

    Ok(())
}
