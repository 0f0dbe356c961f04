use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use sprout::output;
use sprout::process::SystemRunner;
use sprout::prompt::StdinPrompter;
use sprout::scaffold;
use sprout::tools::ToolAvailability;

#[derive(Parser)]
#[command(name = "sprout")]
#[command(about = "Scaffold a new Python project", long_about = None)]
#[command(version)]
struct Cli {
    /// Name of the project directory to create
    project_name: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    output::init_tracing();

    if let Err(e) = run(cli) {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let tools = ToolAvailability::detect();
    let parent = std::env::current_dir().context("Failed to determine current directory")?;
    let year = chrono::Local::now().year();

    scaffold::run(
        cli.project_name.as_deref(),
        &parent,
        tools,
        year,
        &mut StdinPrompter,
        &SystemRunner,
    )?;
    Ok(())
}
