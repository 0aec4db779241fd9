use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dossier::config::{OutputPaths, Settings};
use dossier::display::format_budget_summary;
use dossier::services::GenerateService;

#[derive(Parser)]
#[command(
    name = "dossier",
    version,
    about = "Generate the project dossier as static HTML",
    long_about = "Reads budget figures from an optional spreadsheet (falling back to \
                  built-in defaults) and writes index.html, styles.css, script.js and \
                  print.css to the output directory."
)]
struct Cli {
    /// Settings file (JSON or YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Budget spreadsheet to read
    #[arg(short, long)]
    budget: Option<PathBuf>,

    /// Directory to write the dossier into
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Project content file (JSON or YAML) replacing the built-in content
    #[arg(long)]
    content: Option<PathBuf>,

    /// Print the rendered budget after generating
    #[arg(short, long)]
    summary: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "dossier=debug"
    } else {
        "dossier=warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut settings = Settings::load_or_default(cli.config.as_deref())?;
    if let Some(budget) = cli.budget {
        settings.budget_path = budget;
    }
    if let Some(out_dir) = cli.out_dir {
        settings.output_dir = out_dir;
    }
    if let Some(content) = cli.content {
        settings.content_path = Some(content);
    }

    let today = chrono::Local::now().date_naive();
    let report = GenerateService::new(&settings).generate(today)?;

    println!("Archivos generados: index.html, styles.css, script.js, print.css");
    let background = OutputPaths::new(&settings.output_dir).background_image();
    println!(
        "Coloca tu imagen de fondo en: {} (crea carpeta assets y pon la imagen allí).",
        background.display()
    );

    if cli.summary {
        println!();
        println!(
            "{}",
            format_budget_summary(&report.budget, &report.budget_source, &settings.currency_symbol)
        );
    }

    Ok(())
}
