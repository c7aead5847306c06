use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use sqlite_fdw_import::config::{self, Config};
use sqlite_fdw_import::utils::logging::init_logging;
use sqlite_fdw_import::{ImportReport, SchemaImporter};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Sql,
    Json,
}

/// Generate CREATE FOREIGN TABLE statements from a SQLite database
#[derive(Debug, Parser)]
#[command(name = "sqlite_fdw_import", version, about)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long)]
    config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Sql)]
    format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Abort on the first table that cannot be translated
    #[arg(long)]
    fail_fast: bool,

    /// Carry DEFAULT clauses over from the source schema
    #[arg(long)]
    import_default: bool,

    /// Do not carry NOT NULL constraints over
    #[arg(long)]
    no_import_not_null: bool,

    /// Only import these tables
    #[arg(long, value_delimiter = ',', conflicts_with = "except")]
    limit_to: Option<Vec<String>>,

    /// Import every table except these
    #[arg(long, value_delimiter = ',')]
    except: Option<Vec<String>>,
}

impl Cli {
    fn apply_overrides(&self, config: &mut Config) {
        if self.import_default {
            config.import.import_default = true;
        }
        if self.no_import_not_null {
            config.import.import_not_null = false;
        }
        if let Some(names) = &self.limit_to {
            config.import.limit_to = Some(names.clone());
            config.import.except = None;
        }
        if let Some(names) = &self.except {
            config.import.except = Some(names.clone());
            config.import.limit_to = None;
        }
    }
}

fn render(report: &ImportReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Sql => {
            let mut out = String::new();
            for statement in report.statements() {
                out.push_str(statement);
                out.push_str(";\n\n");
            }
            Ok(out)
        }
        OutputFormat::Json => Ok(report.to_json()?),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = config::load_from_file(&cli.config)
        .with_context(|| format!("loading {}", cli.config))?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    init_logging(&config.logging)?;

    let importer = SchemaImporter::new(config).await?.fail_fast(cli.fail_fast);
    let report = importer.import_schema().await?;
    importer.source().close().await;

    let rendered = render(&report, cli.format)?;
    match &cli.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("writing {}", path.display()))?,
        None => print!("{}", rendered),
    }

    for failure in &report.failures {
        eprintln!("error: {}: {}", failure.table, failure.message);
    }

    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
