//! FinMetrics CLI - serve or inspect a financial metrics workbook
//!
//! ```bash
//! finmetrics serve                      # Start HTTP server (port 3000)
//! finmetrics dump Financials.xlsx      # Normalize a workbook to JSON
//! finmetrics inspect Financials.xlsx   # Show header classification
//! ```

use clap::{Parser, Subcommand};
use finmetrics::{
    classify_headers, load_first_sheet, load_records, NormalizeOptions, ServerConfig,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "finmetrics")]
#[command(about = "Serve company financial metrics from a workbook file", long_about = None)]
struct Cli {
    /// Header of the company-name column
    #[arg(long, default_value = "Company name", global = true)]
    company_header: String,

    /// Header of the metric/field column
    #[arg(long, default_value = "Field", global = true)]
    metric_header: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Workbook file to serve
        #[arg(short, long, default_value = "Financials.xlsx")]
        file: PathBuf,

        /// Serve built frontend assets from this directory
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Normalize a workbook and output the JSON record array
    Dump {
        /// Input workbook file
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show how the first sheet's headers classify
    Inspect {
        /// Input workbook file
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let options = NormalizeOptions {
        company_header: cli.company_header,
        metric_header: cli.metric_header,
    };

    let result = match cli.command {
        Commands::Serve { port, file, static_dir } => {
            cmd_serve(port, file, static_dir, options).await
        }
        Commands::Dump { input, output } => cmd_dump(&input, output.as_deref(), &options),
        Commands::Inspect { input } => cmd_inspect(&input, &options),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn cmd_serve(
    port: u16,
    file: PathBuf,
    static_dir: Option<PathBuf>,
    options: NormalizeOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig {
        port,
        workbook_path: file,
        options,
        static_dir,
    };
    finmetrics::server::start_server(config).await?;
    Ok(())
}

fn cmd_dump(
    input: &Path,
    output: Option<&Path>,
    options: &NormalizeOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("Normalizing: {}", input.display());

    let records = load_records(input, options)?;
    eprintln!("{} records", records.len());

    let json = serde_json::to_string_pretty(&records)?;
    write_output(&json, output)?;

    Ok(())
}

fn cmd_inspect(input: &Path, options: &NormalizeOptions) -> Result<(), Box<dyn std::error::Error>> {
    let sheet = load_first_sheet(input)?;
    println!("Columns ({}):", sheet.headers.len());
    for (i, header) in sheet.headers.iter().enumerate() {
        println!("  [{:2}] {}", i + 1, header);
    }

    let layout = classify_headers(&sheet.headers, options)?;
    println!("\nCompany column: '{}'", sheet.headers[layout.company]);
    println!("Metric column:  '{}'", sheet.headers[layout.metric]);

    let years: Vec<String> = layout.years.iter().map(|y| y.year.to_string()).collect();
    println!("Year columns:   {}", years.join(", "));
    println!("Data rows:      {}", sheet.rows.len());
    println!(
        "Records:        {} ({} rows x {} year columns)",
        sheet.rows.len() * layout.years.len(),
        sheet.rows.len(),
        layout.years.len()
    );

    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("Output written to: {}", p.display());
        }
        None => {
            println!("{content}");
        }
    }
    Ok(())
}
