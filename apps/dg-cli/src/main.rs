use clap::{Parser, Subcommand, ValueEnum};
use dg_app::{AppError, AppResult, DistanceTable, GraphSession, run_repl, run_script};
use dg_solver::SolverConfig;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dg-cli")]
#[command(about = "distgraph CLI - build a weighted graph and compute all shortest distances", long_about = None)]
struct Cli {
    /// Relax rows in parallel once the graph has at least this many vertices
    #[arg(long, global = true, default_value_t = SolverConfig::default().parallel_threshold)]
    parallel_threshold: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Edit a graph interactively, one command per line
    Repl,
    /// Run a command script, then print the final distance table
    Run {
        /// Path to the script file
        script: PathBuf,
        /// Format of the final table
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
        /// Write the final table here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Include vertex labels as a header row and column (requires --format tsv)
        #[arg(long)]
        header: bool,
        /// Do not echo the outcome of each script line
        #[arg(short, long)]
        quiet: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Tsv,
    Json,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let session = GraphSession::with_config(SolverConfig {
        parallel_threshold: cli.parallel_threshold,
    });

    match cli.command {
        Commands::Repl => cmd_repl(session),
        Commands::Run {
            script,
            format,
            output,
            header,
            quiet,
        } => cmd_run(session, &script, format, output.as_deref(), header, quiet),
    }
}

fn cmd_repl(mut session: GraphSession) -> AppResult<()> {
    run_repl(
        &mut session,
        io::stdin().lock(),
        &mut io::stdout(),
        &mut io::stderr(),
    )
}

fn cmd_run(
    mut session: GraphSession,
    script: &Path,
    format: Format,
    output: Option<&Path>,
    header: bool,
    quiet: bool,
) -> AppResult<()> {
    check_header(format, header)?;
    let source = std::fs::read_to_string(script).map_err(|e| AppError::ScriptFileRead {
        path: script.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(script = %script.display(), lines = source.lines().count(), "running script");
    let outcomes = run_script(&mut session, &source)?;
    if !quiet {
        for outcome in &outcomes {
            println!("{outcome}");
        }
    }

    let table = session.compute();
    let rendered = render(&table, format, header)?;
    match output {
        Some(path) => {
            std::fs::write(path, rendered).map_err(|e| AppError::TableFileWrite {
                path: path.to_path_buf(),
                source: e,
            })?;
            println!(
                "✓ Wrote {}x{} distance table to {}",
                table.len(),
                table.len(),
                path.display()
            );
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

/// `--header` only has a meaning for TSV output.
fn check_header(format: Format, header: bool) -> AppResult<()> {
    if header && format != Format::Tsv {
        return Err(AppError::InvalidInput(
            "--header can only be used with --format tsv".to_string(),
        ));
    }
    Ok(())
}

fn render(table: &DistanceTable, format: Format, header: bool) -> AppResult<String> {
    Ok(match format {
        Format::Table => table.render_text(),
        Format::Tsv if header => table.to_tsv_with_header(),
        Format::Tsv => table.to_tsv(),
        Format::Json => {
            let mut json = table.to_json()?;
            json.push('\n');
            json
        }
    })
}
