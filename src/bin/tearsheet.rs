use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tearsheet_charts::models::Category;
use tearsheet_charts::tables::Table;
use tearsheet_charts::{ChartCompiler, Formatter, build_dashboard, storage};

#[derive(Parser, Debug)]
#[command(
    name = "tearsheet",
    version,
    about = "Compile portfolio tearsheet JSON into chart rendering configurations"
)]
struct Cli {
    /// Display locale for formatted values (e.g., en, de, fr).
    #[arg(long, global = true, default_value = "en")]
    locale: String,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile the whole document into a dashboard.
    Compile(CompileArgs),
    /// Compile a single chart.
    Chart(ChartArgs),
    /// Write every table as CSV.
    ExportTables(ExportArgs),
}

#[derive(Args, Debug)]
struct CompileArgs {
    /// Tearsheet JSON file.
    input: PathBuf,
    /// Write the dashboard here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Pretty-print the JSON output.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Args, Debug)]
struct ChartArgs {
    input: PathBuf,
    /// Category key (e.g., strategy_benchmark, round_trip).
    #[arg(short, long)]
    category: String,
    /// Zero-based index of the chart within the category.
    #[arg(short, long, default_value_t = 0)]
    index: usize,
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Args, Debug)]
struct ExportArgs {
    input: PathBuf,
    /// Directory for `{category}_{index}.csv` files (created if missing).
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let compiler = ChartCompiler::initialize(Formatter::new(&cli.locale));
    match cli.cmd {
        Command::Compile(args) => cmd_compile(&compiler, args),
        Command::Chart(args) => cmd_chart(&compiler, args),
        Command::ExportTables(args) => cmd_export_tables(&compiler, args),
    }
}

fn cmd_compile(compiler: &ChartCompiler, args: CompileArgs) -> Result<()> {
    let doc = storage::load_tearsheet(&args.input)?;
    let dashboard = build_dashboard(&doc, compiler);
    match args.out.as_ref() {
        Some(path) => {
            storage::save_json(&dashboard, path, args.pretty)?;
            eprintln!("Wrote dashboard to {}", path.display());
        }
        None => println!("{}", storage::to_json(&dashboard, args.pretty)?),
    }
    Ok(())
}

fn cmd_chart(compiler: &ChartCompiler, args: ChartArgs) -> Result<()> {
    let category = Category::from_key(&args.category)
        .with_context(|| format!("unknown category: {}", args.category))?;
    let doc = storage::load_tearsheet(&args.input)?;
    let chart = doc
        .section(category)
        .and_then(|s| s.charts.get(args.index))
        .with_context(|| format!("no chart {} in {}", args.index, args.category))?;
    println!("{}", storage::to_json(&compiler.compile(chart), args.pretty)?);
    Ok(())
}

fn cmd_export_tables(compiler: &ChartCompiler, args: ExportArgs) -> Result<()> {
    let doc = storage::load_tearsheet(&args.input)?;
    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    let mut written = 0usize;
    for (category, section) in doc.sections() {
        let Some(section) = section else { continue };
        for (i, raw) in section.tables.iter().enumerate() {
            let table = match Table::from_value(raw) {
                Ok(t) => t,
                Err(e) => {
                    log::warn!("skipping table {i} in {}: {e}", category.key());
                    continue;
                }
            };
            let path = args.out_dir.join(format!("{}_{i}.csv", category.key()));
            storage::save_table_csv(&table.render(compiler.formatter()), &path)?;
            written += 1;
        }
    }
    eprintln!("Exported {written} tables to {}", args.out_dir.display());
    Ok(())
}
