use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context as AnyhowContext, Result};
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use glosskit_core::{GlossaryStats, ParseOptions};
use glosskit_search::SearchQuery;
use glosskit_session::{Input, Session, SessionError, Tool};

use crate::config::Config;
use crate::flags::MergeOptionFlag;

mod config;
mod flags;
mod report;

#[derive(Parser)]
#[command(name = "glosskit")]
#[command(about = "Build, merge and filter key=meaning glossary files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for results)
    #[arg(long, global = true)]
    quiet: bool,

    /// Config file path (default: ./glosskit.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one glossary source into sorted key=value lines
    Parse(SourceArgs),

    /// Merge two sources under a precedence option
    Merge(MergeArgs),

    /// Keep only entries whose first meaning looks like a proper noun
    Filter(SourceArgs),

    /// Show statistics for a source
    Stats(StatsArgs),

    /// Search the rendered result by key, meaning or line number
    Search(SearchArgs),
}

#[derive(Args)]
struct SourceArgs {
    /// Input file (`-` for stdin)
    file: Option<PathBuf>,

    /// Inline text instead of a file
    #[arg(long, conflicts_with = "file")]
    text: Option<String>,

    /// Minimum key length for a line to be admitted
    #[arg(long)]
    min_key_len: Option<usize>,

    /// Delimiter that splits incoming meanings
    #[arg(long)]
    split: Option<char>,

    /// Delimiter used to re-join deduplicated meanings
    #[arg(long)]
    join: Option<char>,

    /// Write the result to this file instead of stdout
    #[arg(short, long, conflicts_with = "save")]
    output: Option<PathBuf>,

    /// Write the result to <source stem>_<timestamp>.txt in the current directory
    #[arg(long)]
    save: bool,

    /// Output JSON (stats + entries) on stdout
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct MergeArgs {
    /// Main source file (`-` for stdin)
    main: Option<PathBuf>,

    /// Secondary source file (`-` for stdin)
    secondary: Option<PathBuf>,

    /// Inline main text instead of a file
    #[arg(long, conflicts_with = "main")]
    main_text: Option<String>,

    /// Inline secondary text instead of a file
    #[arg(long, conflicts_with = "secondary")]
    secondary_text: Option<String>,

    /// Precedence option
    #[arg(long, value_enum)]
    option: Option<MergeOptionFlag>,

    /// Meaning delimiter of the main source
    #[arg(long)]
    main_split: Option<char>,

    /// Meaning delimiter of the secondary source
    #[arg(long)]
    secondary_split: Option<char>,

    /// Delimiter used to re-join deduplicated meanings
    #[arg(long)]
    join: Option<char>,

    /// Minimum key length for a line to be admitted
    #[arg(long)]
    min_key_len: Option<usize>,

    /// Write the result to this file instead of stdout
    #[arg(short, long, conflicts_with = "save")]
    output: Option<PathBuf>,

    /// Write the result to <main stem>_<timestamp>.txt in the current directory
    #[arg(long)]
    save: bool,

    /// Output JSON (stats + entries) on stdout
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct StatsArgs {
    /// Input file (`-` for stdin)
    file: Option<PathBuf>,

    /// Inline text instead of a file
    #[arg(long, conflicts_with = "file")]
    text: Option<String>,

    /// Minimum key length for a line to be admitted
    #[arg(long)]
    min_key_len: Option<usize>,

    /// Delimiter that splits incoming meanings
    #[arg(long)]
    split: Option<char>,

    /// Output JSON stats on stdout
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SearchArgs {
    /// Input file (`-` for stdin)
    file: Option<PathBuf>,

    /// Inline text instead of a file
    #[arg(long, conflicts_with = "file")]
    text: Option<String>,

    /// Case-insensitive term matched against keys
    #[arg(long)]
    key: Option<String>,

    /// Case-insensitive term matched against meanings
    #[arg(long)]
    meaning: Option<String>,

    /// 1-based line number to jump to
    #[arg(long)]
    line: Option<usize>,

    /// Output JSON matches on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep stdout clean for JSON parsing: --json implies quiet.
    let json_output = match &cli.command {
        Commands::Parse(args) | Commands::Filter(args) => args.json,
        Commands::Merge(args) => args.json,
        Commands::Stats(args) => args.json,
        Commands::Search(args) => args.json,
    };
    let quiet = cli.quiet || json_output;

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let config = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Parse(args) => run_parse(args, &config),
        Commands::Merge(args) => run_merge(args, &config),
        Commands::Filter(args) => run_filter(args, &config),
        Commands::Stats(args) => run_stats(args, &config),
        Commands::Search(args) => run_search(args, &config),
    }
}

fn run_parse(args: SourceArgs, config: &Config) -> Result<()> {
    let input = resolve_source(args.file.as_deref(), args.text.as_deref(), "primary")?;
    let opts = source_options(&args, config);

    let mut session = Session::new();
    let stats = session.run_parse(&input, &opts)?;
    emit(&session, Tool::Parse, stats, &args)
}

fn run_filter(args: SourceArgs, config: &Config) -> Result<()> {
    let input = resolve_source(args.file.as_deref(), args.text.as_deref(), "primary")?;
    let opts = source_options(&args, config);

    let mut session = Session::new();
    let stats = session.run_filter(&input, &opts)?;
    emit(&session, Tool::Filter, stats, &args)
}

fn run_merge(args: MergeArgs, config: &Config) -> Result<()> {
    let main = resolve_source(args.main.as_deref(), args.main_text.as_deref(), "main")?;
    let secondary = resolve_source(
        args.secondary.as_deref(),
        args.secondary_text.as_deref(),
        "secondary",
    )?;

    let min_key_len = args.min_key_len.unwrap_or(config.min_key_len);
    let join = args.join.unwrap_or(config.join);
    let main_opts = ParseOptions {
        min_key_len,
        split: args.main_split.unwrap_or(config.split),
        join,
    };
    let secondary_opts = ParseOptions {
        min_key_len,
        split: args.secondary_split.unwrap_or(config.secondary_split),
        join,
    };
    let option = args
        .option
        .map(MergeOptionFlag::as_domain)
        .unwrap_or(config.option);

    let mut session = Session::new();
    let stats = session.run_merge(&main, &secondary, &main_opts, &secondary_opts, option)?;

    if args.json {
        let doc = serde_json::json!({
            "stats": stats,
            "entries": session.entries(Tool::Merge),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    }
    write_or_print(&session, Tool::Merge, stats, args.output.as_deref(), args.save, args.json)
}

fn run_stats(args: StatsArgs, config: &Config) -> Result<()> {
    let input = resolve_source(args.file.as_deref(), args.text.as_deref(), "primary")?;
    let opts = ParseOptions {
        min_key_len: args.min_key_len.unwrap_or(config.min_key_len),
        split: args.split.unwrap_or(config.split),
        join: config.join,
    };

    let mut session = Session::new();
    let stats = session.run_parse(&input, &opts)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", report::render_stats(&stats));
    }
    Ok(())
}

fn run_search(args: SearchArgs, config: &Config) -> Result<()> {
    let input = resolve_source(args.file.as_deref(), args.text.as_deref(), "primary")?;
    let opts = ParseOptions {
        min_key_len: config.min_key_len,
        split: config.split,
        join: config.join,
    };

    let mut session = Session::new();
    session.run_parse(&input, &opts)?;

    let query = SearchQuery {
        key: args.key,
        meaning: args.meaning,
        line: args.line,
    };
    let state = session.search(Tool::Parse, &query)?;

    if args.json {
        let doc = serde_json::json!({ "matches": state.matches });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        print!("{}", report::render_matches(&state.matches));
    }
    Ok(())
}

fn source_options(args: &SourceArgs, config: &Config) -> ParseOptions {
    ParseOptions {
        min_key_len: args.min_key_len.unwrap_or(config.min_key_len),
        split: args.split.unwrap_or(config.split),
        join: args.join.unwrap_or(config.join),
    }
}

fn emit(session: &Session, tool: Tool, stats: GlossaryStats, args: &SourceArgs) -> Result<()> {
    if args.json {
        let doc = serde_json::json!({
            "stats": stats,
            "entries": session.entries(tool),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    }
    write_or_print(session, tool, stats, args.output.as_deref(), args.save, args.json)
}

fn write_or_print(
    session: &Session,
    tool: Tool,
    stats: GlossaryStats,
    output: Option<&Path>,
    save: bool,
    json: bool,
) -> Result<()> {
    if let Some(path) = output {
        session.export(tool, path)?;
        log::info!("Wrote {}", path.display());
    } else if save {
        let name = session.export_filename(tool, Local::now());
        session.export(tool, Path::new(&name))?;
        log::info!("Wrote {name}");
    } else if !json {
        log::info!("{stats}");
        println!("{}", session.text(tool));
    }
    Ok(())
}

/// Turns the file/inline flag pair into a session input. `-` reads stdin
/// to end before the pipeline runs.
fn resolve_source(
    file: Option<&Path>,
    text: Option<&str>,
    slot: &'static str,
) -> Result<Input> {
    if let Some(path) = file {
        if path.as_os_str() == "-" {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            return Ok(Input::Inline(buf));
        }
        return Ok(Input::File(path.to_path_buf()));
    }
    if let Some(text) = text {
        return Ok(Input::Inline(text.to_string()));
    }
    Err(SessionError::MissingInput(slot).into())
}
