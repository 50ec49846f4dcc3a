//! contentgrade: Content Quality Analyzer CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use contentgrade::analyzer::ContentAnalyzer;
use contentgrade::config::{
    build_ignore_set, default_config_json, is_ignored, load_config, CONFIG_FILENAME,
};
use contentgrade::reporter::{ConsoleReporter, JsonReporter};
use contentgrade::{AnalysisOptions, AnalysisResult, Dimension};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use walkdir::WalkDir;

/// contentgrade: Content Quality Analyzer for Markdown and HTML
#[derive(Parser, Debug)]
#[command(name = "contentgrade")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Content file or directory to analyze, or - to read stdin
    path: Option<PathBuf>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Minimum score threshold (exit 1 if any document is below)
    #[arg(long, short)]
    threshold: Option<f64>,

    /// Quiet mode (one line per document)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output (all issues, debug logging)
    #[arg(long, short)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Target keyword for SEO keyword density
    #[arg(long, short)]
    keyword: Option<String>,

    /// Skip a dimension (repeatable): structure, readability, seo, length, keywords, engagement
    #[arg(long, value_name = "DIM")]
    skip: Vec<Dimension>,

    /// Path to config file (default: search .contentgraderc.json in the input directory and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run analysis in parallel (default for directories with many files)
    #[arg(long)]
    parallel: bool,

    /// Number of parallel threads (default: number of CPU cores)
    #[arg(long, value_name = "N")]
    jobs: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create .contentgraderc.json with sensible defaults
    Init {
        /// Minimum score threshold (e.g. 70)
        #[arg(long)]
        threshold: Option<f64>,

        /// Target keyword for SEO keyword density
        #[arg(long)]
        keyword: Option<String>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

/// Files above this count are analyzed in parallel even without --parallel
const PARALLEL_FILE_COUNT: usize = 10;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();
    contentgrade::logging::init(args.verbose)?;
    if args.no_color {
        colored::control::set_override(false);
    }

    if let Some(cmd) = args.command {
        match cmd {
            Commands::Init {
                threshold,
                keyword,
                dir,
            } => {
                return run_init(threshold, keyword.as_deref(), dir.as_deref());
            }
        }
    }

    let path = args
        .path
        .clone()
        .context("PATH is required (a file, a directory, or - for stdin)")?;
    let reading_stdin = path.as_os_str() == "-";

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let work_dir = if reading_stdin {
        cwd.clone()
    } else {
        config_search_dir(&path, &cwd)
    };

    // CLI flags override config file
    let config = load_config(&work_dir, args.config.as_deref())?.merge_with_cli(
        args.threshold,
        args.keyword.as_deref(),
        &args.skip,
    );
    let options = config.analysis_options();
    tracing::debug!(?options, threshold = ?config.threshold, "effective configuration");

    let analyzer = ContentAnalyzer::new();

    let (results, had_errors) = if reading_stdin {
        let content = std::io::read_to_string(std::io::stdin())
            .context("Failed to read content from stdin")?;
        (vec![analyzer.analyze(&content, &options)], false)
    } else {
        let ignore_set = if config.ignore.is_empty() {
            None
        } else {
            Some(build_ignore_set(&config.ignore)?)
        };
        let extensions = config.get_extensions();
        let files = collect_content_files(&path, ignore_set.as_ref(), &extensions)?;

        if files.is_empty() {
            eprintln!("{}: No content files found", "Warning".yellow());
            return Ok(ExitCode::from(2));
        }

        if let Some(jobs) = args.jobs {
            rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build_global()
                .ok();
        }

        let use_parallel = args.parallel || files.len() > PARALLEL_FILE_COUNT;
        tracing::debug!(files = files.len(), parallel = use_parallel, "analyzing files");
        analyze_files(&analyzer, &files, &options, use_parallel, args.quiet)
    };

    if results.is_empty() {
        eprintln!("{}: All files failed to analyze", "Error".red());
        return Ok(ExitCode::from(2));
    }

    let stats = ContentAnalyzer::aggregate_stats(&results);

    if args.json {
        let reporter = JsonReporter::new().pretty();
        if results.len() == 1 {
            println!("{}", reporter.report(&results[0]));
        } else {
            println!("{}", reporter.report_with_summary(&results, &stats));
        }
    } else {
        let mut reporter = ConsoleReporter::new();
        if args.no_color {
            reporter = reporter.without_colors();
        }
        if args.verbose {
            reporter = reporter.verbose();
        }
        if args.quiet {
            for result in &results {
                reporter.report_quiet(result);
            }
        } else if results.len() == 1 {
            reporter.report(&results[0]);
        } else {
            reporter.report_many(&results, &stats);
        }
    }

    if let Some(threshold) = config.threshold {
        let below: Vec<&AnalysisResult> = results
            .iter()
            .filter(|r| r.overall_score < threshold)
            .collect();
        if !below.is_empty() {
            if !args.quiet && !args.json {
                for result in &below {
                    eprintln!(
                        "\n{}: {} scored {} which is below threshold {}",
                        "Failed".red().bold(),
                        display_source(result),
                        result.overall_score,
                        threshold
                    );
                }
            }
            return Ok(ExitCode::from(1));
        }
    }

    if had_errors {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn run_init(
    threshold: Option<f64>,
    keyword: Option<&str>,
    dir: Option<&Path>,
) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let json = default_config_json(threshold, keyword);
    std::fs::write(&config_path, format!("{json}\n"))
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!(
        "{}: Created {}",
        "Done".green().bold(),
        config_path.display()
    );
    Ok(ExitCode::SUCCESS)
}

/// Directory where the config search starts for a given input path
fn config_search_dir(path: &Path, cwd: &Path) -> PathBuf {
    let dir = if path.is_file() {
        path.parent().unwrap_or(Path::new(""))
    } else {
        path
    };
    if dir.as_os_str().is_empty() {
        cwd.to_path_buf()
    } else {
        dir.to_path_buf()
    }
}

fn collect_content_files(
    path: &Path,
    ignore_set: Option<&globset::GlobSet>,
    extensions: &[String],
) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        if let Some(set) = ignore_set {
            if is_ignored(path, set) {
                return Ok(vec![]);
            }
        }
        return Ok(vec![path.to_path_buf()]);
    }

    if !path.is_dir() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let file_path = entry.path();
        if !entry.file_type().is_file() || !has_content_extension(file_path, extensions) {
            continue;
        }
        if let Some(set) = ignore_set {
            if is_ignored(file_path, set) {
                tracing::trace!(path = %file_path.display(), "ignored by config");
                continue;
            }
        }
        files.push(file_path.to_path_buf());
    }

    // Sort for consistent output
    files.sort();

    Ok(files)
}

fn has_content_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

fn analyze_files(
    analyzer: &ContentAnalyzer,
    files: &[PathBuf],
    options: &AnalysisOptions,
    parallel: bool,
    quiet: bool,
) -> (Vec<AnalysisResult>, bool) {
    let outcomes = if parallel {
        analyzer.analyze_parallel(files, options)
    } else {
        analyzer.analyze_many(files, options)
    };

    let mut results = Vec::with_capacity(outcomes.len());
    let mut had_errors = false;
    for (file, outcome) in files.iter().zip(outcomes) {
        match outcome {
            Ok(result) => results.push(result),
            Err(e) => {
                had_errors = true;
                if !quiet {
                    eprintln!(
                        "{}: Failed to analyze {}: {:#}",
                        "Error".red(),
                        file.display(),
                        e
                    );
                }
            }
        }
    }

    (results, had_errors)
}

fn display_source(result: &AnalysisResult) -> String {
    result
        .source
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string())
}
