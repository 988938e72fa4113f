//! Word Ladder - CLI
//!
//! Builds word ladder graphs from word lists, saves them as JSON and answers
//! shortest-ladder queries against them.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};
use word_ladder::{
    commands::{
        AnalyzeConfig, BenchmarkConfig, BuildConfig, QueryConfig, analyze_graph, build_graph,
        load_graph, parse_query_word, query_path, run_benchmark,
    },
    corpus::loader::load_from_file,
    graph::{AnyGraph, GraphBuilder, GraphMode},
    output::{
        print_analysis_result, print_benchmark_result, print_build_result, print_query_result,
    },
};

const DEFAULT_GRAPH: &str = "graph.json";

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Word ladder graphs: build them from a word list, then find the shortest ladders",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug output to stderr (overridden by WORD_LADDER_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a graph from a word list and save it
    BuildGraph {
        /// Word list file, one word per line
        #[arg(short, long)]
        input: PathBuf,

        /// Keep only words of this length
        #[arg(short = 'l', long)]
        word_length: usize,

        /// Graph mode: candidate (all one-letter variants) or valid (dictionary words only)
        #[arg(short, long, default_value = "valid")]
        mode: GraphMode,

        /// Where to write the graph
        #[arg(short, long, default_value = DEFAULT_GRAPH)]
        output: PathBuf,

        /// Generate neighbor pairs across all cores
        #[arg(short, long)]
        parallel: bool,
    },

    /// Find the shortest ladder between two words
    QueryPath {
        /// Starting word
        #[arg(short, long)]
        source: String,

        /// Word to reach
        #[arg(short, long)]
        target: String,

        /// Saved graph to query
        #[arg(short, long, default_value = DEFAULT_GRAPH, conflicts_with = "words")]
        graph: PathBuf,

        /// Build a valid graph from this word list instead of loading one
        #[arg(short, long)]
        words: Option<PathBuf>,

        /// List every shortest ladder
        #[arg(short, long)]
        all: bool,

        /// Stop listing after this many ladders
        #[arg(long, default_value = "100")]
        limit: usize,
    },

    /// Summarize a saved graph
    Analyze {
        /// Saved graph to analyze
        #[arg(short, long, default_value = DEFAULT_GRAPH)]
        graph: PathBuf,

        /// Keep aloof (neighborless) words in the analysis
        #[arg(long)]
        aloof: bool,

        /// Compute the diameter of the largest component
        #[arg(short, long)]
        diameter: bool,

        /// Report the N most central words by betweenness
        #[arg(short, long, value_name = "N")]
        betweenness: Option<usize>,

        /// List the N largest connected components
        #[arg(short, long, value_name = "N")]
        components: Option<usize>,

        /// List the N largest communities (Louvain)
        #[arg(long, value_name = "N")]
        communities: Option<usize>,

        /// Seed for community detection
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Time random queries between valid words
    Benchmark {
        /// Saved graph to benchmark
        #[arg(short, long, default_value = DEFAULT_GRAPH)]
        graph: PathBuf,

        /// Number of random queries
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Seed for choosing query endpoints
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::BuildGraph {
            input,
            word_length,
            mode,
            output,
            parallel,
        } => run_build_command(input, word_length, mode, output, parallel),
        Commands::QueryPath {
            source,
            target,
            graph,
            words,
            all,
            limit,
        } => run_query_command(source, target, &graph, words.as_deref(), all, limit),
        Commands::Analyze {
            graph,
            aloof,
            diameter,
            betweenness,
            components,
            communities,
            seed,
        } => {
            let config = AnalyzeConfig {
                include_isolated: aloof,
                diameter,
                betweenness,
                components,
                communities,
                seed,
                ..AnalyzeConfig::new()
            };
            run_analyze_command(&graph, &config)
        }
        Commands::Benchmark { graph, count, seed } => run_benchmark_command(&graph, count, seed),
    }
}

/// Log to stderr so stdout carries only command output
fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "word_ladder=debug"
    } else {
        "word_ladder=info,warn"
    };
    let filter = EnvFilter::try_from_env("WORD_LADDER_LOG")
        .unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn run_build_command(
    input: PathBuf,
    word_length: usize,
    mode: GraphMode,
    output: PathBuf,
    parallel: bool,
) -> Result<()> {
    let mut config = BuildConfig::new(input, word_length);
    config.mode = mode;
    config.output = Some(output);
    config.parallel = parallel;

    let result = build_graph(&config)
        .with_context(|| format!("failed to build graph from {}", config.input.display()))?;
    print_build_result(&result);
    Ok(())
}

fn run_query_command(
    source: String,
    target: String,
    graph_path: &Path,
    words: Option<&Path>,
    all: bool,
    limit: usize,
) -> Result<()> {
    let graph = match words {
        Some(path) => graph_from_words(path, &source)?,
        None => read_graph(graph_path)?,
    };

    let mut config = QueryConfig::new(source, target);
    config.all = all;
    config.limit = Some(limit);

    let result = query_path(&graph, &config)
        .with_context(|| format!("query {} → {} failed", config.source, config.target))?;
    print_query_result(&result);
    Ok(())
}

/// Build a valid graph on the fly, sized to the source word
fn graph_from_words(path: &Path, source: &str) -> Result<AnyGraph> {
    let word_length = parse_query_word(source)
        .with_context(|| format!("invalid source word {source:?}"))?
        .len();
    let corpus = load_from_file(path, word_length)
        .with_context(|| format!("failed to load words from {}", path.display()))?;
    Ok(GraphBuilder::new(&corpus)
        .parallel(true)
        .build(GraphMode::Valid))
}

fn read_graph(path: &Path) -> Result<AnyGraph> {
    load_graph(path).with_context(|| format!("failed to load graph from {}", path.display()))
}

fn run_analyze_command(graph_path: &Path, config: &AnalyzeConfig) -> Result<()> {
    let graph = read_graph(graph_path)?;

    let result = analyze_graph(&graph, config);
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(graph_path: &Path, count: usize, seed: u64) -> Result<()> {
    let graph = read_graph(graph_path)?;

    println!("Running {count} random queries on the {} graph...", graph.mode());

    let mut config = BenchmarkConfig::new(count);
    config.seed = seed;

    let result = run_benchmark(&graph, &config).context("benchmark failed")?;
    print_benchmark_result(&result);
    Ok(())
}
