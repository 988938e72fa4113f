//! Display functions for command results

use super::formatters::{create_progress_bar, ladder_line, split_change};
use crate::commands::{AnalysisResult, BenchmarkResult, BuildResult, QueryOutcome, QueryResult};
use crate::core::Word;
use crate::search::{AllPathsResult, PathResult};
use colored::Colorize;

/// Print the result of building a graph
pub fn print_build_result(result: &BuildResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GRAPH BUILT:".bright_cyan().bold(),
        format!("{} mode", result.graph.mode()).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Corpus words:  {}", result.corpus_words);
    println!("   Word length:   {}", result.graph.word_length());
    println!("   Nodes:         {}", result.graph.node_count());
    println!("   Edges:         {}", result.graph.edge_count());
    println!("   Time taken:    {:.2}s", result.duration.as_secs_f64());
    if let Some(path) = &result.output {
        println!("   Saved to:      {}", path.display().to_string().green());
    }
}

/// Print the result of a path query
pub fn print_query_result(result: &QueryResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        result.source.text().bright_yellow().bold(),
        result.target.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match &result.outcome {
        QueryOutcome::Single(PathResult::Found(path)) => {
            print_ladder(path);
            print_distance(path.len() - 1);
        }
        QueryOutcome::All(AllPathsResult::Found {
            distance,
            paths,
            truncated,
        }) => {
            for (i, path) in paths.iter().enumerate() {
                println!("  {:>3}. {}", i + 1, ladder_line(path));
            }
            println!();
            print_distance(*distance);
            let summary = format!("{} shortest ladder(s)", paths.len());
            if *truncated {
                println!(
                    "{}",
                    format!("{summary}, stopped at the limit").yellow()
                );
            } else {
                println!("{summary}");
            }
        }
        QueryOutcome::Single(PathResult::Unreachable) | QueryOutcome::All(AllPathsResult::Unreachable) => {
            println!(
                "\n{}",
                format!(
                    "❌ No ladder: {} is unreachable from {}",
                    result.target, result.source
                )
                .red()
                .bold()
            );
        }
    }
    println!(
        "{}",
        format!("   ({:.3}ms)", result.duration.as_secs_f64() * 1000.0).bright_black()
    );
}

fn print_ladder(path: &[Word]) {
    for (i, word) in path.iter().enumerate() {
        if i == 0 {
            println!("\n  {:>3}  {}", i, word.text().bold());
            continue;
        }
        let (before, changed, after) = split_change(&path[i - 1], word);
        println!(
            "  {:>3}  {}{}{}",
            i,
            before,
            changed.bright_green().bold(),
            after
        );
    }
}

fn print_distance(distance: usize) {
    println!();
    println!(
        "{}",
        format!(
            "✅ {distance} step{}",
            if distance == 1 { "" } else { "s" }
        )
        .green()
        .bold()
    );
}

/// Print the result of graph analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    let stats = &result.stats;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GRAPH ANALYSIS:".bright_cyan().bold(),
        format!("{}-letter {} graph", stats.word_length, stats.mode)
            .bright_yellow()
            .bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Shape:".bright_cyan().bold());
    println!("   Nodes:              {}", stats.nodes);
    println!("   Edges:              {}", stats.edges);
    println!("   Valid words:        {}", stats.valid_nodes);
    if result.excluded_isolated > 0 {
        println!("   Aloof words (excl): {}", result.excluded_isolated);
    } else {
        println!("   Aloof words:        {}", stats.isolated);
    }
    println!("   Components:         {}", stats.components);
    println!("   Largest component:  {}", stats.largest_component);
    println!("   Max degree:         {}", stats.max_degree);
    println!("   Mean degree:        {:.2}", stats.mean_degree);

    if !result.hubs.is_empty() {
        println!("\n🔗 {}", "Most Connected Words:".bright_cyan().bold());
        let max = result.hubs.first().map_or(1, |(_, d)| *d) as f64;
        for (word, degree) in &result.hubs {
            let bar = create_progress_bar(*degree as f64, max, 20);
            println!("   {:<8} [{}] {degree}", word.text(), bar.green());
        }
    }

    if let Some(diameter) = &result.diameter {
        println!("\n📏 {}", "Diameter:".bright_cyan().bold());
        println!(
            "   {} steps",
            diameter.length.to_string().bright_yellow().bold()
        );
        println!("   Path:      {}", ladder_line(&diameter.path));
        println!("   Periphery: {} words", diameter.periphery.len());
    }

    if !result.central.is_empty() {
        println!(
            "\n🎯 {}",
            "Most Central Words (Betweenness):".bright_cyan().bold()
        );
        for (word, score) in &result.central {
            println!("   {:<8} {score:.4}", word.text());
        }
    }

    if !result.components.is_empty() {
        println!("\n🧩 {}", "Largest Components:".bright_cyan().bold());
        print_word_groups(&result.components);
    }

    if !result.communities.is_empty() {
        println!(
            "\n🏘  {} {}",
            "Communities:".bright_cyan().bold(),
            format!("({} found)", result.community_count).bright_black()
        );
        print_word_groups(&result.communities);
    }

    println!(
        "\n{}",
        format!("   ({:.2}s)", result.duration.as_secs_f64()).bright_black()
    );
}

fn print_word_groups(groups: &[Vec<Word>]) {
    for (i, group) in groups.iter().enumerate() {
        let preview: Vec<&str> = group.iter().take(5).map(Word::text).collect();
        println!(
            "   {i}: {} words: {}{}",
            group.len(),
            preview.join(", "),
            if group.len() > 5 { ", …" } else { "" }
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Queries:          {}", result.total_queries);
    println!(
        "   Reachable:        {}",
        result.reachable.to_string().green()
    );
    println!(
        "   Unreachable:      {}",
        result.unreachable.to_string().yellow()
    );
    println!(
        "   Average length:   {}",
        format!("{:.2}", result.average_distance)
            .bright_yellow()
            .bold()
    );
    if let (Some(min), Some(max)) = (result.min_distance, result.max_distance) {
        println!("   Shortest ladder:  {}", min.to_string().green());
        println!("   Longest ladder:   {}", max.to_string().yellow());
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Queries/second:   {:.1}", result.queries_per_second);

    if result.total_queries == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let total = result.total_queries as f64;
    for (&distance, &count) in &result.distribution {
        let pct = count as f64 / total * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {distance:>3}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
    if result.unreachable > 0 {
        let pct = result.unreachable as f64 / total * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!(
            "     ∞: {} {:5} ({pct:5.1}%)",
            bar.yellow(),
            result.unreachable
        );
    }
}
