//! Word Ladder
//!
//! Graphs of same-length words joined by single-letter substitutions, with
//! breadth-first shortest-ladder queries over them.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use word_ladder::core::Word;
//! use word_ladder::corpus::Corpus;
//! use word_ladder::graph::build_valid;
//! use word_ladder::search::shortest_path;
//!
//! let corpus = Corpus::load(["cat", "cot", "cog", "dog"], 3).unwrap();
//! let graph = build_valid(&corpus);
//!
//! let cat = Word::new("cat").unwrap();
//! let dog = Word::new("dog").unwrap();
//! let ladder = shortest_path(&graph, &cat, &dog).unwrap();
//! println!("{:?}", ladder.words());
//! ```

// Core domain types
pub mod core;

// Dictionary loading
pub mod corpus;

// Graph construction and persistence
pub mod graph;

// Shortest-path search
pub mod search;

// Structural analysis
pub mod analysis;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
