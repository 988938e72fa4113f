//! Graph persistence
//!
//! A built graph is saved as a JSON document so it can be reloaded without
//! recomputation:
//!
//! ```json
//! {
//!   "format_version": 1,
//!   "mode": "valid",
//!   "word_length": 3,
//!   "nodes": [{"word": "aal", "is_valid": true}, {"word": "aam", "is_valid": true}],
//!   "edges": [["aal", "aam"]]
//! }
//! ```
//!
//! Nodes and edges are written in lexicographic order. Loading validates the
//! whole document and never returns a partial graph.

use super::{AnyGraph, Graph, GraphMode, Mode, Node};
use crate::core::{PersistError, Word};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// Current on-disk format version
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct GraphDocument {
    format_version: u32,
    mode: GraphMode,
    word_length: usize,
    nodes: Vec<NodeRecord>,
    edges: Vec<(String, String)>,
}

#[derive(Debug, Serialize, Deserialize)]
struct NodeRecord {
    word: String,
    is_valid: bool,
}

impl<M: Mode> Graph<M> {
    fn to_document(&self) -> GraphDocument {
        GraphDocument {
            format_version: FORMAT_VERSION,
            mode: M::KIND,
            word_length: self.word_length(),
            nodes: self
                .nodes()
                .iter()
                .map(|node| NodeRecord {
                    word: node.word().text().to_string(),
                    is_valid: node.is_valid(),
                })
                .collect(),
            edges: self
                .edges()
                .map(|(a, b)| (a.text().to_string(), b.text().to_string()))
                .collect(),
        }
    }

    /// Write the graph as JSON
    ///
    /// # Errors
    /// Returns `PersistError` if serialization or the writer fails.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), PersistError> {
        serde_json::to_writer(writer, &self.to_document())?;
        Ok(())
    }

    /// Serialize the graph to a JSON string
    ///
    /// # Errors
    /// Returns `PersistError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string(&self.to_document())?)
    }

    /// Read a graph of this mode from JSON
    ///
    /// # Errors
    /// Returns `PersistError::ModeMismatch` if the document holds the other
    /// mode, or any error [`AnyGraph::from_reader`] reports.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, PersistError> {
        let document: GraphDocument = serde_json::from_reader(reader)?;
        Self::from_document(document)
    }

    /// Parse a graph of this mode from a JSON string
    ///
    /// # Errors
    /// See [`Graph::from_reader`].
    pub fn from_json(json: &str) -> Result<Self, PersistError> {
        let document: GraphDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    fn from_document(document: GraphDocument) -> Result<Self, PersistError> {
        if document.mode != M::KIND {
            return Err(PersistError::ModeMismatch {
                found: document.mode.name(),
                expected: M::KIND.name(),
            });
        }
        let (word_length, nodes, edges) = decode(document)?;
        Ok(Self::assemble(word_length, nodes, edges))
    }
}

impl AnyGraph {
    /// Write whichever graph this is as JSON
    ///
    /// # Errors
    /// Returns `PersistError` if serialization or the writer fails.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), PersistError> {
        match self {
            Self::Candidate(g) => g.to_writer(writer),
            Self::Valid(g) => g.to_writer(writer),
        }
    }

    /// # Errors
    /// Returns `PersistError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, PersistError> {
        match self {
            Self::Candidate(g) => g.to_json(),
            Self::Valid(g) => g.to_json(),
        }
    }

    /// Read a graph of either mode, as recorded in the document
    ///
    /// # Errors
    /// Returns `PersistError` for unreadable JSON, an unsupported version, or
    /// any structural problem: bad words, duplicate nodes, edges to unknown
    /// nodes, self-loops, duplicate edges, edges between non-neighbors, or
    /// invalid nodes in a `valid` graph.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, PersistError> {
        let document: GraphDocument = serde_json::from_reader(reader)?;
        Self::from_document(document)
    }

    /// # Errors
    /// See [`AnyGraph::from_reader`].
    pub fn from_json(json: &str) -> Result<Self, PersistError> {
        let document: GraphDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    fn from_document(document: GraphDocument) -> Result<Self, PersistError> {
        match document.mode {
            GraphMode::Candidate => Graph::from_document(document).map(Self::Candidate),
            GraphMode::Valid => Graph::from_document(document).map(Self::Valid),
        }
    }
}

type Decoded = (usize, Vec<Node>, Vec<(usize, usize)>);

fn decode(document: GraphDocument) -> Result<Decoded, PersistError> {
    if document.format_version != FORMAT_VERSION {
        return Err(PersistError::UnsupportedVersion {
            found: document.format_version,
            expected: FORMAT_VERSION,
        });
    }

    let word_length = document.word_length;
    if word_length == 0 {
        return Err(PersistError::Malformed(
            "word length must be positive".to_string(),
        ));
    }

    let mut nodes = Vec::with_capacity(document.nodes.len());
    let mut index: FxHashMap<Word, usize> = FxHashMap::default();
    for record in document.nodes {
        let word = parse_word(&record.word, word_length)?;
        if document.mode == GraphMode::Valid && !record.is_valid {
            return Err(PersistError::Malformed(format!(
                "node '{word}' is not valid in a validity-restricted graph"
            )));
        }
        if index.insert(word.clone(), nodes.len()).is_some() {
            return Err(PersistError::Malformed(format!("duplicate node '{word}'")));
        }
        nodes.push(Node::new(word, record.is_valid));
    }

    let mut seen: FxHashSet<(usize, usize)> = FxHashSet::default();
    let mut edges = Vec::with_capacity(document.edges.len());
    for (a, b) in document.edges {
        let a = endpoint(&index, &a, word_length)?;
        let b = endpoint(&index, &b, word_length)?;
        let (wa, wb) = (nodes[a].word(), nodes[b].word());

        if a == b {
            return Err(PersistError::Malformed(format!("self-loop on '{wa}'")));
        }
        if !wa.is_adjacent(wb) {
            return Err(PersistError::Malformed(format!(
                "edge '{wa}'-'{wb}' joins words that do not differ in exactly one letter"
            )));
        }
        if !seen.insert((a.min(b), a.max(b))) {
            return Err(PersistError::Malformed(format!(
                "duplicate edge '{wa}'-'{wb}'"
            )));
        }
        edges.push((a, b));
    }

    Ok((word_length, nodes, edges))
}

fn parse_word(text: &str, word_length: usize) -> Result<Word, PersistError> {
    let word = Word::new(text).map_err(|e| PersistError::Malformed(e.to_string()))?;
    if word.len() != word_length {
        return Err(PersistError::Malformed(format!(
            "word '{word}' has length {}, expected {word_length}",
            word.len()
        )));
    }
    Ok(word)
}

fn endpoint(
    index: &FxHashMap<Word, usize>,
    text: &str,
    word_length: usize,
) -> Result<usize, PersistError> {
    let word = parse_word(text, word_length)?;
    index
        .get(&word)
        .copied()
        .ok_or_else(|| PersistError::Malformed(format!("edge endpoint '{word}' is not a node")))
}
