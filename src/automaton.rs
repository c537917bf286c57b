//! The compiled automaton and its public operations.

use std::collections::HashMap;

use tracing::trace;

use crate::compile::{insert_word, link_all, link_chain};
use crate::node::{NodeRef, Trie};
use crate::search::scan;
use crate::types::{Match, SearchOptions};

/// A compiled dictionary: trie plus failure links, ready to scan content.
///
/// Built by [`compile()`](crate::compile()) (or
/// [`compile_async`](crate::compile_async)). The structure is a single
/// mutable trie: [`add`](Automaton::add) mutates it in place while
/// [`search`](Automaton::search) only reads, and no internal locking is
/// performed; callers needing concurrent access must serialize mutation
/// externally.
#[derive(Debug)]
pub struct Automaton {
    trie: Trie,
}

impl Automaton {
    pub(crate) fn from_trie(trie: Trie) -> Self {
        Self { trie }
    }

    /// Insert one additional word into the compiled automaton.
    ///
    /// The word is trimmed; empty or whitespace-only input is silently
    /// ignored. Failure links are recomputed only along the new word's own
    /// root-to-leaf chain. Pre-existing nodes elsewhere in the tree whose
    /// failure link should now point into a node created by this call are
    /// not revisited; call [`rebuild_links`](Automaton::rebuild_links) after
    /// a batch of inserts when the fully correct assignment matters.
    pub fn add(&mut self, word: &str) {
        let word = word.trim();
        if word.is_empty() {
            return;
        }

        let chain = insert_word(&mut self.trie, word);
        link_chain(&mut self.trie, &chain);
        trace!(word, "added word");
    }

    /// Re-run the full breadth-first failure-link pass over the whole trie.
    ///
    /// After this, links are identical to those of an automaton compiled
    /// from the complete dictionary in one go.
    pub fn rebuild_links(&mut self) {
        link_all(&mut self.trie);
    }

    /// Scan `content` left to right and report every occurrence of every
    /// dictionary word as `(offset, word)` matches.
    ///
    /// Offsets are counted in chars, not bytes. Results are ordered by the
    /// position where each occurrence ends; at a single end position the
    /// longest word comes first, so start offsets are not globally sorted.
    /// `options.quick` stops the whole scan at the first match;
    /// `options.longest` keeps only the longest word per distinct offset
    /// (and its output is ascending by offset).
    pub fn search(&self, content: &str, options: SearchOptions) -> Vec<Match> {
        scan(&self.trie, content, options)
    }

    /// Scan `content` and aggregate matches into per-word occurrence counts.
    pub fn search_and_count(&self, content: &str, options: SearchOptions) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for m in self.search(content, options) {
            *counts.entry(m.word).or_insert(0) += 1;
        }
        counts
    }

    /// Walk trie edges from the root along `word`.
    ///
    /// Returns the terminal node if the full path exists, or `None` the
    /// moment an edge is absent (empty input included). For structural
    /// introspection, not part of the scanning hot path.
    pub fn locate(&self, word: &str) -> Option<NodeRef<'_>> {
        let mut chars = word.chars();
        let mut current = self.trie.child(Trie::ROOT, chars.next()?)?;
        for ch in chars {
            current = self.trie.child(current, ch)?;
        }
        Some(NodeRef::new(&self.trie, current))
    }

    /// Number of distinct words in the dictionary.
    pub fn word_count(&self) -> usize {
        self.trie.word_count()
    }

    /// Number of trie nodes, root included.
    pub fn node_count(&self) -> usize {
        self.trie.len()
    }
}
