//! Dictionary compilation: trie insertion and failure-link computation.
//!
//! The full failure-link pass runs breadth-first by depth, because a node's
//! link is derived from its parent's already-computed link. The pass is
//! expressed as a resumable [`LinkPass`] so a large build can yield control
//! back to the scheduler between batches instead of monopolizing it.

use std::collections::{BTreeSet, VecDeque};

use tracing::debug;

use crate::automaton::Automaton;
use crate::node::{NodeId, Trie};
#[cfg(feature = "async")]
use crate::types::BuildOptions;

/// Trim, drop empties, deduplicate and sort a raw word list.
///
/// The sort order is not required by the algorithm itself but keeps node
/// allocation order reproducible across runs.
pub(crate) fn deduplicate<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    let unique: BTreeSet<&str> = words
        .iter()
        .map(|word| word.as_ref().trim())
        .filter(|word| !word.is_empty())
        .collect();

    unique.into_iter().map(String::from).collect()
}

/// Insert one word into the trie, reusing existing edges.
///
/// Returns the root-to-leaf chain of node ids, in depth order. Inserting a
/// word that is already present is a no-op beyond confirming its terminal
/// node is accepting.
pub(crate) fn insert_word(trie: &mut Trie, word: &str) -> Vec<NodeId> {
    let mut chain = Vec::new();
    let mut current = Trie::ROOT;

    for ch in word.chars() {
        current = match trie.child(current, ch) {
            Some(next) => next,
            None => trie.alloc(ch, current),
        };
        chain.push(current);
    }

    if let Some(&terminal) = chain.last() {
        trie.mark_accept(terminal);
    }

    chain
}

/// Compute the failure link for `id` from its parent's failure chain.
///
/// Walks `parent.failure`, `parent.failure.failure`, … looking for a node
/// with a child on this node's character; falls back to the root. The node
/// itself is never a valid target, so failure chains cannot form cycles.
fn compute_failure(trie: &Trie, id: NodeId) -> NodeId {
    let node = trie.node(id);
    let Some(ch) = node.value else {
        return Trie::ROOT;
    };

    let mut cursor = node.parent.and_then(|parent| trie.node(parent).failure);
    while let Some(back) = cursor {
        if let Some(child) = trie.child(back, ch) {
            if child != id {
                return child;
            }
        }
        cursor = trie.node(back).failure;
    }

    Trie::ROOT
}

/// Recompute failure links along one freshly inserted chain only.
///
/// The first node of the chain always links to the root, so the walk starts
/// at the second. Pre-existing nodes elsewhere in the tree are not revisited;
/// see [`Automaton::add`] for the implications.
pub(crate) fn link_chain(trie: &mut Trie, chain: &[NodeId]) {
    for &id in chain.iter().skip(1) {
        let failure = compute_failure(trie, id);
        trie.node_mut(id).failure = Some(failure);
    }
}

/// Resumable breadth-first failure-link pass over the whole trie.
///
/// `run` processes up to `budget` nodes and returns whether the pass is
/// complete; the queue carries all state, so the pass picks up exactly where
/// it stopped.
pub(crate) struct LinkPass {
    queue: VecDeque<NodeId>,
}

impl LinkPass {
    pub fn new(trie: &Trie) -> Self {
        Self {
            queue: trie.node(Trie::ROOT).children.values().copied().collect(),
        }
    }

    /// Process up to `budget` nodes; returns true when the pass is done.
    pub fn run(&mut self, trie: &mut Trie, budget: usize) -> bool {
        let mut ops = 0;
        while let Some(id) = self.queue.pop_front() {
            let failure = compute_failure(trie, id);
            trie.node_mut(id).failure = Some(failure);
            self.queue.extend(trie.node(id).children.values().copied());

            ops += 1;
            if ops >= budget {
                return self.queue.is_empty();
            }
        }
        true
    }
}

/// Run the full failure-link pass to completion in one go.
pub(crate) fn link_all(trie: &mut Trie) {
    let mut pass = LinkPass::new(trie);
    pass.run(trie, usize::MAX);
}

/// Build a compiled automaton from a word list.
///
/// Words are trimmed, deduplicated and sorted before insertion; empty and
/// whitespace-only entries are dropped. An empty list yields an automaton
/// that matches nothing.
pub fn compile<S: AsRef<str>>(words: &[S]) -> Automaton {
    let sorted = deduplicate(words);

    let mut trie = Trie::new();
    for word in &sorted {
        insert_word(&mut trie, word);
    }
    link_all(&mut trie);

    debug!(
        words = sorted.len(),
        nodes = trie.len(),
        "compiled dictionary"
    );

    Automaton::from_trie(trie)
}

/// Build a compiled automaton, yielding to the tokio scheduler after every
/// `options.batch_size` insertion or link operations.
///
/// Match-equivalent to [`compile`]; the yields only keep a very large build
/// (tens of thousands of words) from monopolizing a shared runtime. No work
/// runs in parallel, state simply resumes after each yield.
#[cfg(feature = "async")]
pub async fn compile_async<S: AsRef<str>>(words: &[S], options: BuildOptions) -> Automaton {
    let batch = options.batch_size.max(1);
    let sorted = deduplicate(words);

    let mut trie = Trie::new();
    for (inserted, word) in sorted.iter().enumerate() {
        insert_word(&mut trie, word);
        if (inserted + 1) % batch == 0 {
            tokio::task::yield_now().await;
        }
    }

    let mut pass = LinkPass::new(&trie);
    while !pass.run(&mut trie, batch) {
        tokio::task::yield_now().await;
    }

    debug!(
        words = sorted.len(),
        nodes = trie.len(),
        batch_size = batch,
        "compiled dictionary"
    );

    Automaton::from_trie(trie)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure_of(trie: &Trie, word: &str) -> Option<NodeId> {
        let terminal = terminal_of(trie, word)?;
        trie.node(terminal).failure
    }

    fn terminal_of(trie: &Trie, word: &str) -> Option<NodeId> {
        let mut current = Trie::ROOT;
        for ch in word.chars() {
            current = trie.child(current, ch)?;
        }
        Some(current)
    }

    #[test]
    fn test_deduplicate_trims_and_sorts() {
        let words = vec!["  b ", "a", "", "a", "   ", "c"];
        assert_eq!(deduplicate(&words), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_insert_reuses_edges() {
        let mut trie = Trie::new();
        insert_word(&mut trie, "ab");
        let before = trie.len();
        let chain = insert_word(&mut trie, "abc");
        assert_eq!(trie.len(), before + 1);
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn test_insert_empty_word_is_noop() {
        let mut trie = Trie::new();
        let chain = insert_word(&mut trie, "");
        assert!(chain.is_empty());
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.word_count(), 0);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut trie = Trie::new();
        insert_word(&mut trie, "abc");
        let nodes = trie.len();
        insert_word(&mut trie, "abc");
        assert_eq!(trie.len(), nodes);
        assert_eq!(trie.word_count(), 1);
    }

    #[test]
    fn test_prefix_word_marks_inner_node() {
        let mut trie = Trie::new();
        insert_word(&mut trie, "abc");
        insert_word(&mut trie, "ab");
        let ab = terminal_of(&trie, "ab").unwrap();
        assert!(trie.node(ab).accept);
        assert!(!trie.node(ab).children.is_empty());
    }

    #[test]
    fn test_link_all_finds_suffix_targets() {
        let mut trie = Trie::new();
        insert_word(&mut trie, "ab");
        insert_word(&mut trie, "b");
        link_all(&mut trie);

        // "ab" falls back to the "b" branch, "a" and "b" to the root
        assert_eq!(failure_of(&trie, "ab"), terminal_of(&trie, "b"));
        assert_eq!(failure_of(&trie, "a"), Some(Trie::ROOT));
        assert_eq!(failure_of(&trie, "b"), Some(Trie::ROOT));
    }

    #[test]
    fn test_link_all_deep_suffix() {
        let mut trie = Trie::new();
        for word in ["bca", "ca", "a"] {
            insert_word(&mut trie, word);
        }
        link_all(&mut trie);

        assert_eq!(failure_of(&trie, "bc"), terminal_of(&trie, "c"));
        assert_eq!(failure_of(&trie, "bca"), terminal_of(&trie, "ca"));
        assert_eq!(failure_of(&trie, "ca"), terminal_of(&trie, "a"));
    }

    #[test]
    fn test_link_pass_resumes_with_tiny_budget() {
        let words = ["bca", "ca", "a", "ab", "abc"];

        let mut full = Trie::new();
        let mut stepped = Trie::new();
        for word in words {
            insert_word(&mut full, word);
            insert_word(&mut stepped, word);
        }

        link_all(&mut full);
        let mut pass = LinkPass::new(&stepped);
        let mut rounds = 1;
        while !pass.run(&mut stepped, 1) {
            rounds += 1;
        }
        assert!(rounds > 1, "budget of 1 should take several rounds");

        for word in ["b", "bc", "bca", "c", "ca", "a", "ab", "abc"] {
            assert_eq!(failure_of(&stepped, word), failure_of(&full, word), "{word}");
        }
    }

    #[test]
    fn test_link_chain_skips_first_node() {
        let mut trie = Trie::new();
        let chain = insert_word(&mut trie, "aa");
        link_chain(&mut trie, &chain);

        assert_eq!(failure_of(&trie, "a"), Some(Trie::ROOT));
        // "aa" falls back to "a"
        assert_eq!(failure_of(&trie, "aa"), terminal_of(&trie, "a"));
    }

    #[test]
    fn test_compile_empty_dictionary() {
        let automaton = compile::<&str>(&[]);
        assert_eq!(automaton.word_count(), 0);
        assert_eq!(automaton.node_count(), 1);
    }
}
