//! Content scanning against a compiled trie.
//!
//! The cursor always represents the longest suffix of the content scanned so
//! far that is also a path from the root; a missing edge is resolved through
//! the failure chain instead of rescanning content.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::node::{NodeId, Trie};
use crate::types::{Match, SearchOptions};

/// Scan `content` one char at a time, collecting every occurrence.
///
/// Matches come out ordered by the position where they end: the scan emits
/// all words ending at each content position before moving on. At a single
/// end position the deepest (longest) accepting node is reported first,
/// because the collection walk follows failure links from the cursor toward
/// the root. Start offsets are not globally sorted; a long word can start
/// before an already-reported shorter one.
pub(crate) fn scan(trie: &Trie, content: &str, options: SearchOptions) -> Vec<Match> {
    let mut matches = Vec::new();
    let mut current = Trie::ROOT;

    for (i, ch) in content.chars().enumerate() {
        let mut next = trie.child(current, ch);

        // No edge on this branch; retry along the failure chain. The walk
        // ends at the root, whose own edges are the last candidates.
        if next.is_none() {
            let mut back = trie.node(current).failure;
            while let Some(b) = back {
                if let Some(child) = trie.child(b, ch) {
                    next = Some(child);
                    break;
                }
                back = trie.node(b).failure;
            }
        }

        let Some(found) = next else {
            current = Trie::ROOT;
            continue;
        };

        // Every suffix of the cursor path that is itself a word is a match
        // ending here, longest first.
        let mut cursor = found;
        while cursor != Trie::ROOT {
            let node = trie.node(cursor);
            if node.accept {
                let (word, len) = collect_word(trie, cursor);
                matches.push(Match {
                    offset: i + 1 - len,
                    word,
                });
                if options.quick {
                    return matches;
                }
            }
            let Some(back) = node.failure else {
                break;
            };
            cursor = back;
        }

        current = found;
    }

    if options.longest {
        select_longest(matches)
    } else {
        matches
    }
}

/// Reconstruct the word ending at `id` by walking parent links to the root.
///
/// Returns the word together with its length in chars, which the caller
/// needs for the start offset.
pub(crate) fn collect_word(trie: &Trie, id: NodeId) -> (String, usize) {
    let mut chars = Vec::new();
    let mut cursor = id;

    while let Some(ch) = trie.node(cursor).value {
        chars.push(ch);
        match trie.node(cursor).parent {
            Some(parent) => cursor = parent,
            None => break,
        }
    }

    let len = chars.len();
    (chars.into_iter().rev().collect(), len)
}

/// Keep, per distinct start offset, only the longest matched word.
///
/// Ties go to the first entry seen, which given the scan's longest-first
/// order per position is already the longest. Output is ascending by offset.
pub(crate) fn select_longest(matches: Vec<Match>) -> Vec<Match> {
    let mut longest: BTreeMap<usize, Match> = BTreeMap::new();

    for m in matches {
        match longest.entry(m.offset) {
            Entry::Vacant(slot) => {
                slot.insert(m);
            }
            Entry::Occupied(mut slot) => {
                if m.word.chars().count() > slot.get().word.chars().count() {
                    slot.insert(m);
                }
            }
        }
    }

    longest.into_values().collect()
}
