//! Trie node arena.
//!
//! Nodes live in a flat `Vec` and refer to each other by index, so the
//! parent and failure back-references never form ownership cycles. Nodes are
//! only ever appended; the automaton grows and is dropped as a whole.

use std::collections::BTreeMap;

/// Stable index of a node within the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct NodeId(u32);

/// One trie vertex.
#[derive(Debug)]
pub(crate) struct Node {
    /// Character on the edge from the parent, `None` only for the root
    pub value: Option<char>,
    /// Child edges, sorted by character for deterministic traversal
    pub children: BTreeMap<char, NodeId>,
    /// One edge closer to the root, `None` only for the root
    pub parent: Option<NodeId>,
    /// Suffix link: the longest proper suffix of this node's path that is
    /// itself a path from the root. `None` only for the root.
    pub failure: Option<NodeId>,
    /// True iff the path from the root to this node is a complete word
    pub accept: bool,
}

/// Arena holding the whole trie. Index 0 is always the root.
#[derive(Debug)]
pub(crate) struct Trie {
    nodes: Vec<Node>,
    words: usize,
}

impl Trie {
    pub const ROOT: NodeId = NodeId(0);

    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                value: None,
                children: BTreeMap::new(),
                parent: None,
                failure: None,
                accept: false,
            }],
            words: 0,
        }
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0 as usize]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0 as usize]
    }

    /// Look up the child of `id` along edge `ch`.
    pub fn child(&self, id: NodeId, ch: char) -> Option<NodeId> {
        self.node(id).children.get(&ch).copied()
    }

    /// Append a new node for `ch` under `parent` and wire the edge.
    /// The failure link starts at the root until a link pass fixes it up.
    pub fn alloc(&mut self, ch: char, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            value: Some(ch),
            children: BTreeMap::new(),
            parent: Some(parent),
            failure: Some(Self::ROOT),
            accept: false,
        });
        self.node_mut(parent).children.insert(ch, id);
        id
    }

    /// Mark `id` as a complete word, tracking the distinct word count.
    pub fn mark_accept(&mut self, id: NodeId) {
        let node = self.node_mut(id);
        if !node.accept {
            node.accept = true;
            self.words += 1;
        }
    }

    /// Total number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct complete words in the trie.
    pub fn word_count(&self) -> usize {
        self.words
    }
}

/// Borrowed handle to a trie node, for structural introspection.
///
/// Returned by [`Automaton::locate`](crate::Automaton::locate); lets callers
/// verify `parent` and `failure` relationships without exposing the arena.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    trie: &'a Trie,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(trie: &'a Trie, id: NodeId) -> Self {
        Self { trie, id }
    }

    /// The character this node represents, `None` for the root.
    pub fn value(&self) -> Option<char> {
        self.trie.node(self.id).value
    }

    /// The node one edge closer to the root.
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.trie
            .node(self.id)
            .parent
            .map(|id| NodeRef::new(self.trie, id))
    }

    /// The failure (suffix) link target. `None` only for the root.
    pub fn failure(&self) -> Option<NodeRef<'a>> {
        self.trie
            .node(self.id)
            .failure
            .map(|id| NodeRef::new(self.trie, id))
    }

    /// Whether the path from the root to this node is a complete word.
    pub fn is_accept(&self) -> bool {
        self.trie.node(self.id).accept
    }

    /// Reconstruct the path from the root to this node.
    pub fn word(&self) -> String {
        crate::search::collect_word(self.trie, self.id).0
    }
}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("value", &self.value())
            .field("accept", &self.is_accept())
            .finish()
    }
}
