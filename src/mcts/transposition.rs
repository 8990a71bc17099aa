//! Transposition table owning every node of a search.
//!
//! Nodes are stored in an arena and addressed by [`NodeId`]; the key map sends a
//! [`StateKey`] to its node. Entries are never removed individually: they persist
//! until [`TranspositionTable::clear`] or [`TranspositionTable::teardown`].
//! A table serves one search at a time, which the `&mut` borrow of the search enforces.

use crate::game::evaluation::Evaluator;
use crate::game::game_state::GameState;
use crate::mcts::hyperparameters::UctConfig;
use crate::mcts::node::Node;
use crate::mcts::state_key::StateKey;
use std::cell::Cell;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Handle to a node owned by a [`TranspositionTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
pub struct TranspositionTable {
    index: HashMap<StateKey, NodeId>,
    nodes: Vec<Node>,
    hits: Cell<u64>,
    misses: Cell<u64>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the node stored under an encoded key.
    pub fn lookup(&self, key: &[u8]) -> Option<NodeId> {
        let found = self.index.get(key).copied();
        match found {
            Some(_) => self.hits.set(self.hits.get() + 1),
            None => self.misses.set(self.misses.get() + 1),
        }
        found
    }

    /// Looks up the node of `state`.
    pub fn find<S: GameState>(&self, state: &S) -> Option<NodeId> {
        self.lookup(StateKey::encode(state).as_bytes())
    }

    /// Stores `node` under `key`. A node already stored under the same key is replaced
    /// and keeps its id.
    pub fn insert(&mut self, key: StateKey, node: Node) -> NodeId {
        match self.index.entry(key) {
            Entry::Occupied(entry) => {
                let id = *entry.get();
                log::warn!("Replacing the node already stored under this key");
                self.nodes[id.0] = node;
                id
            }
            Entry::Vacant(entry) => {
                let id = NodeId(self.nodes.len());
                self.nodes.push(node);
                entry.insert(id);
                id
            }
        }
    }

    /// Returns the node of `state`, creating and storing it first when absent.
    pub fn get_or_create<S, H>(&mut self, state: &S, heuristic: &H, config: &UctConfig) -> NodeId
    where
        S: GameState,
        H: Evaluator<S>,
    {
        let key = StateKey::encode(state);
        if let Some(id) = self.lookup(key.as_bytes()) {
            return id;
        }
        self.insert(key, Node::create(state, heuristic, config))
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Ids handed out by this table always index a live node.
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Lookups that found a node, since creation or the last clear.
    pub fn hits(&self) -> u64 {
        self.hits.get()
    }

    pub fn misses(&self) -> u64 {
        self.misses.get()
    }

    /// Releases every node. Ids handed out before become invalid.
    pub fn clear(&mut self) {
        self.index.clear();
        self.nodes.clear();
        self.hits.set(0);
        self.misses.set(0);
    }

    /// Consumes the table, handing each stored node with its key to `release` exactly once.
    pub fn teardown<F>(self, mut release: F)
    where
        F: FnMut(StateKey, Node),
    {
        let mut nodes: Vec<Option<Node>> = self.nodes.into_iter().map(Some).collect();
        for (key, id) in self.index {
            if let Some(node) = nodes[id.0].take() {
                release(key, node);
            }
        }
    }
}
