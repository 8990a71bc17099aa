//! Scripted game used by the integration tests.
//!
//! Positions are numbered; each position lists the actions leaving it with their
//! target, reward and whether they end the game. The piece alphabet has `pieces`
//! members; committed moves draw the next piece from a seeded generator, which does
//! not change the transitions but does change the state keys.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::rc::Rc;
use tetris_uct::{Action, ApplyMode, GameState};

#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub action: Action,
    pub target: u32,
    pub reward: f64,
    pub game_over: bool,
}

#[derive(Debug)]
pub struct Script {
    edges: HashMap<u32, Vec<Edge>>,
    pieces: usize,
}

impl Script {
    pub fn new(pieces: usize) -> Self {
        Self {
            edges: HashMap::new(),
            pieces,
        }
    }

    pub fn edge(self, from: u32, action: Action, target: u32, reward: f64) -> Self {
        self.push(from, action, target, reward, false)
    }

    /// Edge whose move ends the game.
    pub fn losing_edge(self, from: u32, action: Action, target: u32) -> Self {
        self.push(from, action, target, 0.0, true)
    }

    /// Single-action chain `start -> start + 1 -> ... -> start + length`, each move
    /// earning `reward`; the last move ends the game.
    pub fn corridor_from(mut self, start: u32, length: u32, reward: f64) -> Self {
        for position in start..start + length {
            let last = position + 1 == start + length;
            self = self.push(position, Action::new(0, 1), position + 1, reward, last);
        }
        self
    }

    pub fn corridor(length: u32, reward: f64) -> Self {
        Script::new(1).corridor_from(0, length, reward)
    }

    fn push(
        mut self,
        from: u32,
        action: Action,
        target: u32,
        reward: f64,
        game_over: bool,
    ) -> Self {
        self.edges.entry(from).or_default().push(Edge {
            action,
            target,
            reward,
            game_over,
        });
        self
    }
}

#[derive(Debug, Clone, Copy)]
struct Snapshot {
    position: u32,
    piece: usize,
    score: f64,
    game_over: bool,
}

#[derive(Debug, Clone)]
pub struct ScriptedGame {
    script: Rc<Script>,
    position: u32,
    piece: usize,
    score: f64,
    game_over: bool,
    undo: Vec<Snapshot>,
    rng: StdRng,
}

impl ScriptedGame {
    pub fn new(script: Script, seed: u64) -> Self {
        Self {
            script: Rc::new(script),
            position: 0,
            piece: 0,
            score: 0.0,
            game_over: false,
            undo: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Same script, placed at `position` with `piece` active and a zero score.
    pub fn at(&self, position: u32, piece: usize) -> Self {
        Self {
            script: Rc::clone(&self.script),
            position,
            piece,
            score: 0.0,
            game_over: false,
            undo: Vec::new(),
            rng: self.rng.clone(),
        }
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            position: self.position,
            piece: self.piece,
            score: self.score,
            game_over: self.game_over,
        }
    }
}

impl GameState for ScriptedGame {
    fn legal_actions(&self) -> Vec<Action> {
        self.script
            .edges
            .get(&self.position)
            .map(|edges| edges.iter().map(|edge| edge.action).collect())
            .unwrap_or_default()
    }

    fn apply(&mut self, action: &Action, mode: ApplyMode) -> f64 {
        if mode == ApplyMode::Trial {
            self.undo.push(self.snapshot());
        }

        let edge = self
            .script
            .edges
            .get(&self.position)
            .and_then(|edges| edges.iter().find(|edge| edge.action == *action))
            .copied();

        let reward = match edge {
            Some(edge) => {
                self.position = edge.target;
                self.game_over = edge.game_over;
                edge.reward
            }
            None => {
                self.game_over = true;
                0.0
            }
        };
        self.score += reward;

        if mode == ApplyMode::Commit {
            self.piece = self.rng.random_range(0..self.script.pieces);
        }
        reward
    }

    fn cancel_last_move(&mut self) {
        if let Some(snapshot) = self.undo.pop() {
            self.position = snapshot.position;
            self.piece = snapshot.piece;
            self.score = snapshot.score;
            self.game_over = snapshot.game_over;
        }
    }

    fn outcome_count(&self) -> usize {
        self.script.pieces
    }

    fn current_piece(&self) -> usize {
        self.piece
    }

    fn set_current_piece(&mut self, piece: usize) {
        self.piece = piece;
    }

    fn score(&self) -> f64 {
        self.score
    }

    fn is_game_over(&self) -> bool {
        self.game_over
    }

    fn write_board(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.position.to_le_bytes());
    }
}

/// Heuristic preferring afterstates with a larger score.
pub fn score_heuristic(game: &ScriptedGame) -> f64 {
    game.score()
}

/// Heuristic that ranks nothing: keeps the scripted action order.
pub fn flat_heuristic(_game: &ScriptedGame) -> f64 {
    0.0
}
