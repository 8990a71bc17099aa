//! Score statistics over a series of games.
//!
//! CSV format: `game,score`, one row per game in play order.

use crate::Result;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GamesStatistics {
    scores: Vec<f64>,
}

impl GamesStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_game(&mut self, score: f64) {
        self.scores.push(score);
    }

    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn mean(&self) -> Option<f64> {
        if self.scores.is_empty() {
            None
        } else {
            Some(self.scores.iter().sum::<f64>() / self.scores.len() as f64)
        }
    }

    pub fn min(&self) -> Option<f64> {
        self.scores.iter().copied().reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.scores.iter().copied().reduce(f64::max)
    }

    /// Population standard deviation.
    pub fn std_dev(&self) -> Option<f64> {
        let mean = self.mean()?;
        let variance = self
            .scores
            .iter()
            .map(|score| (score - mean).powi(2))
            .sum::<f64>()
            / self.scores.len() as f64;
        Some(variance.sqrt())
    }

    /// Writes one row per game, creating parent directories as needed.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut wtr = csv::Writer::from_path(path)?;
        wtr.write_record(["game", "score"])?;
        for (index, score) in self.scores.iter().enumerate() {
            wtr.write_record(&[(index + 1).to_string(), score.to_string()])?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut rdr = csv::Reader::from_path(path)?;
        let mut stats = Self::new();
        for row in rdr.deserialize::<(usize, f64)>() {
            let (_game, score) = row?;
            stats.add_game(score);
        }
        Ok(stats)
    }
}
