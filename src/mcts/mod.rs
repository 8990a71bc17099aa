pub mod algorithm;
pub mod hyperparameters;
pub mod node;
pub mod progressive_widening;
pub mod search_result;
pub mod selection;
pub mod state_key;
pub mod stats;
pub mod transposition;

pub use algorithm::UctSearcher;
pub use hyperparameters::UctConfig;
pub use node::Node;
pub use progressive_widening::ProgressiveWideningConfig;
pub use search_result::SearchResult;
pub use state_key::{StateKey, StateKeyEncoder};
pub use stats::EdgeStats;
pub use transposition::{NodeId, TranspositionTable};
