mod interactions;
mod stats;

pub use interactions::InteractionGraph;
pub use stats::GraphStats;
