//! Turning LiveChessCloud tournament documents into PGN.

pub mod batch;
pub mod error;
pub mod event;
pub mod game_data;
pub mod pgn;
pub mod urls;
pub mod validate;

pub use batch::{assemble_batch, GameOutcome};
pub use error::PipelineError;
pub use pgn::FormatFlags;
