pub mod thought;

pub use thought::{Thought, ThoughtId, ThoughtPost};
