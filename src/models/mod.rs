pub mod cadence;
pub mod character;
pub mod progress;
pub mod state;
pub mod task;

pub use cadence::*;
pub use character::*;
pub use progress::*;
pub use state::*;
pub use task::*;
