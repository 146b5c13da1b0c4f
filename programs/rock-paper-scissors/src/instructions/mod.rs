pub mod deposit_reward;
pub mod initialize;
pub mod resolve_round;
pub mod submit_answer;

pub use deposit_reward::*;
pub use initialize::*;
pub use resolve_round::*;
pub use submit_answer::*;
