pub mod replay;
pub mod simulate;

pub use replay::{ReplayStep, parse_action_codes, replay_trace};
pub use simulate::{SimulateConfig, SimulateMode};
