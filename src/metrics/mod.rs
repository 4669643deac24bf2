pub mod session;

pub use session::{RoundRecord, SessionStats, cause_label};
