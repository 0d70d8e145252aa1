//! State management module
//!
//! - Category: the four counted road-user kinds
//! - Tally: counts plus per-category timestamp logs
//! - Marker: the saved seek position
//! - Notice: user-facing notifications
//! - CounterSession: owns all of the above plus the loaded video
//! - SessionOp: user actions, applied in order through one queue

mod category;
mod marker;
mod notice;
mod ops;
mod session;
mod tally;

pub use category::{Category, CATEGORY_COUNT};
pub use marker::Marker;
pub use notice::Notice;
pub use ops::{run_session_ops, SessionOp};
pub use session::CounterSession;
pub use tally::{DecrementPolicy, Tally};
