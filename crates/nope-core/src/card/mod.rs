//! Card domain: fetch lifecycle, copy feedback and rendering rules.

pub mod copy;
pub mod fetch;
pub mod view;

pub use copy::{CopyOutcome, CopyState};
pub use fetch::FetchState;
pub use view::{CardSnapshot, CardView};
