pub mod nope;
pub mod page;

pub use nope::nope_handler;
pub use page::page_handler;
