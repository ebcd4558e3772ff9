mod nope_source;

pub use nope_source::HttpNopeSource;
