pub mod document;
pub mod fixture;

pub use document::*;
pub use fixture::*;
