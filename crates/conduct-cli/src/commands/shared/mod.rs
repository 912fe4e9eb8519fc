pub mod limit;
pub mod orphan;
pub mod parse;
