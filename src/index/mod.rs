pub mod idf;

pub use idf::{IdfLookupError, IdfTable};
