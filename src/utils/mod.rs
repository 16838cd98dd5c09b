mod extract;

pub use extract::{JsonBody, PathId};
