//! Request handlers, one module per resource.

pub mod curated;
pub mod session;
pub mod subjects;
pub mod tastings;
