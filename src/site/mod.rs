//! Site composition - the compile-time page registry

mod registry;

pub use registry::review_section;
