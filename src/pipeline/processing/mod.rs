// Record processing: identifiers, tag lookup, geometry, relations and population

pub mod dispatch;
pub mod geometry;
pub mod ids;
pub mod populate;
pub mod relations;
pub mod tags;

pub use dispatch::{generate_links, generate_member};
pub use ids::IdAllocator;
