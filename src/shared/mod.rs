pub mod geo;

pub use geo::*;

use std::sync::Arc;

/// Entities that are looked up by their interned name.
pub trait Identifiable {
    fn name(&self) -> &Arc<str>;
}
