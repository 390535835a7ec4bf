//! Domain layer: entities, filter parameter sets and repository traits.
//!
//! Nothing here touches the database or HTTP directly.

pub mod entities;
pub mod params;
pub mod repositories;
