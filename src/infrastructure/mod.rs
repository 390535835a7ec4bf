//! Infrastructure layer for external integrations.
//!
//! Implements the domain repository traits on top of PostgreSQL.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repositories and the filtered list query builder

pub mod persistence;
