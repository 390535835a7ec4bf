//! Data Transfer Objects for API requests and responses.
//!
//! Query strings are decoded into all-optional string structs and then
//! normalized into domain parameter sets under the configured input policy.
//! Write endpoints take form fields through [`forms::FormFields`].

pub mod article;
pub mod auth;
pub mod course;
pub mod envelope;
pub mod forms;
pub mod pagination;
pub mod status;
pub mod university;
