//! Application layer services.
//!
//! Services coordinate repository calls: lookups with related-entity
//! enrichment, filtered listings, inserts and authentication. Handlers talk
//! only to services.
//!
//! # Available Services
//!
//! - [`services::course_service::CourseService`] - Course lookup, listing and inserts
//! - [`services::article_service::ArticleService`] - Article lookup, listing, content and association inserts
//! - [`services::university_service::UniversityService`] - University inserts
//! - [`services::auth_service::AuthService`] - Sign-in and bearer credential checks

pub mod services;
