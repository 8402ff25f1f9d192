//! # surveyhub-domain
//!
//! Pure domain model for the surveyhub data-entry backend.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **mental-health entries** (anxiety, mood and sleep ratings)
//! - Define **social-media entries** (usage habits and distraction ratings)
//! - For each record kind, define the *draft* accepted on creation and the
//!   *patch* accepted on partial update
//! - Contain all bound checks (numeric ranges, string lengths, enumerations)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod record;
pub mod validation;

pub mod mental_health;
pub mod social_media;
