//! Runway condition code (RCC/RWYCC) resolution for dispatch.
//!
//! Resolves up to two reported runway contaminants with their coverage
//! into a runway condition code, derives the dispatch advisories that go
//! with it, and computes wind components for the crosswind check.

pub mod advisory;
pub mod catalog;
pub mod coverage;
pub mod error;
pub mod resolver;
pub mod rules;
pub mod wind;

pub use advisory::{advisories, advisory_max_crosswind_kt, Advisory};
pub use catalog::{lookup, lookup_description, CatalogEntry, ContaminantId, SurfaceKind};
pub use coverage::Coverage;
pub use error::{CatalogError, WindError};
pub use resolver::{
    resolve, resolve_with_rules, ConditionCode, RccQuery, RccResult, ResolutionRule, Segment,
};
pub use rules::ResolverRules;
pub use wind::{check_crosswind, components, runway_heading, CrosswindCheck, Wind, WindComponents};
