//! Coverage thresholds for runway condition code resolution.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};

/// Highest runway condition code.
pub const MAX_CODE: u8 = 6;

/// Configuration for the resolver's coverage rules.
///
/// Deserialized rules are validated; codes must be within 0..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RulesRepr")]
pub struct ResolverRules {
    /// Total coverage above this percentage is an overflow
    pub overflow_limit_pct: u16,
    /// Total coverage at or below this percentage is disregarded (code 6),
    /// and a segment at or below it is a minor contaminant
    pub negligible_coverage_pct: u8,
    /// Codes at or below this value are raised to `floor_code` when only
    /// minor contaminants are present
    pub floor_trigger_code: u8,
    /// Code substituted when the floor applies
    pub floor_code: u8,
    /// Code reported for negligible coverage
    pub clean_code: u8,
}

impl Default for ResolverRules {
    fn default() -> Self {
        Self {
            overflow_limit_pct: 100,
            negligible_coverage_pct: 25,
            floor_trigger_code: 2,
            floor_code: 3,
            clean_code: 6,
        }
    }
}

#[derive(Deserialize)]
struct RulesRepr {
    overflow_limit_pct: u16,
    negligible_coverage_pct: u8,
    floor_trigger_code: u8,
    floor_code: u8,
    clean_code: u8,
}

impl TryFrom<RulesRepr> for ResolverRules {
    type Error = CatalogError;

    fn try_from(repr: RulesRepr) -> Result<Self, Self::Error> {
        let rules = Self {
            overflow_limit_pct: repr.overflow_limit_pct,
            negligible_coverage_pct: repr.negligible_coverage_pct,
            floor_trigger_code: repr.floor_trigger_code,
            floor_code: repr.floor_code,
            clean_code: repr.clean_code,
        };
        rules.validate()?;
        Ok(rules)
    }
}

impl ResolverRules {
    /// Check that every code the rules can produce is a valid RCC.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for code in [self.clean_code, self.floor_code] {
            if code > MAX_CODE {
                return Err(CatalogError::CodeOutOfRange(i64::from(code)));
            }
        }
        Ok(())
    }

    /// Apply the minor-contaminant floor to a code.
    pub fn floored(&self, code: u8) -> u8 {
        if code <= self.floor_trigger_code {
            self.floor_code
        } else {
            code
        }
    }

    pub fn is_minor(&self, percent: u8) -> bool {
        percent <= self.negligible_coverage_pct
    }
}
