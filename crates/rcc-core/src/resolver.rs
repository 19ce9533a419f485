//! Runway condition code resolution.
//!
//! Turns up to two contaminant/coverage readings on one runway surface
//! into a single runway condition code. The rules are evaluated in a fixed
//! priority order and the first match wins:
//!
//! 1. total coverage over the overflow limit is an overflow,
//! 2. negligible total coverage is clean (code 6),
//! 3. a single contaminant in effect gives its own code,
//! 4. two major contaminants give the worse code,
//! 5. one major contaminant gives the code of the larger coverage,
//! 6. two unequal minor contaminants give the larger coverage's code, floored,
//! 7. two equal minor contaminants give the worse code, floored.
//!
//! Anything left over, or a rule that needs a code the catalog cannot
//! supply, is unresolved.

use crate::catalog::{self, ContaminantId, SurfaceKind};
use crate::coverage::{self, Coverage};
use crate::error::CatalogError;
use crate::rules::{ResolverRules, MAX_CODE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "CodeRepr", try_from = "CodeRepr")]
pub enum ConditionCode {
    /// Runway condition code, 0 (NO-GO) to 6.
    Code(u8),
    /// Reported coverages add up to more than 100%.
    Overflow,
    /// No rule could produce a code from the inputs.
    Unresolved,
}

impl ConditionCode {
    /// Numeric code, or `None` for the sentinels.
    ///
    /// Callers must go through this before indexing any code-keyed table.
    pub fn numeric(self) -> Option<u8> {
        match self {
            ConditionCode::Code(code) => Some(code),
            ConditionCode::Overflow | ConditionCode::Unresolved => None,
        }
    }

    pub fn is_no_go(self) -> bool {
        self == ConditionCode::Code(0)
    }
}

impl From<Option<u8>> for ConditionCode {
    /// Missing or out-of-range codes are unresolved.
    fn from(code: Option<u8>) -> Self {
        match code {
            Some(code) if code <= MAX_CODE => ConditionCode::Code(code),
            _ => ConditionCode::Unresolved,
        }
    }
}

impl fmt::Display for ConditionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionCode::Code(code) => write!(f, "{}", code),
            ConditionCode::Overflow => f.write_str("contaminant(s) over 100%"),
            ConditionCode::Unresolved => f.write_str("unresolved"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
enum CodeRepr {
    Code(u8),
    Sentinel(Sentinel),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
enum Sentinel {
    Overflow,
    Unresolved,
}

impl From<ConditionCode> for CodeRepr {
    fn from(code: ConditionCode) -> Self {
        match code {
            ConditionCode::Code(code) => CodeRepr::Code(code),
            ConditionCode::Overflow => CodeRepr::Sentinel(Sentinel::Overflow),
            ConditionCode::Unresolved => CodeRepr::Sentinel(Sentinel::Unresolved),
        }
    }
}

impl TryFrom<CodeRepr> for ConditionCode {
    type Error = CatalogError;

    fn try_from(repr: CodeRepr) -> Result<Self, Self::Error> {
        match repr {
            CodeRepr::Code(code) if code <= MAX_CODE => Ok(ConditionCode::Code(code)),
            CodeRepr::Code(code) => Err(CatalogError::CodeOutOfRange(i64::from(code))),
            CodeRepr::Sentinel(Sentinel::Overflow) => Ok(ConditionCode::Overflow),
            CodeRepr::Sentinel(Sentinel::Unresolved) => Ok(ConditionCode::Unresolved),
        }
    }
}

/// Which rule produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionRule {
    Overflow,
    NegligibleCoverage,
    SingleContaminant,
    BothMajor,
    OneMajor,
    MinorDominant,
    MinorEqual,
    Fallback,
}

/// One reported contaminant and its coverage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// `None` when nothing (or an unknown description) was selected
    pub contaminant: Option<ContaminantId>,
    pub coverage: Coverage,
}

impl Segment {
    pub fn new(contaminant: Option<ContaminantId>, coverage: Coverage) -> Self {
        Self { contaminant, coverage }
    }

    /// Build a segment from a legacy description string.
    pub fn from_description(description: &str, coverage: Coverage) -> Self {
        Self::new(ContaminantId::from_description(description), coverage)
    }

    /// Catalog code for this segment's contaminant on `surface`.
    pub fn code(&self, surface: SurfaceKind) -> Option<u8> {
        self.contaminant
            .and_then(|id| catalog::lookup(id, surface))
            .map(|entry| entry.code)
    }

    pub fn in_effect(&self) -> bool {
        !self.coverage.is_zero()
    }
}

/// A runway condition code query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RccQuery {
    pub surface: SurfaceKind,
    pub segment1: Segment,
    pub segment2: Segment,
}

impl RccQuery {
    pub fn new(surface: SurfaceKind, segment1: Segment, segment2: Segment) -> Self {
        Self {
            surface,
            segment1,
            segment2,
        }
    }

    /// Build a query from legacy description strings.
    pub fn from_descriptions(
        surface: SurfaceKind,
        segment1_description: &str,
        segment1_coverage: Coverage,
        segment2_description: &str,
        segment2_coverage: Coverage,
    ) -> Self {
        Self::new(
            surface,
            Segment::from_description(segment1_description, segment1_coverage),
            Segment::from_description(segment2_description, segment2_coverage),
        )
    }

    pub fn segments(&self) -> [&Segment; 2] {
        [&self.segment1, &self.segment2]
    }

    pub fn resolve(&self) -> RccResult {
        resolve_with_rules(self, &ResolverRules::default())
    }
}

/// Result of resolving an [`RccQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RccResult {
    pub code: ConditionCode,
    /// Sum of both segments; may exceed 100
    pub total_coverage_percent: u16,
    pub segment1_coverage_percent: u8,
    pub segment2_coverage_percent: u8,
    /// 0, 1 or 2 segments in effect
    pub segment_count: u8,
    pub rule: ResolutionRule,
}

/// Resolve a runway condition code from legacy description strings and
/// integer coverages.
///
/// Coverages outside 0..=100 are treated as 0. Unknown descriptions,
/// including the "SELECT ... CONTAMINANT" placeholders, do not resolve.
pub fn resolve(
    surface: SurfaceKind,
    segment1_description: &str,
    segment1_coverage: i64,
    segment2_description: &str,
    segment2_coverage: i64,
) -> RccResult {
    RccQuery::from_descriptions(
        surface,
        segment1_description,
        Coverage::from_percent(segment1_coverage),
        segment2_description,
        Coverage::from_percent(segment2_coverage),
    )
    .resolve()
}

/// Resolve a query using explicit coverage thresholds.
///
/// Rules whose clean or floor code falls outside 0..=6 (see
/// [`ResolverRules::validate`]) resolve to [`ConditionCode::Unresolved`]
/// wherever that code would have been returned.
pub fn resolve_with_rules(query: &RccQuery, rules: &ResolverRules) -> RccResult {
    let coverage1 = query.segment1.coverage;
    let coverage2 = query.segment2.coverage;
    let total = coverage::total_percent(coverage1, coverage2);
    let segment_count = coverage::segment_count(coverage1, coverage2);

    let (code, rule) = evaluate(query, rules, total, segment_count);

    tracing::debug!(
        surface = %query.surface,
        coverage1 = coverage1.percent(),
        coverage2 = coverage2.percent(),
        total,
        segment_count,
        ?rule,
        %code,
        "resolved runway condition code"
    );

    RccResult {
        code,
        total_coverage_percent: total,
        segment1_coverage_percent: coverage1.percent(),
        segment2_coverage_percent: coverage2.percent(),
        segment_count,
        rule,
    }
}

fn evaluate(
    query: &RccQuery,
    rules: &ResolverRules,
    total: u16,
    segment_count: u8,
) -> (ConditionCode, ResolutionRule) {
    if total > rules.overflow_limit_pct {
        return (ConditionCode::Overflow, ResolutionRule::Overflow);
    }
    if total <= u16::from(rules.negligible_coverage_pct) {
        return (
            Some(rules.clean_code).into(),
            ResolutionRule::NegligibleCoverage,
        );
    }

    let code1 = query.segment1.code(query.surface);
    let code2 = query.segment2.code(query.surface);
    let percent1 = query.segment1.coverage.percent();
    let percent2 = query.segment2.coverage.percent();

    match segment_count {
        // Segment 1 wins whenever it resolves, even at 0%.
        1 => (code1.or(code2).into(), ResolutionRule::SingleContaminant),
        2 => {
            let minor1 = rules.is_minor(percent1);
            let minor2 = rules.is_minor(percent2);
            match (minor1, minor2) {
                (false, false) => (worst(code1, code2).into(), ResolutionRule::BothMajor),
                (true, false) | (false, true) => (
                    dominant(code1, percent1, code2, percent2).into(),
                    ResolutionRule::OneMajor,
                ),
                (true, true) if percent1 != percent2 => (
                    dominant(code1, percent1, code2, percent2)
                        .map(|code| rules.floored(code))
                        .into(),
                    ResolutionRule::MinorDominant,
                ),
                (true, true) => (
                    worst(code1, code2).map(|code| rules.floored(code)).into(),
                    ResolutionRule::MinorEqual,
                ),
            }
        }
        _ => (ConditionCode::Unresolved, ResolutionRule::Fallback),
    }
}

/// Lower (more severe) of two codes; unknown if either is unknown.
fn worst(code1: Option<u8>, code2: Option<u8>) -> Option<u8> {
    Some(code1?.min(code2?))
}

/// Code of the segment with strictly larger coverage, else segment 2.
fn dominant(code1: Option<u8>, percent1: u8, code2: Option<u8>, percent2: u8) -> Option<u8> {
    if percent1 > percent2 {
        code1
    } else {
        code2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FROST: &str = "Frost";
    const ICE_WARM: &str = "Ice: -7ºC and warmer OAT";
    const GRAVEL_SLUSH: &str = "Slush Greater than 0.13 in depth";
    const GRAVEL_DEEP_SNOW: &str = "Dry Snow more than 1.0 in depth";

    #[test]
    fn test_overflow_checked_first() {
        let result = resolve(SurfaceKind::Paved, FROST, 60, ICE_WARM, 41);
        assert_eq!(result.code, ConditionCode::Overflow);
        assert_eq!(result.total_coverage_percent, 101);
        assert_eq!(result.rule, ResolutionRule::Overflow);
    }

    #[test]
    fn test_exactly_100_is_not_overflow() {
        let result = resolve(SurfaceKind::Paved, FROST, 60, ICE_WARM, 40);
        assert_eq!(result.code, ConditionCode::Code(0));
    }

    #[test]
    fn test_negligible_coverage_is_clean() {
        let result = resolve(SurfaceKind::Paved, ICE_WARM, 25, FROST, 0);
        assert_eq!(result.code, ConditionCode::Code(6));
        assert_eq!(result.segment_count, 1);
        assert_eq!(result.rule, ResolutionRule::NegligibleCoverage);
    }

    #[test]
    fn test_negligible_even_when_nothing_selected() {
        let placeholder = SurfaceKind::Gravel.placeholder();
        let result = resolve(SurfaceKind::Gravel, placeholder, 0, placeholder, 0);
        assert_eq!(result.code, ConditionCode::Code(6));
        assert_eq!(result.segment_count, 0);
    }

    #[test]
    fn test_single_segment_just_over_threshold() {
        let result = resolve(SurfaceKind::Gravel, GRAVEL_DEEP_SNOW, 26, "", 0);
        assert_eq!(result.code, ConditionCode::Code(3));
        assert_eq!(result.segment_count, 1);
    }

    #[test]
    fn test_single_segment_falls_back_to_segment2() {
        let placeholder = SurfaceKind::Paved.placeholder();
        let result = resolve(SurfaceKind::Paved, placeholder, 0, ICE_WARM, 50);
        assert_eq!(result.code, ConditionCode::Code(0));
    }

    #[test]
    fn test_single_segment_prefers_resolvable_segment1() {
        // Segment 1 resolves at 0%, so it wins over the segment in effect.
        let result = resolve(SurfaceKind::Paved, FROST, 0, ICE_WARM, 50);
        assert_eq!(result.code, ConditionCode::Code(5));
    }

    #[test]
    fn test_single_segment_unresolved() {
        let result = resolve(SurfaceKind::Paved, "Mud", 40, "", 0);
        assert_eq!(result.code, ConditionCode::Unresolved);
        assert_eq!(result.rule, ResolutionRule::SingleContaminant);
    }

    #[test]
    fn test_gravel_only_description_on_paved_is_unresolved() {
        let result = resolve(SurfaceKind::Paved, GRAVEL_DEEP_SNOW, 40, "", 0);
        assert_eq!(result.code, ConditionCode::Unresolved);
    }

    #[test]
    fn test_both_major_takes_worst() {
        let result = resolve(SurfaceKind::Paved, FROST, 50, ICE_WARM, 30);
        assert_eq!(result.code, ConditionCode::Code(0));
        assert_eq!(result.rule, ResolutionRule::BothMajor);
    }

    #[test]
    fn test_both_major_with_unknown_is_unresolved() {
        let result = resolve(SurfaceKind::Paved, FROST, 50, "Mud", 30);
        assert_eq!(result.code, ConditionCode::Unresolved);
    }

    #[test]
    fn test_one_major_takes_larger_coverage() {
        let result = resolve(SurfaceKind::Paved, ICE_WARM, 10, FROST, 60);
        assert_eq!(result.code, ConditionCode::Code(5));
        assert_eq!(result.rule, ResolutionRule::OneMajor);

        let result = resolve(SurfaceKind::Paved, ICE_WARM, 60, FROST, 10);
        assert_eq!(result.code, ConditionCode::Code(0));
    }

    #[test]
    fn test_one_major_is_not_floored() {
        let result = resolve(SurfaceKind::Gravel, GRAVEL_SLUSH, 30, FROST, 20);
        assert_eq!(result.code, ConditionCode::Code(1));
    }

    #[test]
    fn test_minor_dominant_is_floored() {
        let result = resolve(SurfaceKind::Gravel, GRAVEL_SLUSH, 20, FROST, 10);
        assert_eq!(result.code, ConditionCode::Code(3));
        assert_eq!(result.rule, ResolutionRule::MinorDominant);

        let result = resolve(SurfaceKind::Gravel, GRAVEL_SLUSH, 10, FROST, 20);
        assert_eq!(result.code, ConditionCode::Code(5));
    }

    #[test]
    fn test_minor_equal_takes_floored_worst() {
        let result = resolve(SurfaceKind::Paved, FROST, 20, "Slippery When Wet", 20);
        assert_eq!(result.code, ConditionCode::Code(3));
        assert_eq!(result.rule, ResolutionRule::MinorEqual);

        let result = resolve(SurfaceKind::Paved, FROST, 20, "Compacted Snow: -15ºC and colder OAT", 20);
        assert_eq!(result.code, ConditionCode::Code(4));
    }

    #[test]
    fn test_minor_equal_with_unknown_is_unresolved() {
        let placeholder = SurfaceKind::Paved.placeholder();
        let result = resolve(SurfaceKind::Paved, FROST, 20, placeholder, 20);
        assert_eq!(result.code, ConditionCode::Unresolved);
    }

    #[test]
    fn test_one_major_with_unknown_dominant_is_unresolved() {
        let result = resolve(SurfaceKind::Paved, "Mud", 60, FROST, 10);
        assert_eq!(result.code, ConditionCode::Unresolved);
        assert_eq!(result.rule, ResolutionRule::OneMajor);
    }

    #[test]
    fn test_one_major_ignores_unknown_minor_segment() {
        let result = resolve(SurfaceKind::Paved, FROST, 60, "Mud", 10);
        assert_eq!(result.code, ConditionCode::Code(5));
        assert_eq!(result.rule, ResolutionRule::OneMajor);
    }

    #[test]
    fn test_minor_dominant_with_unknown_dominant_is_unresolved() {
        let result = resolve(SurfaceKind::Paved, "Mud", 20, FROST, 10);
        assert_eq!(result.code, ConditionCode::Unresolved);
        assert_eq!(result.rule, ResolutionRule::MinorDominant);
    }

    #[test]
    fn test_out_of_range_rule_codes_never_escape() {
        let query = RccQuery::from_descriptions(
            SurfaceKind::Paved,
            FROST,
            Coverage::from_percent(10),
            "",
            Coverage::ZERO,
        );
        let rules = ResolverRules {
            clean_code: 9,
            ..ResolverRules::default()
        };
        let result = resolve_with_rules(&query, &rules);
        assert_eq!(result.code, ConditionCode::Unresolved);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(serde_json::from_str::<RccResult>(&json).unwrap(), result);

        let rules = ResolverRules {
            floor_code: 9,
            ..ResolverRules::default()
        };
        let result = resolve(SurfaceKind::Gravel, GRAVEL_SLUSH, 20, FROST, 10);
        assert_eq!(result.code, ConditionCode::Code(3));
        let query = RccQuery::from_descriptions(
            SurfaceKind::Gravel,
            GRAVEL_SLUSH,
            Coverage::from_percent(20),
            FROST,
            Coverage::from_percent(10),
        );
        assert_eq!(resolve_with_rules(&query, &rules).code, ConditionCode::Unresolved);
    }

    #[test]
    fn test_query_from_json_coerces_coverage() {
        let query: RccQuery = serde_json::from_str(
            r#"{"surface":"PAVED",
                "segment1":{"contaminant":"frost","coverage":250},
                "segment2":{"contaminant":null,"coverage":40}}"#,
        )
        .unwrap();
        let result = query.resolve();
        assert_eq!(result.segment1_coverage_percent, 0);
        assert_eq!(result.total_coverage_percent, 40);
        assert_eq!(result.segment_count, 1);
        assert_eq!(result.code, ConditionCode::Code(5));
    }

    #[test]
    fn test_custom_rules() {
        let rules = ResolverRules {
            negligible_coverage_pct: 10,
            ..ResolverRules::default()
        };
        let query = RccQuery::from_descriptions(
            SurfaceKind::Paved,
            ICE_WARM,
            Coverage::from_percent(20),
            "",
            Coverage::ZERO,
        );
        assert_eq!(resolve_with_rules(&query, &rules).code, ConditionCode::Code(0));
        assert_eq!(query.resolve().code, ConditionCode::Code(6));
    }

    #[test]
    fn test_numeric_hides_sentinels() {
        assert_eq!(ConditionCode::Code(4).numeric(), Some(4));
        assert_eq!(ConditionCode::Overflow.numeric(), None);
        assert_eq!(ConditionCode::Unresolved.numeric(), None);
        assert!(ConditionCode::Code(0).is_no_go());
    }

    #[test]
    fn test_condition_code_wire_form() {
        assert_eq!(serde_json::to_string(&ConditionCode::Code(3)).unwrap(), "3");
        assert_eq!(
            serde_json::to_string(&ConditionCode::Overflow).unwrap(),
            "\"OVERFLOW\""
        );
        let code: ConditionCode = serde_json::from_str("\"UNRESOLVED\"").unwrap();
        assert_eq!(code, ConditionCode::Unresolved);
        assert!(serde_json::from_str::<ConditionCode>("7").is_err());
    }
}
