//! Dispatch advisories derived from a runway condition code resolution.
//!
//! These sit on top of [`RccResult`] and the raw query. They never change
//! the resolved code; they tell dispatch what still needs checking.

use crate::catalog::{self, ContaminantId};
use crate::resolver::{ConditionCode, RccQuery, RccResult};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Advisory {
    /// Reported coverages add up to more than 100%.
    Overflow { total_coverage_percent: u16 },
    /// The code cannot be computed from the inputs.
    Unresolved,
    /// A contaminant in effect requires dispatch verification.
    CallDispatch { contaminant: ContaminantId },
    /// A depth-graded contaminant in effect; its reported depth must not
    /// exceed the aircraft limit.
    MaxDepth { contaminant: ContaminantId, limit_in: f32 },
    /// Code 0.
    NoGo,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::Overflow {
                total_coverage_percent,
            } => write!(
                f,
                "Contaminant(s) over 100% ({}% reported), correct the coverage",
                total_coverage_percent
            ),
            Advisory::Unresolved => {
                f.write_str("RCC cannot be computed, select a contaminant for each reported segment")
            }
            Advisory::CallDispatch { contaminant } => {
                write!(f, "Call dispatch to verify: {}", contaminant)
            }
            Advisory::MaxDepth {
                contaminant,
                limit_in,
            } => write!(
                f,
                "Verify depth of '{}' does not exceed {:.1} in",
                contaminant, limit_in
            ),
            Advisory::NoGo => f.write_str("RCC 0: NO-GO"),
        }
    }
}

/// Advisory maximum crosswind for a resolved code.
///
/// Sentinels have no crosswind; `None` is returned for them.
pub fn advisory_max_crosswind_kt(code: ConditionCode) -> Option<u16> {
    code.numeric().map(catalog::advisory_crosswind_kt)
}

/// Collect advisories for a resolved query.
///
/// Order: overflow, unresolved, call-dispatch, max-depth, no-go.
/// Only segments with non-zero coverage contribute contaminant advisories,
/// and each contaminant is reported once per kind.
pub fn advisories(query: &RccQuery, result: &RccResult) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    match result.code {
        ConditionCode::Overflow => advisories.push(Advisory::Overflow {
            total_coverage_percent: result.total_coverage_percent,
        }),
        ConditionCode::Unresolved => advisories.push(Advisory::Unresolved),
        ConditionCode::Code(_) => {}
    }

    let in_effect: Vec<ContaminantId> = query
        .segments()
        .into_iter()
        .filter(|segment| segment.in_effect())
        .filter_map(|segment| segment.contaminant)
        .collect();

    let mut dispatch: Vec<ContaminantId> = Vec::new();
    for contaminant in &in_effect {
        let Some(entry) = catalog::lookup(*contaminant, query.surface) else {
            continue;
        };
        if entry.call_dxp && !dispatch.contains(contaminant) {
            dispatch.push(*contaminant);
        }
    }
    advisories.extend(
        dispatch
            .into_iter()
            .map(|contaminant| Advisory::CallDispatch { contaminant }),
    );

    let mut depth: Vec<ContaminantId> = Vec::new();
    for contaminant in &in_effect {
        if catalog::lookup(*contaminant, query.surface).is_none() {
            continue;
        }
        if contaminant.max_depth_in().is_some() && !depth.contains(contaminant) {
            depth.push(*contaminant);
        }
    }
    advisories.extend(depth.into_iter().filter_map(|contaminant| {
        contaminant
            .max_depth_in()
            .map(|limit_in| Advisory::MaxDepth {
                contaminant,
                limit_in,
            })
    }));

    if result.code.is_no_go() {
        advisories.push(Advisory::NoGo);
    }

    if !advisories.is_empty() {
        tracing::debug!(count = advisories.len(), "dispatch advisories raised");
    }

    advisories
}
