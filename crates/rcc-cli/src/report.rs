//! Dispatch report assembled from a resolution, its advisories and an
//! optional wind check.

use chrono::{DateTime, Utc};
use rcc_core::{
    advisories, advisory_max_crosswind_kt, check_crosswind, components, runway_heading,
    Advisory, ContaminantId, CrosswindCheck, RccQuery, RccResult, Segment, SurfaceKind, Wind,
    WindComponents, WindError,
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SegmentReport {
    /// Description as the dispatcher typed it
    pub input: String,
    pub contaminant: Option<ContaminantId>,
    pub description: Option<&'static str>,
    pub coverage_percent: u8,
}

impl SegmentReport {
    pub fn new(segment: &Segment, input: &str) -> Self {
        Self {
            input: input.to_string(),
            contaminant: segment.contaminant,
            description: segment.contaminant.map(ContaminantId::description),
            coverage_percent: segment.coverage.percent(),
        }
    }

    /// Catalog description, or the raw input when it matched nothing.
    fn label(&self, surface: SurfaceKind) -> String {
        if let Some(description) = self.description {
            return description.to_string();
        }
        let input = self.input.trim();
        if input.is_empty() || input == surface.placeholder() {
            "(none)".to_string()
        } else {
            format!("\"{}\" (not in catalog)", input)
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryLine {
    #[serde(flatten)]
    pub advisory: Advisory,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WindReport {
    pub runway: String,
    pub runway_heading_deg: u16,
    pub wind: Wind,
    pub components: WindComponents,
    pub crosswind_check: CrosswindCheck,
}

impl WindReport {
    pub fn build(runway: &str, wind: Wind, result: &RccResult) -> Result<Self, WindError> {
        let heading = runway_heading(runway)?;
        let heading_deg = f64::from(heading);
        Ok(Self {
            runway: runway.trim().to_uppercase(),
            runway_heading_deg: heading,
            wind,
            components: components(heading_deg, &wind)?,
            crosswind_check: check_crosswind(heading_deg, &wind, result.code)?,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DispatchReport {
    pub generated_at: DateTime<Utc>,
    pub surface: SurfaceKind,
    pub segment1: SegmentReport,
    pub segment2: SegmentReport,
    pub result: RccResult,
    pub advisories: Vec<AdvisoryLine>,
    pub advisory_max_crosswind_kt: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind: Option<WindReport>,
}

impl DispatchReport {
    /// Resolve the query and collect everything dispatch needs to see.
    ///
    /// `inputs` are the raw descriptions the query was built from, echoed
    /// back so unmatched entries stay visible.
    pub fn build(
        query: &RccQuery,
        inputs: [&str; 2],
        wind: Option<(&str, Wind)>,
    ) -> Result<Self, WindError> {
        let result = query.resolve();
        let advisories = advisories(query, &result)
            .into_iter()
            .map(|advisory| AdvisoryLine {
                message: advisory.to_string(),
                advisory,
            })
            .collect();
        let wind = wind
            .map(|(runway, wind)| WindReport::build(runway, wind, &result))
            .transpose()?;

        Ok(Self {
            generated_at: Utc::now(),
            surface: query.surface,
            segment1: SegmentReport::new(&query.segment1, inputs[0]),
            segment2: SegmentReport::new(&query.segment2, inputs[1]),
            advisory_max_crosswind_kt: advisory_max_crosswind_kt(result.code),
            result,
            advisories,
            wind,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn render_text(&self) -> String {
        let mut lines = vec![format!("Surface:   {}", self.surface)];
        for (idx, segment) in [&self.segment1, &self.segment2].into_iter().enumerate() {
            lines.push(format!(
                "Segment {}: {} @ {}%",
                idx + 1,
                segment.label(self.surface),
                segment.coverage_percent
            ));
        }
        lines.push(format!(
            "Coverage:  {}% total, {} segment(s) in effect",
            self.result.total_coverage_percent, self.result.segment_count
        ));
        lines.push(format!("RCC:       {}", self.result.code));
        lines.push(match self.advisory_max_crosswind_kt {
            Some(limit) => format!("Max crosswind: {} kt", limit),
            None => "Max crosswind: n/a".to_string(),
        });

        if let Some(wind) = &self.wind {
            lines.push(format!(
                "Runway {} ({:03}°): headwind {:.1} kt, crosswind {:.1} kt",
                wind.runway,
                wind.runway_heading_deg,
                wind.components.headwind_kt,
                wind.components.crosswind_kt
            ));
            let verdict = if wind.crosswind_check.within_limit {
                "within limit"
            } else {
                "EXCEEDS LIMIT"
            };
            lines.push(format!(
                "Crosswind check: {:.1} kt, {}",
                wind.crosswind_check.crosswind_kt, verdict
            ));
        }

        lines.extend(self.advisories.iter().map(|line| format!("! {}", line.message)));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}
