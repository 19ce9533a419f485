//! Headwind/crosswind components against a runway heading.

use crate::advisory::advisory_max_crosswind_kt;
use crate::error::WindError;
use crate::resolver::ConditionCode;
use serde::{Deserialize, Serialize};

/// Reported surface wind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Direction the wind blows from, degrees
    pub direction_deg: f64,
    pub speed_kt: f64,
    #[serde(default)]
    pub gust_kt: Option<f64>,
}

impl Wind {
    pub fn new(direction_deg: f64, speed_kt: f64) -> Self {
        Self {
            direction_deg,
            speed_kt,
            gust_kt: None,
        }
    }

    pub fn with_gust(mut self, gust_kt: f64) -> Self {
        self.gust_kt = Some(gust_kt);
        self
    }

    fn validate(&self) -> Result<(), WindError> {
        if !self.direction_deg.is_finite() {
            return Err(WindError::InvalidDirection(self.direction_deg));
        }
        for speed in std::iter::once(self.speed_kt).chain(self.gust_kt) {
            if !speed.is_finite() || speed < 0.0 {
                return Err(WindError::InvalidSpeed(speed));
            }
        }
        Ok(())
    }

    /// Speed used for limit checks: the gust when it exceeds the steady wind.
    pub fn effective_speed_kt(&self) -> f64 {
        self.gust_kt.map_or(self.speed_kt, |gust| gust.max(self.speed_kt))
    }
}

/// Wind resolved along and across the runway.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindComponents {
    /// Positive is a headwind, negative a tailwind
    pub headwind_kt: f64,
    /// Positive is from the right, negative from the left
    pub crosswind_kt: f64,
    /// Wind direction relative to the runway, (-180, 180]
    pub relative_angle_deg: f64,
}

/// Crosswind compared against the advisory limit for a condition code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrosswindCheck {
    /// Absolute crosswind at the effective (gust) speed
    pub crosswind_kt: f64,
    pub limit_kt: Option<u16>,
    pub within_limit: bool,
}

/// Magnetic heading for a runway designator such as "24", "06L" or "33R".
pub fn runway_heading(designator: &str) -> Result<u16, WindError> {
    let trimmed = designator.trim();
    let digits = trimmed.trim_end_matches(['L', 'C', 'R', 'l', 'c', 'r']);
    if digits.is_empty() || digits.len() > 2 || trimmed.len() - digits.len() > 1 {
        return Err(WindError::InvalidRunway(designator.to_string()));
    }
    match digits.parse::<u16>() {
        Ok(number) if (1..=36).contains(&number) => Ok(number * 10),
        _ => Err(WindError::InvalidRunway(designator.to_string())),
    }
}

/// Normalise an angle to (-180, 180].
fn normalize_deg(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

fn components_at(runway_heading_deg: f64, direction_deg: f64, speed_kt: f64) -> WindComponents {
    let relative_angle_deg = normalize_deg(direction_deg - runway_heading_deg);
    let angle = relative_angle_deg.to_radians();
    WindComponents {
        headwind_kt: speed_kt * angle.cos(),
        crosswind_kt: speed_kt * angle.sin(),
        relative_angle_deg,
    }
}

/// Steady-wind components for a runway heading.
pub fn components(runway_heading_deg: f64, wind: &Wind) -> Result<WindComponents, WindError> {
    wind.validate()?;
    Ok(components_at(runway_heading_deg, wind.direction_deg, wind.speed_kt))
}

/// Check the crosswind (gust included) against the advisory limit for `code`.
///
/// Overflow and unresolved codes have no limit and never pass.
pub fn check_crosswind(
    runway_heading_deg: f64,
    wind: &Wind,
    code: ConditionCode,
) -> Result<CrosswindCheck, WindError> {
    wind.validate()?;
    let gust = components_at(runway_heading_deg, wind.direction_deg, wind.effective_speed_kt());
    let crosswind_kt = gust.crosswind_kt.abs();
    let limit_kt = advisory_max_crosswind_kt(code);
    let within_limit = limit_kt.is_some_and(|limit| crosswind_kt <= f64::from(limit));

    if !within_limit {
        tracing::debug!(crosswind_kt, ?limit_kt, %code, "crosswind exceeds advisory limit");
    }

    Ok(CrosswindCheck {
        crosswind_kt,
        limit_kt,
        within_limit,
    })
}
