use crate::{
    foundation::core::{Point, Seed},
    foundation::error::{SeedcardError, SeedcardResult},
    random::{sequence::golden_sequence_from, stream::SeededStream},
};

/// Lower bound of generated coordinates, in percent of the card.
pub const PLACEMENT_MIN: f64 = 5.0;
/// Upper bound of generated coordinates, in percent of the card.
pub const PLACEMENT_MAX: f64 = 95.0;

/// Circle in percent coordinates that placements must stay out of.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ExclusionZone {
    /// Center x, percent.
    pub center_x: f64,
    /// Center y, percent.
    pub center_y: f64,
    /// Radius, percent.
    pub radius: f64,
}

impl ExclusionZone {
    /// Zone centered at `(center_x, center_y)`.
    pub const fn new(center_x: f64, center_y: f64, radius: f64) -> Self {
        Self {
            center_x,
            center_y,
            radius,
        }
    }

    /// The reserved block behind a card's centered greeting text.
    pub const fn card_center() -> Self {
        Self::new(50.0, 50.0, 20.0)
    }

    /// Center as a point.
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    /// True when `p` lies strictly inside the circle.
    pub fn contains(&self, p: Point) -> bool {
        p.distance(self.center()) < self.radius
    }

    fn validate(&self) -> SeedcardResult<()> {
        for (name, v) in [("center_x", self.center_x), ("center_y", self.center_y)] {
            if !v.is_finite() {
                return Err(SeedcardError::validation(format!(
                    "exclusion.{name} must be finite"
                )));
            }
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(SeedcardError::validation(
                "exclusion.radius must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

/// Scales are drawn from `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScaleRange {
    /// Smallest scale.
    pub min: f64,
    /// Largest scale.
    pub max: f64,
}

impl Default for ScaleRange {
    fn default() -> Self {
        Self { min: 0.4, max: 1.0 }
    }
}

/// Options for [`placements`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlacementOpts {
    /// Area to keep clear; `None` accepts every candidate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusion: Option<ExclusionZone>,
    /// Scale range for accepted placements.
    #[serde(default)]
    pub scale: ScaleRange,
}

impl PlacementOpts {
    /// Check the options carry finite, ordered values.
    pub fn validate(&self) -> SeedcardResult<()> {
        if let Some(zone) = &self.exclusion {
            zone.validate()?;
        }
        let ScaleRange { min, max } = self.scale;
        if !min.is_finite() || !max.is_finite() {
            return Err(SeedcardError::validation("scale.min/max must be finite"));
        }
        if min > max {
            return Err(SeedcardError::validation("scale.min must be <= scale.max"));
        }
        Ok(())
    }
}

/// One decorative element placement.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Position {
    /// Horizontal position, percent of card width.
    pub x: f64,
    /// Vertical position, percent of card height.
    pub y: f64,
    /// Rotation in degrees, `[-180, 180)`.
    pub rotation: f64,
    /// Uniform scale within the requested range.
    pub scale: f64,
}

/// Up to `count` placements derived from `seed`, avoiding `opts.exclusion`.
///
/// Candidates come from two golden-ratio sequences of length `2 * count` (x from `seed`, y from
/// `seed + 1`). Rotation and scale keep drawing from the x stream. When too many candidates fall
/// inside the exclusion zone the result holds fewer than `count` entries.
pub fn placements(seed: impl Into<Seed>, count: usize, opts: &PlacementOpts) -> Vec<Position> {
    if count == 0 {
        return Vec::new();
    }
    let seed = seed.into();
    let pool = count.saturating_mul(2);

    let mut stream = SeededStream::new(seed);
    let xs = golden_sequence_from(&mut stream, pool, PLACEMENT_MIN, PLACEMENT_MAX);
    let mut y_stream = SeededStream::new(seed.offset(1));
    let ys = golden_sequence_from(&mut y_stream, pool, PLACEMENT_MIN, PLACEMENT_MAX);

    let ScaleRange {
        min: min_scale,
        max: max_scale,
    } = opts.scale;

    let mut out = Vec::with_capacity(count);
    for (x, y) in xs.into_iter().zip(ys) {
        if out.len() == count {
            break;
        }
        if let Some(zone) = &opts.exclusion
            && zone.contains(Point::new(x, y))
        {
            continue;
        }
        let rotation = stream.next_f64() * 360.0 - 180.0;
        let scale = min_scale + stream.next_f64() * (max_scale - min_scale);
        out.push(Position {
            x,
            y,
            rotation,
            scale,
        });
    }

    if out.len() < count {
        tracing::debug!(
            seed = seed.0,
            requested = count,
            placed = out.len(),
            "exclusion zone exhausted candidate pool"
        );
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/layout/placer.rs"]
mod tests;
