use std::fmt;

/// Hue/saturation/lightness triple: `h` in degrees `[0, 360)`, `s` and `l` in percent `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation in percent.
    pub s: f64,
    /// Lightness in percent.
    pub l: f64,
}

impl Hsl {
    /// Build a color, wrapping the hue into `[0, 360)`.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: wrap_hue(h),
            s,
            l,
        }
    }

    /// Same saturation and lightness, hue rotated by `degrees`.
    pub fn rotate(self, degrees: f64) -> Self {
        Self::new(self.h + degrees, self.s, self.l)
    }

    /// Hue rotated half a turn.
    pub fn complementary(self) -> Self {
        self.rotate(180.0)
    }

    /// `[h - spread, h, h + spread]`, in that order.
    pub fn analogous(self, spread: f64) -> [Self; 3] {
        [self.rotate(-spread), self, self.rotate(spread)]
    }

    /// `[h, h + 120, h + 240]`, starting with the base.
    pub fn triadic(self) -> [Self; 3] {
        [self, self.rotate(120.0), self.rotate(240.0)]
    }
}

/// Formats as `hsl(H, S%, L%)` with each component rounded half-up.
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            round_half_up(self.h),
            round_half_up(self.s),
            round_half_up(self.l)
        )
    }
}

/// Which harmony to derive from a base color.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Harmony {
    /// Base plus its complement.
    Complementary,
    /// Base flanked by neighbours `spread` degrees away.
    Analogous {
        /// Degrees between neighbours.
        #[serde(default = "default_spread")]
        spread: f64,
    },
    /// Three hues evenly spaced around the wheel.
    Triadic,
}

/// Default analogous spread in degrees.
pub const DEFAULT_ANALOGOUS_SPREAD: f64 = 30.0;

fn default_spread() -> f64 {
    DEFAULT_ANALOGOUS_SPREAD
}

impl Default for Harmony {
    fn default() -> Self {
        Self::Analogous {
            spread: DEFAULT_ANALOGOUS_SPREAD,
        }
    }
}

impl Harmony {
    /// Colors of this harmony in their fixed order.
    pub fn apply(self, base: Hsl) -> Vec<Hsl> {
        match self {
            Self::Complementary => vec![base, base.complementary()],
            Self::Analogous { spread } => base.analogous(spread).to_vec(),
            Self::Triadic => base.triadic().to_vec(),
        }
    }
}

fn wrap_hue(h: f64) -> f64 {
    let w = h.rem_euclid(360.0);
    // rem_euclid can round up to the modulus for tiny negative inputs.
    if w >= 360.0 { 0.0 } else { w }
}

fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

#[cfg(test)]
#[path = "../../tests/unit/color/harmony.rs"]
mod tests;
