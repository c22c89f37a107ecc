use std::{collections::BTreeSet, fs::File, io::BufReader, path::Path};

use crate::{
    color::harmony::{Harmony, Hsl},
    foundation::core::Seed,
    foundation::error::{SeedcardError, SeedcardResult},
    layout::placer::PlacementOpts,
};

/// Largest `elements.count` a plan may request.
pub const MAX_ELEMENT_COUNT: usize = 10_000;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Persisted decoration parameters for one card.
///
/// A plan stores the seed and the knobs, never generated output; [`DecorPlan::generate`]
/// rebuilds the identical decoration every time it is called.
pub struct DecorPlan {
    /// Identity of the decoration.
    pub seed: Seed,
    /// Decorative element placement.
    #[serde(default)]
    pub elements: ElementsDef,
    /// Optional color palette derived from one base color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<PaletteDef>,
    /// Named seeded selections (greeting presets, icon sets, ...).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub picks: Vec<PickDef>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// How many elements to place and where they may go.
pub struct ElementsDef {
    /// Requested element count.
    #[serde(default)]
    pub count: usize,
    /// Exclusion zone and scale range.
    #[serde(flatten)]
    pub opts: PlacementOpts,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Base color and the harmony built from it.
pub struct PaletteDef {
    /// Base color.
    pub base: Hsl,
    /// Harmony kind.
    #[serde(default)]
    pub harmony: Harmony,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A named pick of `count` items out of `items`.
pub struct PickDef {
    /// Key of this selection in the generated layout.
    pub name: String,
    /// Candidates, in their canonical order.
    pub items: Vec<String>,
    /// How many to take.
    pub count: usize,
    /// Seed override; the plan seed is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<Seed>,
}

impl DecorPlan {
    /// Plan with only a seed; no elements, palette, or picks.
    pub fn new(seed: impl Into<Seed>) -> Self {
        Self {
            seed: seed.into(),
            elements: ElementsDef::default(),
            palette: None,
            picks: Vec::new(),
        }
    }

    /// Parse and validate a plan from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SeedcardResult<Self> {
        let plan: Self = serde_json::from_reader(r)
            .map_err(|e| SeedcardError::serde(format!("parse decor plan JSON: {e}")))?;
        plan.validate()?;
        Ok(plan)
    }

    /// Parse and validate a plan from a JSON string.
    pub fn from_json_str(s: &str) -> SeedcardResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse and validate a plan from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SeedcardResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SeedcardError::validation(format!("open decor plan JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Same plan with a different seed.
    pub fn with_seed(&self, seed: impl Into<Seed>) -> Self {
        Self {
            seed: seed.into(),
            ..self.clone()
        }
    }

    /// Semantic checks serde cannot express.
    pub fn validate(&self) -> SeedcardResult<()> {
        if self.elements.count > MAX_ELEMENT_COUNT {
            return Err(SeedcardError::validation(format!(
                "elements.count must be <= {MAX_ELEMENT_COUNT}"
            )));
        }
        self.elements.opts.validate()?;

        if let Some(palette) = &self.palette {
            let Hsl { h, s, l } = palette.base;
            if !h.is_finite() {
                return Err(SeedcardError::validation("palette.base.h must be finite"));
            }
            for (name, v) in [("s", s), ("l", l)] {
                if !v.is_finite() || !(0.0..=100.0).contains(&v) {
                    return Err(SeedcardError::validation(format!(
                        "palette.base.{name} must be within [0, 100]"
                    )));
                }
            }
            if let Harmony::Analogous { spread } = palette.harmony
                && !spread.is_finite()
            {
                return Err(SeedcardError::validation(
                    "palette.harmony.spread must be finite",
                ));
            }
        }

        let mut names = BTreeSet::new();
        for pick in &self.picks {
            if pick.name.trim().is_empty() {
                return Err(SeedcardError::validation("pick name must be non-empty"));
            }
            if !names.insert(pick.name.as_str()) {
                return Err(SeedcardError::validation(format!(
                    "duplicate pick name \"{}\"",
                    pick.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plan/model.rs"]
mod tests;
