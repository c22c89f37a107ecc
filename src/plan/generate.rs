use std::collections::BTreeMap;

use rayon::prelude::*;

use crate::{
    color::harmony::Hsl,
    foundation::core::Seed,
    foundation::error::{SeedcardError, SeedcardResult},
    layout::placer::{Position, placements},
    plan::model::DecorPlan,
    random::shuffle::pick,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Fully regenerated decoration for one plan.
pub struct DecorLayout {
    /// Seed the layout was generated from.
    pub seed: Seed,
    /// Accepted element placements, possibly fewer than requested.
    pub positions: Vec<Position>,
    /// Palette colors in harmony order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub palette: Vec<PaletteEntry>,
    /// Picked items keyed by pick name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub picks: BTreeMap<String, Vec<String>>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A palette color with its rendering-boundary strings.
pub struct PaletteEntry {
    /// Numeric color.
    pub hsl: Hsl,
    /// CSS `hsl(...)` string.
    pub css: String,
    /// `#rrggbb` string.
    pub hex: String,
}

impl From<Hsl> for PaletteEntry {
    fn from(hsl: Hsl) -> Self {
        Self {
            hsl,
            css: hsl.to_string(),
            hex: hsl.to_rgb8().to_hex(),
        }
    }
}

impl DecorPlan {
    /// Regenerate the decoration. Identical plans give identical layouts.
    #[tracing::instrument(skip(self), fields(seed = self.seed.0))]
    pub fn generate(&self) -> SeedcardResult<DecorLayout> {
        self.validate()?;

        let positions = placements(self.seed, self.elements.count, &self.elements.opts);

        let palette = self
            .palette
            .map(|p| {
                let base = Hsl::new(p.base.h, p.base.s, p.base.l);
                p.harmony
                    .apply(base)
                    .into_iter()
                    .map(PaletteEntry::from)
                    .collect()
            })
            .unwrap_or_default();

        let picks = self
            .picks
            .iter()
            .map(|p| {
                let seed = p.seed.unwrap_or(self.seed);
                (p.name.clone(), pick(&p.items, p.count, seed))
            })
            .collect();

        tracing::debug!(positions = positions.len(), "generated decor layout");
        Ok(DecorLayout {
            seed: self.seed,
            positions,
            palette,
            picks,
        })
    }
}

/// Seeds `first, first + 1, ..` with 32-bit wraparound.
pub fn seed_run(first: Seed, runs: usize) -> Vec<Seed> {
    (0..runs).map(|i| first.offset(i as u32)).collect()
}

/// Regenerate `plan` once per seed on a dedicated thread pool, preserving seed order.
///
/// Every job builds its own streams; nothing is shared between workers.
#[tracing::instrument(skip(plan, seeds), fields(jobs = seeds.len()))]
pub fn generate_batch(
    plan: &DecorPlan,
    seeds: &[Seed],
    threads: Option<usize>,
) -> SeedcardResult<Vec<DecorLayout>> {
    plan.validate()?;
    let pool = build_thread_pool(threads)?;
    pool.install(|| {
        seeds
            .par_iter()
            .map(|&seed| plan.with_seed(seed).generate())
            .collect()
    })
}

fn build_thread_pool(threads: Option<usize>) -> SeedcardResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(SeedcardError::validation(
            "generate_batch 'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        SeedcardError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/plan/generate.rs"]
mod tests;
