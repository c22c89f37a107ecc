//! Seeded procedural decoration for greeting cards.
//!
//! Everything here is a pure function of an integer [`Seed`]: a card stores only its seed and
//! generation parameters, and re-opening it regenerates the same decoration.
//!
//! - [`SeededStream`]: 32-bit mulberry generator, bit-compatible with the JavaScript `mulberry32`.
//! - [`golden_sequence`]: low-discrepancy values by golden-ratio stepping.
//! - [`Hsl`] and [`Harmony`]: complementary, analogous and triadic palettes.
//! - [`placements`]: element positions, rotations and scales that avoid an [`ExclusionZone`].
//! - [`shuffle`] / [`pick`]: reproducible Fisher-Yates selection.
//! - [`DecorPlan`]: JSON plan documents tying the above together.
//!
//! Streams are cheap and owned by one computation. Concurrent callers build their own.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod color;
mod foundation;
mod layout;
mod plan;
mod random;

pub use color::convert::Rgb8;
pub use color::harmony::{DEFAULT_ANALOGOUS_SPREAD, Harmony, Hsl};
pub use foundation::core::{Point, Seed};
pub use foundation::error::{SeedcardError, SeedcardResult};
pub use layout::placer::{
    ExclusionZone, PLACEMENT_MAX, PLACEMENT_MIN, PlacementOpts, Position, ScaleRange, placements,
};
pub use plan::generate::{DecorLayout, PaletteEntry, generate_batch, seed_run};
pub use plan::model::{DecorPlan, ElementsDef, MAX_ELEMENT_COUNT, PaletteDef, PickDef};
pub use random::sequence::{
    GOLDEN_RATIO_FRAC, GoldenSequence, golden_sequence, golden_sequence_from,
};
pub use random::shuffle::{pick, shuffle, shuffle_in_place};
pub use random::stream::SeededStream;
