//! Structural growth effects and their catalog
//!
//! Every effect runs the same skeleton in [`EffectDefinition::apply`]:
//!
//! 1. expand the source by the effect's padding
//! 2. tint the opaque pixels of the original region
//! 3. sample growth sites once from the tinted canvas
//! 4. run the effect's growth passes over those sites
//!
//! One [`SeededRng`] is created per invocation and threaded through steps 2
//! to 4, so the output depends only on the source, the effect and the seed.
//!
//! | Effect | Padding | Bias | Writes |
//! |--------|---------|------|--------|
//! | `spikes` | 12 | none | blend |
//! | `poison` | 14 | downward | blend |
//! | `wood` | 6 | none | blend, recolor |
//! | `plant` | 16 | none | set |
//! | `crystal` | 14 | edge normal | set, blend |
//! | `fire` | 14 | upward | blend |
//! | `frozen` | 14 | downward | blend |
//! | `electric` | 12 | none | set, blend |
//! | `corruption` | 10 | none | set |
//! | `stone` | 6 | none | blend, recolor |
//! | `shadow` | 10 | upward | blend |
//! | `slime` | 14 | downward | blend |
//! | `chaos_spikes` | 16 | none | blend |
//! | `bubbles` | 18 | edge normal | blend |
//! | `overgrowth` | 30 | outer edge | set, blend |
//! | `inferno` | 24 | upward | blend |
//! | `storm` | 50 | none | set, blend |

mod bubbles;
mod chaos_spikes;
mod corruption;
mod crystal;
mod electric;
mod fire;
mod frozen;
mod plant;
mod poison;
mod shadow;
mod slime;
mod spikes;
mod stone;
mod wood;

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::canvas::{expand_with_region, Region};
use crate::error::TransformError;
use crate::pixels::PixelBuffer;
use crate::rng::SeededRng;
use crate::sampler::{sample_edges, EdgeSample};
use crate::suggest::closest;
use crate::tint::{apply_tint, Tint};

/// Recursion limit for branching growth (overgrowth vines, storm forks).
pub const MAX_BRANCH_DEPTH: u32 = 2;

/// Identifier of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    Spikes,
    Poison,
    Wood,
    Plant,
    Crystal,
    Fire,
    Frozen,
    Electric,
    Corruption,
    Stone,
    Shadow,
    Slime,
    ChaosSpikes,
    Bubbles,
    Overgrowth,
    Inferno,
    Storm,
}

impl EffectKind {
    /// The catalog entry for this kind.
    pub fn definition(self) -> &'static EffectDefinition {
        // CATALOG is declared in enum order
        &CATALOG[self as usize]
    }

    pub fn id(self) -> &'static str {
        self.definition().id
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for EffectKind {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve(s).map(|def| def.kind)
    }
}

/// Mutable state handed to an effect's growth passes.
pub struct Growth {
    pub canvas: PixelBuffer,
    pub rng: SeededRng,
    /// Sites from [`sample_edges`], never empty.
    pub sites: Vec<EdgeSample>,
    /// Where the source sprite sits inside the canvas.
    pub region: Region,
    pub seed: i64,
}

impl Growth {
    /// A uniformly drawn site (one draw).
    #[inline]
    pub fn pick_site(&mut self) -> EdgeSample {
        self.sites[self.rng.below(self.sites.len())]
    }

    /// Number of passes for a loop bounded by `min(sites / divisor, cap)`.
    ///
    /// The bound is fractional, so a count of 30 sites over 20 runs twice.
    pub fn budget(&self, divisor: f64, cap: f64) -> usize {
        (self.sites.len() as f64 / divisor).min(cap).ceil() as usize
    }

    /// Opaque pixels of the source region, row-major.
    pub fn sprite_pixels(&self) -> Vec<(i32, i32)> {
        self.region.points().filter(|&(x, y)| self.canvas.is_opaque(x, y)).collect()
    }
}

/// A registered effect.
pub struct EffectDefinition {
    pub kind: EffectKind,
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Margin added on every side before growth.
    pub padding: u32,
    pub tint: Tint,
    pub grow: fn(&mut Growth),
}

impl fmt::Debug for EffectDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectDefinition")
            .field("id", &self.id)
            .field("padding", &self.padding)
            .finish_non_exhaustive()
    }
}

impl EffectDefinition {
    /// Run this effect on `source`. The source is never modified.
    pub fn apply(&self, source: &PixelBuffer, seed: i64) -> Result<PixelBuffer, TransformError> {
        let (mut canvas, region) = expand_with_region(source, self.padding)?;
        let mut rng = SeededRng::new(seed);

        apply_tint(&mut canvas, region, &self.tint, &mut rng);
        let sites = sample_edges(&canvas, &mut rng);
        trace!(effect = self.id, sites = sites.len(), "sampled growth sites");
        if sites.is_empty() {
            return Ok(canvas);
        }

        let mut growth = Growth { canvas, rng, sites, region, seed };
        (self.grow)(&mut growth);
        Ok(growth.canvas)
    }
}

static CATALOG: &[EffectDefinition] = &[
    EffectDefinition {
        kind: EffectKind::Spikes,
        id: "spikes",
        name: "Spikes",
        description: "Sharp dark protrusions",
        padding: 12,
        tint: Tint::Color(spikes::tint),
        grow: spikes::grow,
    },
    EffectDefinition {
        kind: EffectKind::Poison,
        id: "poison",
        name: "Poison",
        description: "Toxic drips & bubbles",
        padding: 14,
        tint: Tint::Color(poison::tint),
        grow: poison::grow,
    },
    EffectDefinition {
        kind: EffectKind::Wood,
        id: "wood",
        name: "Wood",
        description: "Grain, bark & knots",
        padding: 6,
        tint: Tint::Positional(wood::tint),
        grow: wood::grow,
    },
    EffectDefinition {
        kind: EffectKind::Plant,
        id: "plant",
        name: "Plant Growth",
        description: "Vines, leaves & flowers",
        padding: 16,
        tint: Tint::Color(plant::tint),
        grow: plant::grow,
    },
    EffectDefinition {
        kind: EffectKind::Crystal,
        id: "crystal",
        name: "Crystal",
        description: "Gemstone shards",
        padding: 14,
        tint: Tint::Color(crystal::tint),
        grow: crystal::grow,
    },
    EffectDefinition {
        kind: EffectKind::Fire,
        id: "fire",
        name: "Fire",
        description: "Flames & embers",
        padding: 14,
        tint: Tint::Color(fire::tint),
        grow: fire::grow,
    },
    EffectDefinition {
        kind: EffectKind::Frozen,
        id: "frozen",
        name: "Frozen",
        description: "Icicles & frost",
        padding: 14,
        tint: Tint::Color(frozen::tint),
        grow: frozen::grow,
    },
    EffectDefinition {
        kind: EffectKind::Electric,
        id: "electric",
        name: "Electric",
        description: "Lightning & sparks",
        padding: 12,
        tint: Tint::Color(electric::tint),
        grow: electric::grow,
    },
    EffectDefinition {
        kind: EffectKind::Corruption,
        id: "corruption",
        name: "Corruption",
        description: "Glitched decay",
        padding: 10,
        tint: Tint::Noise(corruption::tint),
        grow: corruption::grow,
    },
    EffectDefinition {
        kind: EffectKind::Stone,
        id: "stone",
        name: "Stone",
        description: "Rock texture & cracks",
        padding: 6,
        tint: Tint::Noise(stone::tint),
        grow: stone::grow,
    },
    EffectDefinition {
        kind: EffectKind::Shadow,
        id: "shadow",
        name: "Shadow",
        description: "Dark smoke & wisps",
        padding: 10,
        tint: Tint::Color(shadow::tint),
        grow: shadow::grow,
    },
    EffectDefinition {
        kind: EffectKind::Slime,
        id: "slime",
        name: "Slime",
        description: "Gooey dripping ooze",
        padding: 14,
        tint: Tint::Color(slime::tint),
        grow: slime::grow,
    },
    EffectDefinition {
        kind: EffectKind::ChaosSpikes,
        id: "chaos_spikes",
        name: "Chaos Spikes",
        description: "Wild jagged eruptions",
        padding: 16,
        tint: Tint::Color(chaos_spikes::tint),
        grow: chaos_spikes::grow,
    },
    EffectDefinition {
        kind: EffectKind::Bubbles,
        id: "bubbles",
        name: "Bubbles",
        description: "Iridescent floating orbs",
        padding: 18,
        tint: Tint::Color(bubbles::tint),
        grow: bubbles::grow,
    },
    EffectDefinition {
        kind: EffectKind::Overgrowth,
        id: "overgrowth",
        name: "Overgrowth",
        description: "Branching vines, leaf clusters & stemmed flowers",
        padding: 30,
        tint: Tint::Color(plant::tint),
        grow: plant::grow_overgrowth,
    },
    EffectDefinition {
        kind: EffectKind::Inferno,
        id: "inferno",
        name: "Inferno",
        description: "Roaring wide flames & smoke",
        padding: 24,
        tint: Tint::Color(fire::tint_inferno),
        grow: fire::grow_inferno,
    },
    EffectDefinition {
        kind: EffectKind::Storm,
        id: "storm",
        name: "Storm",
        description: "Forking lightning storm",
        padding: 50,
        tint: Tint::Color(electric::tint_storm),
        grow: electric::grow_storm,
    },
];

/// Every registered effect, in display order.
pub fn catalog() -> &'static [EffectDefinition] {
    CATALOG
}

/// All effect ids, in catalog order.
pub fn effect_ids() -> Vec<&'static str> {
    CATALOG.iter().map(|def| def.id).collect()
}

/// Look up an effect by id.
pub fn resolve(id: &str) -> Result<&'static EffectDefinition, TransformError> {
    CATALOG.iter().find(|def| def.id == id).ok_or_else(|| TransformError::UnknownEffect {
        id: id.to_string(),
        suggestion: closest(id, &effect_ids()),
    })
}

/// Padding an effect adds on each side.
pub fn padding(id: &str) -> Result<u32, TransformError> {
    resolve(id).map(|def| def.padding)
}

/// Apply effect `id` to `source` with `seed`.
///
/// The output is `(w + 2p) x (h + 2p)` for the effect's padding `p`. An
/// unknown id fails before any buffer is allocated.
#[tracing::instrument(skip(source), fields(width = source.width(), height = source.height()))]
pub fn transform(source: &PixelBuffer, id: &str, seed: i64) -> Result<PixelBuffer, TransformError> {
    let def = resolve(id)?;
    let output = def.apply(source, seed)?;
    debug!(
        effect = def.id,
        seed,
        out_width = output.width(),
        out_height = output.height(),
        opaque = output.opaque_count(),
        "transform complete"
    );
    Ok(output)
}
