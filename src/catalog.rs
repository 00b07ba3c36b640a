//! # Constituent Catalog
//!
//! Read-only tables of the main (astronomical) tidal constituents and the
//! shallow water constituents built from them.
//!
//! ## Lookup Order
//! A name is resolved against the main table first and the shallow table
//! second. [`Catalog::resolve`] returns a tagged [`Resolution`] so callers
//! never rely on sentinel codes.
//!
//! ## Validation
//! [`Catalog::new`] checks the tables once, at construction:
//! - names are non-empty, shorter than [`MAX_NAME_LEN`] and unique
//! - a main constituent carries at most [`MAX_SATELLITES`] satellites
//! - a shallow constituent has 1 to [`MAX_PARTS`] finite, non-zero parts
//! - every part resolves, and shallow nesting stays within
//!   [`MAX_SHALLOW_DEPTH`] (which also rules out cycles)
//!
//! Any violation is a [`TidalError::MalformedCatalogEntry`]. The built-in
//! tables are validated lazily on first use by [`Catalog::builtin`].

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use tracing::debug;

use crate::constituents::CONSTITUENTS;
use crate::error::{TidalError, TidalResult};
use crate::shallows::SHALLOWS;

/// Longest accepted constituent name, exclusive.
pub const MAX_NAME_LEN: usize = 32;
/// Satellites per main constituent.
pub const MAX_SATELLITES: usize = 32;
/// Parts per shallow water constituent.
pub const MAX_PARTS: usize = 4;
/// Deepest shallow-in-shallow nesting the combiner follows.
pub const MAX_SHALLOW_DEPTH: usize = 4;

/// Latitude dependence of a satellite's amplitude ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatitudeCorrection {
    /// Ratio used as tabulated.
    None,
    /// Scaled by `0.36309 (1 - 5 sin²φ) / sin φ`.
    Diurnal,
    /// Scaled by `2.59808 sin φ`.
    Semidiurnal,
}

impl LatitudeCorrection {
    /// Table code: 0 none, 1 diurnal, 2 semidiurnal.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(LatitudeCorrection::None),
            1 => Some(LatitudeCorrection::Diurnal),
            2 => Some(LatitudeCorrection::Semidiurnal),
            _ => None,
        }
    }
}

/// Minor sub-constituent perturbing its parent's node factor and phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SatelliteTerm {
    /// Doodson delta relative to the parent, in `[t, s, h, p, np, pp]` order.
    pub doodson: [i32; 6],
    /// Phase offset in cycles.
    pub phase: f64,
    /// Amplitude relative to the parent.
    pub ratio: f64,
    pub correction: LatitudeCorrection,
}

impl SatelliteTerm {
    /// Satellite differing from its parent only in `p`, `np` and `pp`, the
    /// shape every tabulated satellite has.
    pub const fn new(dp: i32, dnp: i32, dpp: i32, phase: f64, ratio: f64, correction: i32) -> Self {
        SatelliteTerm {
            doodson: [0, 0, 0, dp, dnp, dpp],
            phase,
            ratio,
            correction: match correction {
                1 => LatitudeCorrection::Diurnal,
                2 => LatitudeCorrection::Semidiurnal,
                _ => LatitudeCorrection::None,
            },
        }
    }
}

/// Main constituent: Doodson number, constant phase and satellites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstituentDefinition {
    pub name: &'static str,
    /// Multipliers of `[t, s, h, p, np, pp]`.
    pub doodson: [i32; 6],
    /// Constant phase correction in cycles, added to the equilibrium argument.
    pub phase: f64,
    pub satellites: &'static [SatelliteTerm],
}

impl ConstituentDefinition {
    /// Tidal species: cycles per lunar day (0 long period, 1 diurnal, 2 semidiurnal, ...).
    pub fn species(&self) -> i32 {
        self.doodson[0]
    }
}

/// One term of a shallow water combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShallowPart {
    pub name: &'static str,
    pub coefficient: f64,
}

/// Shallow water constituent as a combination of other constituents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShallowDefinition {
    pub name: &'static str,
    pub parts: &'static [ShallowPart],
}

/// Outcome of a name lookup, main table first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    Main(&'a ConstituentDefinition),
    Shallow(&'a ShallowDefinition),
    NotFound,
}

/// Validated, immutable constituent tables keyed by name.
#[derive(Debug)]
pub struct Catalog {
    mains: HashMap<&'static str, &'static ConstituentDefinition>,
    shallows: HashMap<&'static str, &'static ShallowDefinition>,
}

impl Catalog {
    /// Build and validate a catalog from static tables.
    pub fn new(
        constituents: &'static [ConstituentDefinition],
        shallows: &'static [ShallowDefinition],
    ) -> TidalResult<Self> {
        let mut seen = HashSet::new();

        for def in constituents {
            check_name(def.name, &mut seen)?;
            if def.satellites.len() > MAX_SATELLITES {
                return Err(TidalError::malformed(
                    def.name,
                    format!("{} satellites, at most {MAX_SATELLITES} allowed", def.satellites.len()),
                ));
            }
            if def.satellites.iter().any(|s| !s.ratio.is_finite() || !s.phase.is_finite()) {
                return Err(TidalError::malformed(def.name, "non-finite satellite term"));
            }
        }

        for def in shallows {
            check_name(def.name, &mut seen)?;
            if def.parts.is_empty() || def.parts.len() > MAX_PARTS {
                return Err(TidalError::malformed(
                    def.name,
                    format!("{} parts, expected 1 to {MAX_PARTS}", def.parts.len()),
                ));
            }
            if let Some(part) = def
                .parts
                .iter()
                .find(|p| !p.coefficient.is_finite() || p.coefficient == 0.0)
            {
                return Err(TidalError::malformed(
                    def.name,
                    format!("part {} has coefficient {}", part.name, part.coefficient),
                ));
            }
        }

        let catalog = Catalog {
            mains: constituents.iter().map(|d| (d.name, d)).collect(),
            shallows: shallows.iter().map(|d| (d.name, d)).collect(),
        };

        for def in shallows {
            catalog.check_parts(def, def.name, 1)?;
        }

        debug!(
            constituents = catalog.mains.len(),
            shallows = catalog.shallows.len(),
            "catalog loaded"
        );

        Ok(catalog)
    }

    /// The built-in tables, validated on first use.
    ///
    /// # Panics
    /// If the compiled-in tables are malformed.
    pub fn builtin() -> &'static Catalog {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Catalog::new(CONSTITUENTS, SHALLOWS).expect("built-in constituent tables should be valid")
        })
    }

    pub fn resolve_main(&self, name: &str) -> Option<&ConstituentDefinition> {
        self.mains.get(name).copied()
    }

    pub fn resolve_shallow(&self, name: &str) -> Option<&ShallowDefinition> {
        self.shallows.get(name).copied()
    }

    /// Look a name up in the main table, then the shallow table.
    pub fn resolve(&self, name: &str) -> Resolution<'_> {
        if let Some(def) = self.resolve_main(name) {
            Resolution::Main(def)
        } else if let Some(def) = self.resolve_shallow(name) {
            Resolution::Shallow(def)
        } else {
            Resolution::NotFound
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        !matches!(self.resolve(name), Resolution::NotFound)
    }

    pub fn constituent_count(&self) -> usize {
        self.mains.len()
    }

    pub fn shallow_count(&self) -> usize {
        self.shallows.len()
    }

    /// Every known name, main constituents first, each group sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut mains: Vec<_> = self.mains.keys().copied().collect();
        let mut shallows: Vec<_> = self.shallows.keys().copied().collect();
        mains.sort_unstable();
        shallows.sort_unstable();
        mains.extend(shallows);
        mains
    }

    fn check_parts(&self, def: &ShallowDefinition, root: &str, depth: usize) -> TidalResult<()> {
        if depth > MAX_SHALLOW_DEPTH {
            return Err(TidalError::malformed(
                root,
                format!("nesting deeper than {MAX_SHALLOW_DEPTH} levels"),
            ));
        }
        for part in def.parts {
            match self.resolve(part.name) {
                Resolution::Main(_) => {}
                Resolution::Shallow(inner) => self.check_parts(inner, root, depth + 1)?,
                Resolution::NotFound => {
                    return Err(TidalError::malformed(
                        root,
                        format!("part {} does not resolve", part.name),
                    ))
                }
            }
        }
        Ok(())
    }
}

fn check_name(name: &'static str, seen: &mut HashSet<&'static str>) -> TidalResult<()> {
    if name.is_empty() || name.len() >= MAX_NAME_LEN {
        return Err(TidalError::malformed(name, "name must be 1 to 31 bytes"));
    }
    if !seen.insert(name) {
        return Err(TidalError::malformed(name, "duplicate name"));
    }
    Ok(())
}
