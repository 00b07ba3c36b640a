//! # Shallow Water Combination
//!
//! Factors of a compound constituent from the factors of its parts:
//!
//! | Factor | Combination |
//! |--------|-------------|
//! | `v`, `u` | `Σ c_i · x_i`, reduced to cycles |
//! | `speed` | `Σ c_i · speed_i` |
//! | `f` | `Π f_i ^ c_i` |
//!
//! A part with coefficient 1 reproduces its factors unchanged; a part with
//! coefficient -1 contributes `1 / f`, `-u` and `-v`. The exponent of `f` is
//! the signed coefficient, not `|c_i|`: a negative part divides.

use tracing::trace;

use crate::astronomical::{leftover, AstronomicalArguments};
use crate::catalog::{Catalog, Resolution, ShallowDefinition, MAX_SHALLOW_DEPTH};
use crate::error::{TidalError, TidalResult};
use crate::factors::NodeFactors;

/// Resolve and combine the parts of a shallow water constituent.
///
/// Each part is looked up as a main constituent first and a shallow one
/// second. An unresolvable part fails the whole combination.
pub fn combine(
    catalog: &Catalog,
    def: &ShallowDefinition,
    astro: &AstronomicalArguments,
) -> TidalResult<NodeFactors> {
    combine_at_depth(catalog, def, astro, 1)
}

fn combine_at_depth(
    catalog: &Catalog,
    def: &ShallowDefinition,
    astro: &AstronomicalArguments,
    depth: usize,
) -> TidalResult<NodeFactors> {
    if depth > MAX_SHALLOW_DEPTH {
        return Err(TidalError::malformed(
            def.name,
            format!("nesting deeper than {MAX_SHALLOW_DEPTH} levels"),
        ));
    }

    let mut resolved = Vec::with_capacity(def.parts.len());
    for part in def.parts {
        let factors = match catalog.resolve(part.name) {
            Resolution::Main(main) => NodeFactors::from_constituent(main, astro),
            Resolution::Shallow(inner) => combine_at_depth(catalog, inner, astro, depth + 1)?,
            Resolution::NotFound => return Err(TidalError::unknown(part.name)),
        };
        resolved.push((factors, part.coefficient));
    }

    let combined = combine_parts(&resolved);
    trace!(name = def.name, depth, ?combined, "shallow water factors");
    Ok(combined)
}

/// Combine already resolved `(factors, coefficient)` pairs.
pub fn combine_parts(parts: &[(NodeFactors, f64)]) -> NodeFactors {
    let mut v = 0.0;
    let mut u = 0.0;
    let mut f = 1.0;
    let mut speed = 0.0;

    for (factors, coefficient) in parts {
        v += coefficient * factors.v;
        u += coefficient * factors.u;
        f *= factors.f.powf(*coefficient);
        speed += coefficient * factors.speed;
    }

    NodeFactors {
        v: leftover(v),
        f,
        u: leftover(u),
        speed,
    }
}
