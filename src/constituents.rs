//! # Main Constituent Table
//!
//! The 45 astronomical constituents of Foreman's tidal analysis tables:
//! Doodson numbers over `[t, s, h, p, np, pp]`, the constant phase
//! correction in cycles, and the satellites that modulate each one.
//!
//! Satellite columns are `(dp, dnp, dpp, phase, ratio, correction)` where the
//! correction code is 0 none, 1 diurnal latitude factor, 2 semidiurnal
//! latitude factor.

use crate::catalog::{ConstituentDefinition, SatelliteTerm};

const fn sat(dp: i32, dnp: i32, dpp: i32, phase: f64, ratio: f64, correction: i32) -> SatelliteTerm {
    SatelliteTerm::new(dp, dnp, dpp, phase, ratio, correction)
}

macro_rules! constituent {
    ($name:expr, $doodson:expr, $phase:expr, $satellites:expr $(,)?) => {
        ConstituentDefinition {
            name: $name,
            doodson: $doodson,
            phase: $phase,
            satellites: $satellites,
        }
    };
}

// shared satellite sets
const LUNAR_SEMIDIURNAL: &[SatelliteTerm] = &[
    sat(-1, 0, 0, 0.75, 0.0014, 2),
    sat(0, -1, 0, 0.50, 0.0373, 0),
    sat(1, 0, 0, 0.75, 0.0006, 2),
    sat(2, 0, 0, 0.00, 0.0002, 0),
];
const LUNAR_DIURNAL: &[SatelliteTerm] = &[
    sat(-1, 0, 0, 0.25, 0.0060, 1),
    sat(0, -1, 0, 0.00, 0.1885, 0),
    sat(1, 0, 0, 0.75, 0.0029, 1),
    sat(2, 0, 0, 0.50, 0.0064, 0),
];
const DECLINATIONAL_DIURNAL: &[SatelliteTerm] = &[
    sat(0, -1, 0, 0.50, 0.0046, 0),
    sat(0, 1, 0, 0.00, 0.1695, 0),
    sat(0, 2, 0, 0.50, 0.0040, 0),
];

pub static CONSTITUENTS: &[ConstituentDefinition] = &[
    // long period
    constituent!("Z0", [0, 0, 0, 0, 0, 0], 0.0, &[]),
    constituent!("SA", [0, 0, 1, 0, 0, -1], 0.0, &[]),
    constituent!("SSA", [0, 0, 2, 0, 0, 0], 0.0, &[]),
    constituent!("MSM", [0, 1, -2, 1, 0, 0], 0.0, &[]),
    constituent!(
        "MM",
        [0, 1, 0, -1, 0, 0],
        0.0,
        &[
            sat(0, -1, 0, 0.50, 0.0657, 0),
            sat(0, 1, 0, 0.50, 0.0649, 0),
            sat(2, 0, 0, 0.00, 0.0140, 0),
            sat(2, 1, 0, 0.00, 0.0089, 0),
        ],
    ),
    constituent!("MSF", [0, 2, -2, 0, 0, 0], 0.0, &[]),
    constituent!(
        "MF",
        [0, 2, 0, 0, 0, 0],
        0.0,
        &[
            sat(-2, 0, 0, 0.00, 0.0008, 0),
            sat(0, 1, 0, 0.00, 0.4143, 0),
            sat(0, 2, 0, 0.00, 0.0387, 0),
            sat(2, 0, 0, 0.00, 0.0011, 0),
        ],
    ),
    // diurnal
    constituent!("ALP1", [1, -4, 2, 1, 0, 0], -0.25, &[sat(0, -1, 0, 0.00, 0.2, 0)]),
    constituent!("2Q1", [1, -3, 0, 2, 0, 0], -0.25, &[sat(0, -1, 0, 0.00, 0.1887, 0)]),
    constituent!("SIG1", [1, -3, 2, 0, 0, 0], -0.25, &[sat(0, -1, 0, 0.00, 0.1882, 0)]),
    constituent!(
        "Q1",
        [1, -2, 0, 1, 0, 0],
        -0.25,
        &[
            sat(-2, -3, 0, 0.50, 0.0007, 0),
            sat(-1, -1, 0, 0.75, 0.0039, 1),
            sat(0, -1, 0, 0.00, 0.1884, 0),
            sat(2, 0, 0, 0.50, 0.0010, 0),
        ],
    ),
    constituent!("RHO1", [1, -2, 2, -1, 0, 0], -0.25, &[sat(0, -1, 0, 0.00, 0.1882, 0)]),
    constituent!("O1", [1, -1, 0, 0, 0, 0], -0.25, LUNAR_DIURNAL),
    constituent!("TAU1", [1, -1, 2, 0, 0, 0], -0.75, &[sat(0, 1, 0, 0.00, 0.2, 0)]),
    constituent!("BET1", [1, 0, -2, 1, 0, 0], -0.75, &[sat(0, -1, 0, 0.00, 0.2266, 0)]),
    constituent!(
        "NO1",
        [1, 0, 0, 1, 0, 0],
        -0.75,
        &[
            sat(0, -1, 0, 0.25, 0.0373, 1),
            sat(0, 1, 0, 0.00, 0.2, 0),
            sat(2, 0, 0, 0.50, 0.0048, 0),
        ],
    ),
    constituent!("CHI1", [1, 0, 2, -1, 0, 0], -0.75, &[sat(0, -1, 0, 0.50, 0.2, 0)]),
    constituent!("PI1", [1, 1, -3, 0, 0, 1], -0.25, &[sat(0, -1, 0, 0.50, 0.0046, 0)]),
    constituent!(
        "P1",
        [1, 1, -2, 0, 0, 0],
        -0.25,
        &[
            sat(0, -1, 0, 0.50, 0.0112, 0),
            sat(0, 0, 2, 0.50, 0.0004, 0),
            sat(1, 0, 0, 0.75, 0.0004, 1),
        ],
    ),
    constituent!("S1", [1, 1, -1, 0, 0, 1], -0.75, &[]),
    constituent!(
        "K1",
        [1, 1, 0, 0, 0, 0],
        -0.75,
        &[
            sat(-1, 0, 0, 0.75, 0.0002, 1),
            sat(0, -1, 0, 0.50, 0.0001, 0),
            sat(0, 1, 0, 0.00, 0.1356, 0),
            sat(0, 2, 0, 0.50, 0.0029, 0),
            sat(1, 0, 0, 0.25, 0.0001, 1),
        ],
    ),
    constituent!("PSI1", [1, 1, 1, 0, 0, -1], -0.75, &[]),
    constituent!("PHI1", [1, 1, 2, 0, 0, 0], -0.75, &[]),
    constituent!("THE1", [1, 2, -2, 1, 0, 0], -0.75, DECLINATIONAL_DIURNAL),
    constituent!(
        "J1",
        [1, 2, 0, -1, 0, 0],
        -0.75,
        &[
            sat(0, -1, 0, 0.50, 0.0046, 0),
            sat(0, 1, 0, 0.00, 0.1695, 0),
            sat(0, 2, 0, 0.50, 0.0040, 0),
            sat(2, 0, 0, 0.50, 0.0049, 1),
        ],
    ),
    constituent!(
        "OO1",
        [1, 3, 0, 0, 0, 0],
        -0.75,
        &[
            sat(-2, -1, 0, 0.50, 0.0037, 0),
            sat(0, 1, 0, 0.00, 0.6398, 0),
            sat(0, 2, 0, 0.00, 0.1342, 0),
            sat(0, 3, 0, 0.00, 0.0086, 0),
        ],
    ),
    constituent!(
        "UPS1",
        [1, 4, 0, -1, 0, 0],
        -0.75,
        &[
            sat(0, 1, 0, 0.00, 0.6398, 0),
            sat(0, 2, 0, 0.00, 0.1342, 0),
            sat(0, 3, 0, 0.00, 0.0086, 0),
        ],
    ),
    // semidiurnal
    constituent!("EPS2", [2, -3, 2, 1, 0, 0], 0.0, &[sat(0, -1, 0, 0.50, 0.0385, 0)]),
    constituent!("2N2", [2, -2, 0, 2, 0, 0], 0.0, LUNAR_SEMIDIURNAL),
    constituent!("MU2", [2, -2, 2, 0, 0, 0], 0.0, LUNAR_SEMIDIURNAL),
    constituent!(
        "N2",
        [2, -1, 0, 1, 0, 0],
        0.0,
        &[
            sat(-2, -2, 0, 0.50, 0.0006, 0),
            sat(-1, 0, 0, 0.25, 0.0006, 2),
            sat(0, -1, 0, 0.50, 0.0374, 0),
            sat(1, 0, 0, 0.75, 0.0004, 2),
        ],
    ),
    constituent!("NU2", [2, -1, 2, -1, 0, 0], 0.0, LUNAR_SEMIDIURNAL),
    constituent!(
        "GAM2",
        [2, 0, -2, 2, 0, 0],
        -0.5,
        &[
            sat(-2, -3, 0, 0.00, 0.0072, 0),
            sat(-2, -2, 0, 0.50, 0.1072, 0),
            sat(0, -1, 0, 0.50, 0.0373, 0),
        ],
    ),
    constituent!("H1", [2, 0, -1, 0, 0, 1], -0.5, &[]),
    constituent!(
        "M2",
        [2, 0, 0, 0, 0, 0],
        0.0,
        &[
            sat(-1, -1, 0, 0.75, 0.0005, 2),
            sat(-1, 0, 0, 0.75, 0.0014, 2),
            sat(0, -2, 0, 0.00, 0.0005, 0),
            sat(0, -1, 0, 0.50, 0.0373, 0),
            sat(1, -1, 0, 0.25, 0.0001, 2),
            sat(1, 0, 0, 0.75, 0.0006, 2),
            sat(2, 0, 0, 0.00, 0.0002, 0),
        ],
    ),
    constituent!("H2", [2, 0, 1, 0, 0, -1], 0.0, &[]),
    constituent!("DEL2", [2, 0, 2, 0, 0, 0], 0.0, &[sat(0, -1, 0, 0.50, 0.0373, 0)]),
    constituent!("LDA2", [2, 1, -2, 1, 0, 0], -0.5, &[sat(0, -1, 0, 0.50, 0.0373, 0)]),
    constituent!(
        "L2",
        [2, 1, 0, -1, 0, 0],
        -0.5,
        &[
            sat(0, -1, 0, 0.50, 0.0366, 0),
            sat(2, -1, 0, 0.00, 0.0047, 0),
            sat(2, 0, 0, 0.50, 0.2505, 0),
            sat(2, 1, 0, 0.00, 0.1102, 0),
            sat(2, 2, 0, 0.00, 0.0156, 0),
        ],
    ),
    constituent!("T2", [2, 2, -3, 0, 0, 1], 0.0, &[]),
    constituent!(
        "S2",
        [2, 2, -2, 0, 0, 0],
        0.0,
        &[
            sat(0, 0, 2, 0.00, 0.0022, 0),
            sat(1, 0, 0, 0.75, 0.0001, 2),
        ],
    ),
    constituent!("R2", [2, 2, -1, 0, 0, -1], -0.5, &[sat(0, 0, 2, 0.50, 0.2535, 0)]),
    constituent!(
        "K2",
        [2, 2, 0, 0, 0, 0],
        0.0,
        &[
            sat(-1, 0, 0, 0.75, 0.0024, 2),
            sat(-1, 1, 0, 0.75, 0.0004, 2),
            sat(0, -1, 0, 0.50, 0.0128, 0),
            sat(0, 1, 0, 0.00, 0.2980, 0),
            sat(0, 2, 0, 0.00, 0.0324, 0),
        ],
    ),
    constituent!(
        "ETA2",
        [2, 3, 0, -1, 0, 0],
        0.0,
        &[
            sat(0, -1, 0, 0.50, 0.0187, 0),
            sat(0, 1, 0, 0.00, 0.4145, 0),
            sat(0, 2, 0, 0.00, 0.0458, 0),
        ],
    ),
    // terdiurnal
    constituent!(
        "M3",
        [3, 0, 0, 0, 0, 0],
        -0.5,
        &[sat(0, -1, 0, 0.50, 0.0564, 0)],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_size() {
        assert_eq!(CONSTITUENTS.len(), 45);
    }

    #[test]
    fn test_species_grouping_is_ordered() {
        // the table is laid out long period → terdiurnal
        let species: Vec<i32> = CONSTITUENTS.iter().map(|c| c.doodson[0]).collect();
        assert!(species.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_satellites_only_touch_slow_arguments() {
        for c in CONSTITUENTS {
            for s in c.satellites {
                assert_eq!(&s.doodson[..3], &[0, 0, 0], "{} satellite alters t/s/h", c.name);
                assert!(s.ratio > 0.0 && s.ratio < 1.0, "{} satellite ratio {}", c.name, s.ratio);
            }
        }
    }
}
