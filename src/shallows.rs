//! # Shallow Water Constituent Table
//!
//! 101 compound constituents generated by non-linear interaction of the main
//! constituents. Each is a list of `(part, coefficient)` pairs; a part names a
//! main constituent or, for the higher harmonics of M2, another shallow
//! constituent.

use crate::catalog::{ShallowDefinition, ShallowPart};

macro_rules! shallow {
    ($name:expr, [$(($part:expr, $coefficient:expr)),+ $(,)?]) => {
        ShallowDefinition {
            name: $name,
            parts: &[$(ShallowPart {
                name: $part,
                coefficient: $coefficient,
            }),+],
        }
    };
}

pub static SHALLOWS: &[ShallowDefinition] = &[
    // diurnal
    shallow!("SO1", [("S2", 1.0), ("O1", -1.0)]),
    shallow!("MP1", [("M2", 1.0), ("P1", -1.0)]),
    shallow!("KQ1", [("K2", 1.0), ("Q1", -1.0)]),
    // semidiurnal
    shallow!("OQ2", [("O1", 1.0), ("Q1", 1.0)]),
    shallow!("MNS2", [("M2", 1.0), ("N2", 1.0), ("S2", -1.0)]),
    shallow!("MNUS2", [("M2", 1.0), ("NU2", 1.0), ("S2", -1.0)]),
    shallow!("MKS2", [("M2", 1.0), ("K2", 1.0), ("S2", -1.0)]),
    shallow!("MSN2", [("M2", 1.0), ("S2", 1.0), ("N2", -1.0)]),
    shallow!("2MS2", [("M2", 2.0), ("S2", -1.0)]),
    shallow!("2MK2", [("M2", 2.0), ("K2", -1.0)]),
    shallow!("2MN2", [("M2", 2.0), ("N2", -1.0)]),
    shallow!("2SM2", [("S2", 2.0), ("M2", -1.0)]),
    shallow!("2NS2", [("N2", 2.0), ("S2", -1.0)]),
    shallow!("SKM2", [("S2", 1.0), ("K2", 1.0), ("M2", -1.0)]),
    shallow!("NKM2", [("N2", 1.0), ("K2", 1.0), ("M2", -1.0)]),
    shallow!("MSK2", [("M2", 1.0), ("S2", 1.0), ("K2", -1.0)]),
    shallow!("OP2", [("O1", 1.0), ("P1", 1.0)]),
    shallow!("3M2S2", [("M2", 3.0), ("S2", -2.0)]),
    shallow!("2SK2", [("S2", 2.0), ("K2", -1.0)]),
    // terdiurnal
    shallow!("MO3", [("M2", 1.0), ("O1", 1.0)]),
    shallow!("SO3", [("S2", 1.0), ("O1", 1.0)]),
    shallow!("MK3", [("M2", 1.0), ("K1", 1.0)]),
    shallow!("SK3", [("S2", 1.0), ("K1", 1.0)]),
    shallow!("2MK3", [("M2", 2.0), ("K1", -1.0)]),
    shallow!("2MQ3", [("M2", 2.0), ("Q1", -1.0)]),
    shallow!("2MP3", [("M2", 2.0), ("P1", -1.0)]),
    shallow!("NO3", [("N2", 1.0), ("O1", 1.0)]),
    shallow!("NK3", [("N2", 1.0), ("K1", 1.0)]),
    shallow!("MQ3", [("M2", 1.0), ("Q1", 1.0)]),
    shallow!("SP3", [("S2", 1.0), ("P1", 1.0)]),
    shallow!("2SO3", [("S2", 2.0), ("O1", -1.0)]),
    // quarter diurnal
    shallow!("MN4", [("M2", 1.0), ("N2", 1.0)]),
    shallow!("M4", [("M2", 2.0)]),
    shallow!("SN4", [("S2", 1.0), ("N2", 1.0)]),
    shallow!("MS4", [("M2", 1.0), ("S2", 1.0)]),
    shallow!("MK4", [("M2", 1.0), ("K2", 1.0)]),
    shallow!("S4", [("S2", 2.0)]),
    shallow!("SK4", [("S2", 1.0), ("K2", 1.0)]),
    shallow!("N4", [("N2", 2.0)]),
    shallow!("ML4", [("M2", 1.0), ("L2", 1.0)]),
    shallow!("MT4", [("M2", 1.0), ("T2", 1.0)]),
    shallow!("3MS4", [("M2", 3.0), ("S2", -1.0)]),
    shallow!("3MK4", [("M2", 3.0), ("K2", -1.0)]),
    shallow!("3MN4", [("M2", 3.0), ("N2", -1.0)]),
    shallow!("MNU4", [("M2", 1.0), ("NU2", 1.0)]),
    shallow!("2MSK4", [("M2", 2.0), ("S2", 1.0), ("K2", -1.0)]),
    shallow!("2MKS4", [("M2", 2.0), ("K2", 1.0), ("S2", -1.0)]),
    shallow!("NK4", [("N2", 1.0), ("K2", 1.0)]),
    shallow!("2SMK4", [("S2", 2.0), ("M2", 1.0), ("K2", -1.0)]),
    shallow!("2MNS4", [("M2", 2.0), ("N2", 1.0), ("S2", -1.0)]),
    shallow!("SL4", [("S2", 1.0), ("L2", 1.0)]),
    shallow!("2MLS4", [("M2", 2.0), ("L2", 1.0), ("S2", -1.0)]),
    // fifth diurnal
    shallow!("2MK5", [("M2", 2.0), ("K1", 1.0)]),
    shallow!("2SK5", [("S2", 2.0), ("K1", 1.0)]),
    shallow!("MNO5", [("M2", 1.0), ("N2", 1.0), ("O1", 1.0)]),
    shallow!("2MO5", [("M2", 2.0), ("O1", 1.0)]),
    shallow!("3MO5", [("M2", 3.0), ("O1", -1.0)]),
    shallow!("3MK5", [("M2", 3.0), ("K1", -1.0)]),
    shallow!("MSO5", [("M2", 1.0), ("S2", 1.0), ("O1", 1.0)]),
    shallow!("MSK5", [("M2", 1.0), ("S2", 1.0), ("K1", 1.0)]),
    shallow!("2MP5", [("M2", 2.0), ("P1", 1.0)]),
    shallow!("3MP5", [("M2", 3.0), ("P1", -1.0)]),
    shallow!("MNK5", [("M2", 1.0), ("N2", 1.0), ("K1", 1.0)]),
    shallow!("NSK5", [("N2", 1.0), ("S2", 1.0), ("K1", 1.0)]),
    // sixth diurnal
    shallow!("2MN6", [("M2", 2.0), ("N2", 1.0)]),
    shallow!("M6", [("M2", 3.0)]),
    shallow!("2MS6", [("M2", 2.0), ("S2", 1.0)]),
    shallow!("2MK6", [("M2", 2.0), ("K2", 1.0)]),
    shallow!("2SM6", [("S2", 2.0), ("M2", 1.0)]),
    shallow!("MSK6", [("M2", 1.0), ("S2", 1.0), ("K2", 1.0)]),
    shallow!("MSN6", [("M2", 1.0), ("S2", 1.0), ("N2", 1.0)]),
    shallow!("2NM6", [("N2", 2.0), ("M2", 1.0)]),
    shallow!("MNK6", [("M2", 1.0), ("N2", 1.0), ("K2", 1.0)]),
    shallow!("S6", [("S2", 3.0)]),
    shallow!("2SN6", [("S2", 2.0), ("N2", 1.0)]),
    shallow!("2ML6", [("M2", 2.0), ("L2", 1.0)]),
    shallow!("3MNS6", [("M2", 3.0), ("N2", 1.0), ("S2", -1.0)]),
    shallow!("4MS6", [("M2", 4.0), ("S2", -1.0)]),
    shallow!("4MK6", [("M2", 4.0), ("K2", -1.0)]),
    shallow!("2MNU6", [("M2", 2.0), ("NU2", 1.0)]),
    // seventh diurnal
    shallow!("3MK7", [("M2", 3.0), ("K1", 1.0)]),
    shallow!("3MO7", [("M2", 3.0), ("O1", 1.0)]),
    shallow!("2MNK7", [("M2", 2.0), ("N2", 1.0), ("K1", 1.0)]),
    shallow!("2MSK7", [("M2", 2.0), ("S2", 1.0), ("K1", 1.0)]),
    shallow!("2MSO7", [("M2", 2.0), ("S2", 1.0), ("O1", 1.0)]),
    shallow!("4MK7", [("M2", 4.0), ("K1", -1.0)]),
    // eighth diurnal
    shallow!("M8", [("M2", 4.0)]),
    shallow!("3MN8", [("M6", 1.0), ("N2", 1.0)]),
    shallow!("3MS8", [("M6", 1.0), ("S2", 1.0)]),
    shallow!("3MK8", [("M2", 3.0), ("K2", 1.0)]),
    shallow!("2MSN8", [("M2", 2.0), ("S2", 1.0), ("N2", 1.0)]),
    shallow!("2(MS)8", [("M2", 2.0), ("S2", 2.0)]),
    shallow!("2MSK8", [("M2", 2.0), ("S2", 1.0), ("K2", 1.0)]),
    // ninth diurnal
    shallow!("4MK9", [("M2", 4.0), ("K1", 1.0)]),
    shallow!("3MNK9", [("M2", 3.0), ("N2", 1.0), ("K1", 1.0)]),
    shallow!("3MSK9", [("M2", 3.0), ("S2", 1.0), ("K1", 1.0)]),
    // tenth diurnal
    shallow!("M10", [("M8", 1.0), ("M2", 1.0)]),
    shallow!("4MN10", [("M8", 1.0), ("N2", 1.0)]),
    shallow!("4MS10", [("M8", 1.0), ("S2", 1.0)]),
    // eleventh diurnal
    shallow!("4MSK11", [("M2", 4.0), ("S2", 1.0), ("K1", 1.0)]),
    // twelfth diurnal
    shallow!("M12", [("M6", 2.0)]),
];
