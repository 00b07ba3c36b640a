//! # High and Low Water
//!
//! Scans a time range for turning points of the predicted curve. The range
//! is cut into windows, each predicted with one batched series call, and the
//! slope sign is carried from one window into the next so turning points on
//! a window boundary are not lost. Each window after the first starts one
//! sample early: every slope is taken between two samples of the same node
//! factor snapshot, so the small jump between snapshots never reads as a
//! turning point.
//!
//! A turning point is reported at the sample before the slope changes sign:
//! a falling slope after a rising one marks high water, and the reverse marks
//! low water.

use serde::{Deserialize, Serialize};

use crate::error::TidalResult;
use crate::predictor::TidePredictor;
use crate::TidalComponent;

/// Seconds covered by one batched prediction.
pub const DEFAULT_WINDOW_SECONDS: f64 = 3_600.0;
/// Spacing of the scanned samples.
pub const DEFAULT_RESOLUTION_SECONDS: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtremumKind {
    High,
    Low,
}

impl ExtremumKind {
    /// Single-letter tag used in text output.
    pub fn tag(self) -> &'static str {
        match self {
            ExtremumKind::High => "H",
            ExtremumKind::Low => "L",
        }
    }
}

/// Turning point of the tide curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Extremum {
    /// Seconds since the POSIX epoch.
    pub at: f64,
    pub height: f64,
    pub kind: ExtremumKind,
}

/// Scan settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScanOptions {
    pub window: f64,
    pub resolution: f64,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            window: DEFAULT_WINDOW_SECONDS,
            resolution: DEFAULT_RESOLUTION_SECONDS,
        }
    }
}

/// Turning points in `[start, end)`.
pub fn find_extrema(
    predictor: &TidePredictor<'_>,
    components: &[TidalComponent],
    start: f64,
    end: f64,
    latitude: f64,
    zone: f64,
    options: ScanOptions,
) -> TidalResult<Vec<Extremum>> {
    let resolution = options.resolution.max(f64::EPSILON);
    let per_window = ((options.window / resolution).round() as usize).max(2);

    let mut found = Vec::new();
    let mut previous: Option<(f64, f64)> = None;
    let mut rising: Option<bool> = None;

    let mut window_start = start;
    while window_start < end {
        let remaining = ((end - window_start) / resolution).ceil() as usize;
        let count = per_window.min(remaining.max(1));

        // after the first window, re-predict the previous sample under this
        // window's snapshot so no slope spans two snapshots
        let overlap = previous.take().is_some();
        let first_at = if overlap { window_start - resolution } else { window_start };
        let heights = predictor.predict_series(
            components,
            first_at,
            latitude,
            zone,
            count + usize::from(overlap),
            resolution,
        )?;

        for (i, height) in heights.into_iter().enumerate() {
            let at = first_at + i as f64 * resolution;
            if let Some((prev_at, prev_height)) = previous {
                let now_rising = height - prev_height >= 0.0;
                if let Some(was_rising) = rising {
                    if was_rising != now_rising {
                        found.push(Extremum {
                            at: prev_at,
                            height: prev_height,
                            kind: if was_rising {
                                ExtremumKind::High
                            } else {
                                ExtremumKind::Low
                            },
                        });
                    }
                }
                rising = Some(now_rising);
            }
            previous = Some((at, height));
        }

        window_start += count as f64 * resolution;
    }

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    const AT: f64 = 1_262_304_000.0;

    fn m2() -> Vec<TidalComponent> {
        vec![TidalComponent::new("M2", 1.0, 0.0)]
    }

    #[test]
    fn test_m2_has_two_highs_and_lows_per_day() {
        let predictor = TidePredictor::default();
        let options = ScanOptions {
            window: 3_600.0,
            resolution: 60.0,
        };
        let found = find_extrema(&predictor, &m2(), AT, AT + 86_400.0, 0.0, 0.0, options).unwrap();

        let highs = found.iter().filter(|e| e.kind == ExtremumKind::High).count();
        let lows = found.iter().filter(|e| e.kind == ExtremumKind::Low).count();
        assert!((1..=2).contains(&highs), "{highs} highs");
        assert!((1..=2).contains(&lows), "{lows} lows");
        assert!(highs + lows >= 3);

        // highs and lows alternate
        for pair in found.windows(2) {
            assert_ne!(pair[0].kind, pair[1].kind);
        }
        for e in &found {
            match e.kind {
                ExtremumKind::High => assert!(e.height > 0.9),
                ExtremumKind::Low => assert!(e.height < -0.9),
            }
        }
    }

    #[test]
    fn test_consecutive_highs_one_m2_period_apart() {
        let predictor = TidePredictor::default();
        let options = ScanOptions {
            window: 7_200.0,
            resolution: 10.0,
        };
        let found =
            find_extrema(&predictor, &m2(), AT, AT + 2.0 * 86_400.0, 0.0, 0.0, options).unwrap();
        let highs: Vec<f64> = found
            .iter()
            .filter(|e| e.kind == ExtremumKind::High)
            .map(|e| e.at)
            .collect();
        assert!(highs.len() >= 3);
        for pair in highs.windows(2) {
            let period = pair[1] - pair[0];
            assert!((period - 44_714.0).abs() < 30.0, "period {period}");
        }
    }

    #[test]
    fn test_empty_range() {
        let predictor = TidePredictor::default();
        let found = find_extrema(&predictor, &m2(), AT, AT, 0.0, 0.0, ScanOptions::default()).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_unknown_constituent_fails_scan() {
        let predictor = TidePredictor::default();
        let bad = vec![TidalComponent::new("ZZZZ", 1.0, 0.0)];
        assert!(find_extrema(&predictor, &bad, AT, AT + 600.0, 0.0, 0.0, ScanOptions::default()).is_err());
    }

    #[test]
    fn test_no_turning_points_on_window_boundaries() {
        // mixed tide whose crests and troughs fall on hour boundaries at
        // 2010-01-31T13:00Z and 2010-02-01T08:00Z
        let components = vec![
            TidalComponent::new("M2", 1.0, 0.0),
            TidalComponent::from_degrees("K1", 0.3, 40.0),
            TidalComponent::from_degrees("O1", 0.2, 10.0),
        ];
        let start = 1_264_896_000.0;
        let predictor = TidePredictor::default();
        let found = find_extrema(
            &predictor,
            &components,
            start,
            start + 3.0 * 86_400.0,
            45.0,
            0.0,
            ScanOptions::default(),
        )
        .unwrap();

        assert_eq!(found.len(), 12);
        for pair in found.windows(2) {
            assert_ne!(pair[0].kind, pair[1].kind);
            let gap = pair[1].at - pair[0].at;
            assert!(gap > 3_600.0, "turning points {} and {} only {gap}s apart", pair[0].at, pair[1].at);
        }
    }

    #[test]
    fn test_tags() {
        assert_eq!(ExtremumKind::High.tag(), "H");
        assert_eq!(ExtremumKind::Low.tag(), "L");
    }
}
