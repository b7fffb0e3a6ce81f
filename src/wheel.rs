use std::f64::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_WEIGHT, WHEEL_START_ANGLE};
use crate::error::SpinError;

/// One selectable chore on the wheel. Weight controls both selection
/// probability and the angular size of the slice.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Candidate {
    pub id: String,
    pub label: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

pub(crate) fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

impl Candidate {
    pub fn new(id: impl Into<String>, label: impl Into<String>, weight: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            weight,
        }
    }

    /// Weight as actually used: non-positive or non-finite values fall
    /// back to the default so a misconfigured chore still gets a slice.
    pub fn effective_weight(&self) -> f64 {
        if self.weight.is_finite() && self.weight > 0.0 {
            self.weight
        } else {
            DEFAULT_WEIGHT
        }
    }
}

/// One slice of the wheel: `[start, end)` in radians, clockwise from the
/// 12-o'clock reference.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelArc {
    pub candidate: Candidate,
    pub start: f64,
    pub end: f64,
}

/// An ordered partition of the circle, one arc per candidate in list
/// order. Recomputed whenever the candidate set changes; never persisted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct WheelLayout {
    pub arcs: Vec<WheelArc>,
    pub total_weight: f64,
}

impl WheelLayout {
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Maps an arbitrary angle (any sign, any winding) to the candidate
    /// whose arc contains it. Returns `None` only for an empty layout.
    pub fn resolve_angle(&self, angle: f64) -> Option<&Candidate> {
        let last = self.arcs.last()?;
        let rel = (angle - WHEEL_START_ANGLE).rem_euclid(TAU);
        for arc in &self.arcs {
            if rel < arc.end - WHEEL_START_ANGLE {
                return Some(&arc.candidate);
            }
        }
        // Floating-point drift can leave `rel` at exactly TAU.
        Some(&last.candidate)
    }
}

/// Builds the weight-proportional slice layout for the given candidates,
/// in candidate order. An empty input yields an empty layout so the UI
/// can render its "no chores" state.
pub fn build_layout(candidates: &[Candidate]) -> WheelLayout {
    let total: f64 = candidates.iter().map(Candidate::effective_weight).sum();
    let mut arcs = Vec::with_capacity(candidates.len());
    let mut start = WHEEL_START_ANGLE;
    for candidate in candidates {
        let end = start + (candidate.effective_weight() / total) * TAU;
        arcs.push(WheelArc {
            candidate: candidate.clone(),
            start,
            end,
        });
        start = end;
    }
    WheelLayout {
        arcs,
        total_weight: total,
    }
}

/// Draws one candidate with probability proportional to its effective
/// weight, walking the cumulative distribution in the same order
/// `build_layout` lays out the slices.
pub fn draw_random(candidates: &[Candidate]) -> Result<&Candidate, SpinError> {
    if candidates.is_empty() {
        return Err(SpinError::InvalidArgument("empty candidate set"));
    }
    let total: f64 = candidates.iter().map(Candidate::effective_weight).sum();
    let mut remainder = rand::thread_rng().gen_range(0.0..total);
    for candidate in candidates {
        remainder -= candidate.effective_weight();
        if remainder <= 0.0 {
            return Ok(candidate);
        }
    }
    Ok(&candidates[candidates.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn two_candidates() -> Vec<Candidate> {
        vec![
            Candidate::new("A", "Dishes", 1.0),
            Candidate::new("B", "Laundry", 3.0),
        ]
    }

    #[test]
    fn test_draw_random_empty_is_invalid_argument() {
        assert_eq!(
            draw_random(&[]),
            Err(SpinError::InvalidArgument("empty candidate set"))
        );
    }

    #[test]
    fn test_build_layout_empty() {
        let layout = build_layout(&[]);
        assert!(layout.is_empty());
        assert_eq!(layout.resolve_angle(1.0), None);
    }

    #[test]
    fn test_single_candidate_spans_full_circle() {
        let candidates = vec![Candidate::new("A", "Dishes", 1.0)];
        let layout = build_layout(&candidates);
        assert_eq!(layout.arcs.len(), 1);
        assert!((layout.arcs[0].end - layout.arcs[0].start - TAU).abs() < 1e-9);
        for angle in [-7.3, 0.0, 1.0, PI, 100.0] {
            assert_eq!(layout.resolve_angle(angle).unwrap().id, "A");
        }
        for _ in 0..50 {
            assert_eq!(draw_random(&candidates).unwrap().id, "A");
        }
    }

    #[test]
    fn test_layout_widths_follow_weights() {
        let layout = build_layout(&two_candidates());
        let a = &layout.arcs[0];
        let b = &layout.arcs[1];
        assert!((a.start - -FRAC_PI_2).abs() < 1e-9);
        assert!((a.end - a.start - FRAC_PI_2).abs() < 1e-9);
        assert!(b.start.abs() < 1e-9);
        assert!((b.end - b.start - 3.0 * FRAC_PI_2).abs() < 1e-9);
        assert!((b.end - 3.0 * FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn test_weight_defaulting() {
        let candidates = vec![
            Candidate::new("zero", "Zero", 0.0),
            Candidate::new("neg", "Negative", -2.0),
            Candidate::new("nan", "NaN", f64::NAN),
        ];
        for c in &candidates {
            assert_eq!(c.effective_weight(), 1.0);
        }
        let layout = build_layout(&candidates);
        for arc in &layout.arcs {
            assert!((arc.end - arc.start - TAU / 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_missing_weight_deserializes_to_default() {
        let candidate: Candidate =
            serde_json::from_str(r#"{"id":"x","label":"Sweep"}"#).unwrap();
        assert_eq!(candidate.weight, 1.0);
    }

    #[test]
    fn test_resolve_agrees_with_cumulative_scan() {
        let candidates = vec![
            Candidate::new("A", "a", 0.5),
            Candidate::new("B", "b", 2.0),
            Candidate::new("C", "c", 1.0),
            Candidate::new("D", "d", 4.5),
        ];
        let layout = build_layout(&candidates);
        let total: f64 = candidates.iter().map(Candidate::effective_weight).sum();

        let mut steps = 0;
        let mut angle = -3.0 * TAU;
        while angle < 3.0 * TAU {
            let resolved = layout.resolve_angle(angle).unwrap();

            // Hand-computed scan over cumulative weight fractions.
            let rel = (angle - WHEEL_START_ANGLE).rem_euclid(TAU);
            let mut cumulative = 0.0;
            let mut expected = &candidates[candidates.len() - 1];
            for c in &candidates {
                cumulative += c.effective_weight() / total * TAU;
                if rel < cumulative {
                    expected = c;
                    break;
                }
            }
            assert_eq!(resolved.id, expected.id, "angle {}", angle);

            // Winding-number independence.
            assert_eq!(
                layout.resolve_angle(angle + TAU).unwrap().id,
                resolved.id
            );
            assert_eq!(
                layout.resolve_angle(angle - 2.0 * TAU).unwrap().id,
                resolved.id
            );

            angle += 0.0137;
            steps += 1;
        }
        assert!(steps > 1000);
    }

    #[test]
    fn test_draw_frequencies_track_weights() {
        let candidates = two_candidates();
        let trials = 20_000;
        let mut b_hits = 0;
        for _ in 0..trials {
            if draw_random(&candidates).unwrap().id == "B" {
                b_hits += 1;
            }
        }
        // Expected 75%; 20k trials put the standard error near 0.3%.
        let fraction = b_hits as f64 / trials as f64;
        assert!(
            (0.72..=0.78).contains(&fraction),
            "B selected {:.3} of the time",
            fraction
        );
    }
}
