//! Rhythm-tap puzzle: a drifting pulse, a calm zone, and a single tap
//! graded by distance from the zone center.

use rand::Rng;
use std::f32::consts::TAU;

/// Target band on the 0..100 track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseZone {
    pub start: f32,
    pub end: f32,
}

impl PulseZone {
    #[must_use]
    pub fn center(self) -> f32 {
        (self.start + self.end) / 2.0
    }

    #[must_use]
    pub fn spread(self) -> f32 {
        self.end - self.start
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulseResult {
    Perfect,
    Great,
    Good,
    Miss,
}

impl PulseResult {
    #[must_use]
    pub const fn score_delta(self) -> i32 {
        match self {
            Self::Perfect => 140,
            Self::Great => 120,
            Self::Good => 100,
            Self::Miss => 0,
        }
    }

    #[must_use]
    pub const fn note(self) -> &'static str {
        match self {
            Self::Perfect => "Pulse aligned",
            Self::Great => "Harmonic timing",
            Self::Good => "Steady breath",
            Self::Miss => "Outside the calm",
        }
    }

    #[must_use]
    pub const fn is_success(self) -> bool {
        !matches!(self, Self::Miss)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect",
            Self::Great => "Great",
            Self::Good => "Good",
            Self::Miss => "Miss",
        }
    }
}

/// Zone of width 10..16 centered on the track midpoint.
pub fn generate_zone(rng: &mut impl Rng) -> PulseZone {
    let width = 10.0 + rng.gen_range(0.0..6.0f32);
    let start = 50.0 - width / 2.0;
    PulseZone {
        start,
        end: start + width,
    }
}

/// Sweep speed in cycles per frame-step. Practice runs drift slower.
pub fn generate_speed(practice: bool, rng: &mut impl Rng) -> f32 {
    if practice {
        0.04 + rng.gen_range(0.0..0.04f32)
    } else {
        0.12 + rng.gen_range(0.0..0.1f32)
    }
}

/// Position on the track for a phase angle, oscillating across 0..100.
#[must_use]
pub fn pulse_position(phase: f32) -> f32 {
    50.0 + 50.0 * phase.sin()
}

/// Advance the phase by one animation step, wrapping at a full cycle.
#[must_use]
pub fn advance_phase(phase: f32, speed: f32) -> f32 {
    (phase + speed * TAU / 60.0) % TAU
}

/// Grade a tap at `position` against the zone.
#[must_use]
pub fn evaluate(zone: PulseZone, position: f32) -> PulseResult {
    let distance = (position - zone.center()).abs();
    let spread = zone.spread();
    if distance <= spread * 0.15 {
        PulseResult::Perfect
    } else if distance <= spread * 0.3 {
        PulseResult::Great
    } else if distance <= spread / 2.0 {
        PulseResult::Good
    } else {
        PulseResult::Miss
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn zone_stays_centered_and_bounded() {
        let mut rng = ChaCha20Rng::seed_from_u64(8);
        for _ in 0..100 {
            let zone = generate_zone(&mut rng);
            assert!((zone.center() - 50.0).abs() < 0.001);
            assert!(zone.spread() >= 10.0 && zone.spread() <= 16.0);
        }
    }

    #[test]
    fn grading_tightens_toward_the_center() {
        let zone = PulseZone { start: 44.0, end: 56.0 };
        assert_eq!(evaluate(zone, 50.0), PulseResult::Perfect);
        assert_eq!(evaluate(zone, 52.5), PulseResult::Great);
        assert_eq!(evaluate(zone, 55.0), PulseResult::Good);
        assert_eq!(evaluate(zone, 60.0), PulseResult::Miss);
    }

    #[test]
    fn practice_speed_is_slower() {
        let mut rng = ChaCha20Rng::seed_from_u64(4);
        for _ in 0..50 {
            assert!(generate_speed(true, &mut rng) < 0.09);
            assert!(generate_speed(false, &mut rng) >= 0.12);
        }
    }
}
