//! Business-rule constants for compatibility scoring.
//!
//! The weights and bonus values are operational policy. They live here as
//! named configuration so tests can reconstruct totals exactly; the defaults
//! are the production rubric.

use serde::{Deserialize, Serialize};

/// Relative weight of each sub-score in the combined total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub temporal: f64,
    pub geographic: f64,
    pub operational: f64,
}

/// Production weighting: temporal 40%, geographic 35%, operational 25%.
pub const COMPATIBILITY_WEIGHTS: ScoreWeights = ScoreWeights {
    temporal: 0.40,
    geographic: 0.35,
    operational: 0.25,
};

impl ScoreWeights {
    pub fn sum(&self) -> f64 {
        self.temporal + self.geographic + self.operational
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        COMPATIBILITY_WEIGHTS
    }
}

/// A qualifying gap window between a finished service and the new one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GapBand {
    pub from_hours: f64,
    pub to_hours: f64,
    pub bonus: i32,
}

impl GapBand {
    pub fn contains(&self, hours: f64) -> bool {
        hours >= self.from_hours && hours <= self.to_hours
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalRules {
    pub base: i32,
    pub weekday_bonus: i32,
    pub saturday_bonus: i32,
    pub sunday_bonus: i32,
    /// Checked in order; the first band containing the gap wins.
    pub preferred_gap: GapBand,
    pub follow_up_gap: GapBand,
    pub tight_gap: GapBand,
}

impl Default for TemporalRules {
    fn default() -> Self {
        Self {
            base: 30,
            weekday_bonus: 15,
            saturday_bonus: 10,
            sunday_bonus: 5,
            preferred_gap: GapBand {
                from_hours: 2.0,
                to_hours: 4.0,
                bonus: 30,
            },
            follow_up_gap: GapBand {
                from_hours: 4.0,
                to_hours: 8.0,
                bonus: 20,
            },
            tight_gap: GapBand {
                from_hours: 1.0,
                to_hours: 2.0,
                bonus: 10,
            },
        }
    }
}

/// Distance threshold with its bonus, exclusive upper bound in km.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceBand {
    pub under_km: u32,
    pub bonus: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeographicRules {
    pub base: i32,
    pub preferred_zone_origin_bonus: i32,
    pub preferred_zone_destination_bonus: i32,
    pub frequent_origin_bonus: i32,
    pub frequent_destination_bonus: i32,
    pub frequent_zone_bonus: i32,
    pub close_distance: DistanceBand,
    pub near_distance: DistanceBand,
    pub regional_distance: DistanceBand,
    pub far_penalty: i32,
}

impl Default for GeographicRules {
    fn default() -> Self {
        Self {
            base: 20,
            preferred_zone_origin_bonus: 25,
            preferred_zone_destination_bonus: 15,
            frequent_origin_bonus: 35,
            frequent_destination_bonus: 25,
            frequent_zone_bonus: 15,
            close_distance: DistanceBand {
                under_km: 30,
                bonus: 20,
            },
            near_distance: DistanceBand {
                under_km: 100,
                bonus: 10,
            },
            regional_distance: DistanceBand {
                under_km: 200,
                bonus: 5,
            },
            far_penalty: -5,
        }
    }
}

/// Minimum rating that unlocks a bonus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingBand {
    pub at_least: f64,
    pub bonus: i32,
}

/// Minimum completed-service count that unlocks a bonus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeBand {
    pub at_least: u32,
    pub bonus: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalRules {
    pub base: i32,
    pub security_experience_bonus: i32,
    pub armed_service_bonus: i32,
    pub vehicle_bonus: i32,
    pub relocation_vehicle_bonus: i32,
    /// Highest threshold first; the first band the rating reaches wins.
    pub rating_bands: [RatingBand; 3],
    /// Highest threshold first; the first band the count reaches wins.
    pub volume_bands: [VolumeBand; 3],
    pub certification_bonus: i32,
    pub certification_bonus_cap: i32,
    pub security_certification_bonus: i32,
}

impl Default for OperationalRules {
    fn default() -> Self {
        Self {
            base: 25,
            security_experience_bonus: 15,
            armed_service_bonus: 10,
            vehicle_bonus: 10,
            relocation_vehicle_bonus: 5,
            rating_bands: [
                RatingBand {
                    at_least: 4.5,
                    bonus: 20,
                },
                RatingBand {
                    at_least: 4.0,
                    bonus: 15,
                },
                RatingBand {
                    at_least: 3.5,
                    bonus: 10,
                },
            ],
            volume_bands: [
                VolumeBand {
                    at_least: 50,
                    bonus: 15,
                },
                VolumeBand {
                    at_least: 20,
                    bonus: 10,
                },
                VolumeBand {
                    at_least: 10,
                    bonus: 5,
                },
            ],
            certification_bonus: 2,
            certification_bonus_cap: 10,
            security_certification_bonus: 10,
        }
    }
}

/// Full scoring rubric handed to the engine at construction time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: ScoreWeights,
    pub temporal: TemporalRules,
    pub geographic: GeographicRules,
    pub operational: OperationalRules,
}
