use std::fmt::{Display, Formatter};

pub const DEFAULT_THRESHOLD_KM: f64 = 0.03;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProximityOutcome {
    Fired,
    NoAction,
}

/// Tests whether the player is close enough to a target to unlock its quiz.
///
/// The trigger is a plain threshold test, firing once per approach is up to the caller.
#[derive(Clone, Copy, Debug)]
pub struct ProximityTrigger {
    threshold_km: f64,
}

impl ProximityTrigger {
    pub fn new(threshold_km: f64) -> Self {
        ProximityTrigger { threshold_km }
    }

    pub fn threshold_km(&self) -> f64 {
        self.threshold_km
    }

    pub fn evaluate(&self, distance_km: f64) -> ProximityOutcome {
        if distance_km <= self.threshold_km {
            ProximityOutcome::Fired
        } else {
            ProximityOutcome::NoAction
        }
    }
}

impl Default for ProximityTrigger {
    fn default() -> Self {
        ProximityTrigger::new(DEFAULT_THRESHOLD_KM)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DistanceTrend {
    Approaching,
    Retreating,
    Unchanged,
    Unknown,
}

impl DistanceTrend {
    pub fn between(current_km: f64, previous_km: Option<f64>) -> Self {
        match previous_km {
            None => DistanceTrend::Unknown,
            Some(previous) if current_km < previous => DistanceTrend::Approaching,
            Some(previous) if current_km > previous => DistanceTrend::Retreating,
            Some(_) => DistanceTrend::Unchanged,
        }
    }
}

impl Display for DistanceTrend {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            DistanceTrend::Approaching => "getting closer",
            DistanceTrend::Retreating => "moving away",
            DistanceTrend::Unchanged => "same distance",
            DistanceTrend::Unknown => "-",
        };
        write!(f, "{}", text)
    }
}
