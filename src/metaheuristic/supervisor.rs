use std::ops::{Add, AddAssign};
use std::time::Duration;

pub trait Supervisor<MessageType: Message> {
    /// Drains all pending messages and writes out the aggregated records.
    fn aggregate_receive(&mut self);
}

pub trait Message {
    fn iteration(&self) -> usize;
    fn get_info(&self) -> MessageInfo;
}

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct MessageInfo {
    pub evaluations: usize,
    pub cpu_time: Duration,
    pub n_improvements: usize,
    pub changes: usize,
    pub phase: usize,
    /// Sum over all tour costs reported.
    pub distance: f64,
    /// Number of tour costs that went into distance.
    pub tours: usize,
    pub best_distance: Option<f64>,
}

impl MessageInfo {
    pub fn new(
        evaluations: usize,
        n_improvements: usize,
        changes: usize,
        phase: usize,
        cpu_time: Duration,
        distance: Option<f64>,
    ) -> Self {
        Self {
            evaluations,
            n_improvements,
            changes,
            phase,
            cpu_time,
            distance: distance.unwrap_or(0.0),
            tours: if distance.is_some() { 1 } else { 0 },
            best_distance: distance,
        }
    }

    pub fn mean_distance(&self) -> Option<f64> {
        if self.tours == 0 {
            None
        } else {
            Some(self.distance / self.tours as f64)
        }
    }
}

fn min_distance(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

impl Add for MessageInfo {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            evaluations: self.evaluations + other.evaluations,
            n_improvements: self.n_improvements + other.n_improvements,
            changes: self.changes + other.changes,
            phase: other.phase,
            cpu_time: self.cpu_time + other.cpu_time,
            distance: self.distance + other.distance,
            tours: self.tours + other.tours,
            best_distance: min_distance(self.best_distance, other.best_distance),
        }
    }
}

impl AddAssign for MessageInfo {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}
