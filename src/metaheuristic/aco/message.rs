use crate::metaheuristic::supervisor;
use crate::metaheuristic::supervisor::MessageInfo;

use std::time::Duration;

pub const CONSTRUCTION_PHASE: usize = 0;
pub const UPDATE_PHASE: usize = 1;

#[derive(Debug)]
pub struct Message {
    pub ant_id: usize,
    pub iteration: usize,
    pub evaluations: usize,
    pub cpu_time: Duration,
    pub n_improvements: usize,
    pub changes: usize,
    pub phase: usize,
    pub tour_cost: Option<f64>,
}

impl Message {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ant_id: usize,
        iteration: usize,
        evaluations: usize,
        n_improvements: usize,
        changes: usize,
        phase: usize,
        cpu_time: Duration,
        tour_cost: Option<f64>,
    ) -> Self {
        Self {
            ant_id,
            iteration,
            evaluations,
            n_improvements,
            changes,
            phase,
            cpu_time,
            tour_cost,
        }
    }

    pub fn id(&self) -> usize {
        self.ant_id
    }
}

impl supervisor::Message for Message {
    fn iteration(&self) -> usize {
        self.iteration
    }

    fn get_info(&self) -> MessageInfo {
        MessageInfo::new(
            self.evaluations,
            self.n_improvements,
            self.changes,
            self.phase,
            self.cpu_time,
            self.tour_cost,
        )
    }
}
