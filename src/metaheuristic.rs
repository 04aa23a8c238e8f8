pub mod aco;
mod nearest_neighbor;
mod solution;
mod supervisor;

pub use aco::{Aco, BestTour};
pub use nearest_neighbor::nearest_neighbor_tour;
pub use solution::{solution_length, Solution};
pub use supervisor::{Message, MessageInfo, Supervisor};

pub trait Metaheuristic {
    type Error;

    /// Performs a single iteration of the search.
    /// Returns the new best solution, if this iteration improved it, or None otherwise.
    fn single_iteration(&mut self) -> Result<Option<&Solution<usize>>, Self::Error>;

    /// Returns true once all iterations are done.
    fn finished(&self) -> bool;
}
