pub mod assistant;
pub mod bills;
