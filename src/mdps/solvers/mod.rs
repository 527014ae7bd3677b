pub mod bellman;
pub mod prioritized_sweeping;
pub mod residual_queue;
pub mod value_iteration;
pub mod value_table;

pub use bellman::*;
pub use prioritized_sweeping::Predecessors;
pub use residual_queue::*;
pub use value_iteration::*;
pub use value_table::*;
