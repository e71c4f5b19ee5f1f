//! Frontier containers. [`Stack`] and [`Queue`] hold pending nodes for the
//! uninformed engines; [`PriorityOpenList`] supports decrease-key for the
//! cost-ordered ones.

mod open_list;
mod priority_open_list;
mod queue;
mod stack;

pub use open_list::OpenList;
pub use priority_open_list::{PriorityOpenList, UpdateOutcome};
pub use queue::Queue;
pub use stack::Stack;
