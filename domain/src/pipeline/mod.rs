//! Generation pipeline: requests, phases and terminal outcomes.

pub mod entities;
pub mod value_objects;
