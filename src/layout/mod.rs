//! Region layout building blocks: shape growth, parent planning, docking
//! and densification of the sparse placement.

pub mod assembly;
pub mod connectivity;
pub mod constants;
pub mod coordinates;
pub mod docking;
pub mod global_map;
pub mod shape;

pub use assembly::assemble;
pub use connectivity::{ParentTable, plan_parents};
pub use coordinates::{Cell, Label, Point};
pub use docking::dock_shape;
pub use global_map::{Bounds, GlobalMap};
pub use shape::{Shape, grow_shape};
