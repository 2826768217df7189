//! Path-finding algorithms over the graph's link structure

pub mod astar;

pub use astar::{astar, astar_with};
