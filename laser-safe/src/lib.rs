pub mod beam;
pub mod grid;
pub mod parser;
pub mod process;
pub mod segment;
pub mod solver;
pub mod sweep;
