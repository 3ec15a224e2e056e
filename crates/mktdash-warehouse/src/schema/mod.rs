pub mod econ;
pub mod market;
