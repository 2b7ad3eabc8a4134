pub mod alignment;
pub mod parallelism;
pub mod seq;
