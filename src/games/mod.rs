//! Rule implementations.

pub mod straight_pool;
