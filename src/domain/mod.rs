// Domain layer - Models and pure transformations
pub mod error;
pub mod gap_fill;
pub mod lttb;
pub mod normalize;
pub mod power;
pub mod sampling;
pub mod station;
pub mod statistics;
pub mod time_range;
