/// Random noise fill with solid border walls
pub mod initialization;
/// Circular obstacle stamping with skip-on-wall placement
pub mod obstacles;
/// Stage composition and generation parameters
pub mod pipeline;
/// Seeded random source shared by all stages
pub mod random;
/// Double-buffered majority-rule cellular automaton
pub mod smoothing;
