#![allow(missing_docs)]

//! Cascade engine core: segment types, parameters, geometry and the
//! generation-by-generation branching engine.

pub mod engine;
pub mod generation;
pub mod geometry;
pub mod params;
pub mod random;
pub mod segment;

pub use engine::CascadeEngine;
pub use generation::{Generation, GenerationColumns};
pub use params::{SeedParams, StepParams};
pub use random::{ConstantSource, RandomSource};
pub use segment::{ParticleType, Segment};
