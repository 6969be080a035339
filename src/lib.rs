//! Branching particle-shower cascade generator.
//!
//! [`core::CascadeEngine`] grows a tree of line segments one generation at a
//! time: every frontier segment splits into up to two children according to
//! its [`core::ParticleType`], each child is perturbed by a random opening
//! angle, the pair is twisted about its parent, and children below a minimum
//! energy are discarded. Every generation is retained for a renderer.
//!
//! With the `python` feature the engine is also exposed as a Python class.

pub mod core;
pub mod error;

#[cfg(feature = "python")]
mod python;
