use crate::core::generation::{Generation, GenerationColumns};
use crate::core::geometry::{perpendicular, rotate_around_pivot, DEG_TO_RAD};
use crate::core::params::{validate_seed, SeedParams, StepParams};
use crate::core::random::RandomSource;
use crate::core::segment::{ParticleType, Segment};
use crate::error::{Error, Result};
use glam::DVec3;
use log::{debug, trace, warn};
use rand::{rng, rngs::StdRng, Rng, SeedableRng};

/// Fraction of an electron or positron's energy handed to its photon child.
const LEPTON_SPLIT: f64 = 0.2;
/// Fraction of a photon's energy handed to its positron child.
const PHOTON_SPLIT: f64 = 0.5;

/// Branching cascade generator.
///
/// Holds the active frontier, the per-generation history and the engine-owned
/// random source. The driver calls [`reset`](Self::reset) to seed the tree and
/// [`advance`](Self::advance) once per step; calls must be serialized.
#[derive(Debug)]
pub struct CascadeEngine<R: RandomSource = StdRng> {
    frontier: Vec<Segment>,
    history: Vec<Generation>,
    rng: R,
}

impl CascadeEngine<StdRng> {
    /// Create an engine backed by a `StdRng`.
    ///
    /// - seed: RNG seed for reproducibility; `None` for a nondeterministic seed
    ///
    /// The engine starts empty; call `reset` before advancing.
    pub fn new(seed: Option<u64>) -> Self {
        let rng: StdRng = match seed {
            Some(s) => SeedableRng::seed_from_u64(s),
            None => SeedableRng::seed_from_u64(rng().random()),
        };
        Self::with_source(rng)
    }
}

impl<R: RandomSource> CascadeEngine<R> {
    /// Create an engine drawing from `source`.
    pub fn with_source(source: R) -> Self {
        Self {
            frontier: Vec::new(),
            history: Vec::new(),
            rng: source,
        }
    }

    /// Discard all state and seed generation 0 with one electron spanning
    /// `base_point .. base_point + base_direction * 0.5`.
    ///
    /// Errors: `Error::InvalidParam` on non-finite vectors or non-positive energy.
    /// State is left untouched on error.
    pub fn reset(&mut self, base_point: DVec3, base_direction: DVec3, initial_energy: f64) -> Result<()> {
        validate_seed(base_point, base_direction, initial_energy)?;
        let seed = Segment::new(
            base_point,
            base_point + base_direction * 0.5,
            initial_energy,
            ParticleType::Electron,
        )?;

        self.frontier.clear();
        self.history.clear();
        self.frontier.push(seed);
        self.history.push(Generation::from_segments(vec![seed]));
        debug!(
            "reset: seed {:?} -> {:?}, energy {}",
            seed.start, seed.end, seed.energy
        );
        Ok(())
    }

    /// [`reset`](Self::reset) from a parameter record.
    pub fn reset_with(&mut self, params: &SeedParams) -> Result<()> {
        self.reset(
            params.base_point(),
            params.base_direction(),
            params.initial_energy,
        )
    }

    /// Branch every frontier segment once and append the survivors as a new generation.
    ///
    /// Parameters
    /// - length_scale: children extend from the parent's end by `length_scale - child_energy`
    /// - x_degree: pair rotation about the parent axis is drawn from `[-x_degree/2, x_degree/2]`
    /// - z_degree: opening angle scale
    /// - min_energy: children below this energy are dropped
    ///
    /// An empty frontier appends an empty generation.
    ///
    /// Errors: `Error::InvalidParam` for bad parameters, `Error::DegenerateGeometry`
    /// when a parent cannot be branched. Frontier and history are unchanged on error.
    pub fn advance(
        &mut self,
        length_scale: f64,
        x_degree: i32,
        z_degree: i32,
        min_energy: f64,
    ) -> Result<&Generation> {
        self.advance_with(&StepParams {
            length_scale,
            x_degree,
            z_degree,
            min_energy,
        })
    }

    /// [`advance`](Self::advance) from a parameter record.
    pub fn advance_with(&mut self, params: &StepParams) -> Result<&Generation> {
        params.validate()?;
        let generation = self.history.len();

        let mut next: Vec<Segment> = Vec::with_capacity(self.frontier.len() * 2);
        for (i, parent) in self.frontier.iter().enumerate() {
            let pair = branch(parent, params, &mut self.rng).inspect_err(|reason| {
                warn!("advance aborted: generation {generation}, segment {i}: {reason}");
            });
            let pair = pair.map_err(|reason| Error::DegenerateGeometry {
                generation,
                segment: i,
                reason,
            })?;
            trace!(
                "segment {i}: {} {:.6} -> [{} {:.6}, {} {:.6}]",
                parent.particle_type,
                parent.energy,
                pair[0].particle_type,
                pair[0].energy,
                pair[1].particle_type,
                pair[1].energy
            );
            next.extend(pair.into_iter().filter(|c| c.energy >= params.min_energy));
        }

        debug!(
            "generation {generation}: {} parents -> {} survivors",
            self.frontier.len(),
            next.len()
        );
        self.history.push(Generation::from_segments(next.clone()));
        self.frontier = next;
        Ok(&self.history[generation])
    }

    /// Segments eligible for the next advance.
    pub fn frontier(&self) -> &[Segment] {
        &self.frontier
    }

    /// All generations, oldest first.
    pub fn history(&self) -> &[Generation] {
        &self.history
    }

    pub fn generation(&self, index: usize) -> Option<&Generation> {
        self.history.get(index)
    }

    pub fn num_generations(&self) -> usize {
        self.history.len()
    }

    /// Column view of every generation.
    pub fn columns(&self) -> Vec<GenerationColumns> {
        self.history.iter().map(Generation::columns).collect()
    }
}

/// Split `parent` into its two children, ordered longer-first.
///
/// Draws `r1`, `r2` (unit) then `r3` (integer) from `rng`. Returns the reason
/// when the parent's geometry admits no perpendicular.
fn branch<R: RandomSource>(
    parent: &Segment,
    params: &StepParams,
    rng: &mut R,
) -> std::result::Result<[Segment; 2], &'static str> {
    let pivot = parent.end;
    let axis = parent.axis();
    if axis.length_squared() == 0.0 {
        return Err("zero-length parent axis");
    }
    let dir = axis.normalize();

    let (type_b, energy_b) = match parent.particle_type {
        ParticleType::Electron | ParticleType::Positron => {
            (ParticleType::Photon, parent.energy * LEPTON_SPLIT)
        }
        ParticleType::Photon => (ParticleType::Positron, parent.energy * PHOTON_SPLIT),
    };
    // Child A is an electron whatever the parent.
    let type_a = ParticleType::Electron;
    let energy_a = parent.energy - energy_b;

    let end_a = pivot + dir * (params.length_scale - energy_a);
    let end_b = pivot + dir * (params.length_scale - energy_b);

    let perp_a = perpendicular(end_a - pivot).ok_or("child A vector has zero z-component")?;
    let perp_b = perpendicular(end_b - pivot).ok_or("child B vector has zero z-component")?;

    let z = f64::from(params.z_degree);
    let angle_a = z * (1.0 - energy_a) * rng.next_unit() * DEG_TO_RAD;
    let angle_b = -(z * (1.0 - energy_b) * rng.next_unit() * DEG_TO_RAD);
    let end_a = rotate_around_pivot(end_a, pivot, perp_a, angle_a);
    let end_b = rotate_around_pivot(end_b, pivot, perp_b, angle_b);

    let half = params.x_degree / 2;
    let twist = f64::from(rng.next_int(-half, half)) * DEG_TO_RAD;
    let end_a = rotate_around_pivot(end_a, pivot, axis, twist);
    let end_b = rotate_around_pivot(end_b, pivot, axis, twist);

    let a = Segment {
        start: pivot,
        end: end_a,
        energy: energy_a,
        particle_type: type_a,
    };
    let b = Segment {
        start: pivot,
        end: end_b,
        energy: energy_b,
        particle_type: type_b,
    };

    let length_a = (end_a - pivot).length();
    let length_b = (end_b - pivot).length();
    if length_b > length_a {
        Ok([b, a])
    } else {
        Ok([a, b])
    }
}
