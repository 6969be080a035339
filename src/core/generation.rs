use crate::core::segment::Segment;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Segments produced by one step, in emission order.
///
/// Generation 0 holds the seed; generation `k` holds the survivors of the `k`-th advance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Generation {
    segments: Vec<Segment>,
}

impl Generation {
    pub(crate) fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Total energy carried by the generation (diagnostic).
    pub fn total_energy(&self) -> f64 {
        self.segments.iter().map(|s| s.energy).sum()
    }

    /// Project to the four parallel lists consumed by renderers.
    pub fn columns(&self) -> GenerationColumns {
        let n = self.segments.len();
        let mut cols = GenerationColumns {
            starts: Vec::with_capacity(n),
            ends: Vec::with_capacity(n),
            energies: Vec::with_capacity(n),
            type_labels: Vec::with_capacity(n),
        };
        for s in &self.segments {
            cols.starts.push(s.start);
            cols.ends.push(s.end);
            cols.energies.push(s.energy);
            cols.type_labels.push(s.particle_type.as_str());
        }
        cols
    }
}

impl<'a> IntoIterator for &'a Generation {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Column-oriented view of a [`Generation`]; index `i` of every list describes the same segment.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenerationColumns {
    pub starts: Vec<DVec3>,
    pub ends: Vec<DVec3>,
    pub energies: Vec<f64>,
    pub type_labels: Vec<&'static str>,
}

impl GenerationColumns {
    pub fn len(&self) -> usize {
        self.energies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::segment::ParticleType;
    use crate::error::Result;
    use pretty_assertions::assert_eq;

    #[test]
    fn columns_mirror_segments() -> Result<()> {
        let pivot = DVec3::new(0.0, 0.0, 0.5);
        let a = Segment::new(pivot, DVec3::new(0.0, 0.0, 0.7), 0.8, ParticleType::Electron)?;
        let b = Segment::new(pivot, DVec3::new(0.0, 0.0, 1.3), 0.2, ParticleType::Photon)?;
        let g = Generation::from_segments(vec![b, a]);

        let cols = g.columns();
        assert_eq!(cols.len(), 2);
        assert_eq!(cols.starts, vec![pivot, pivot]);
        assert_eq!(cols.ends, vec![b.end, a.end]);
        assert_eq!(cols.energies, vec![0.2, 0.8]);
        assert_eq!(cols.type_labels, vec!["Photon", "Electron"]);
        assert!((g.total_energy() - 1.0).abs() < 1e-15);
        Ok(())
    }

    #[test]
    fn empty_generation_has_empty_columns() {
        let g = Generation::default();
        assert!(g.is_empty());
        assert!(g.columns().is_empty());
    }
}
