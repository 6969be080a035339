use numpy::ndarray::Array2;
use numpy::IntoPyArray;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::core::CascadeEngine;
use glam::DVec3;

fn py_err<E: ToString>(e: E) -> PyErr {
    PyValueError::new_err(e.to_string())
}

fn vec3_arg(name: &str, v: &[f64]) -> PyResult<DVec3> {
    match *v {
        [x, y, z] => Ok(DVec3::new(x, y, z)),
        _ => Err(py_err(format!("{name} must have length 3, got {}", v.len()))),
    }
}

fn points_array(points: &[DVec3]) -> Array2<f64> {
    let mut arr = Array2::<f64>::zeros((points.len(), 3));
    for (i, p) in points.iter().enumerate() {
        arr[[i, 0]] = p.x;
        arr[[i, 1]] = p.y;
        arr[[i, 2]] = p.z;
    }
    arr
}

/// Python-facing wrapper around the cascade engine.
///
/// API:
/// - __new__(seed=None)
/// - reset(base_point, base_direction, initial_energy=1.0)
/// - advance(length_scale=1.0, x_degree=0, z_degree=0, min_energy=0.01) -> int
/// - get_generation(index) -> dict
#[pyclass]
pub struct ParticleShower {
    engine: CascadeEngine,
}

#[pymethods]
impl ParticleShower {
    /// Create an engine. Pass an integer `seed` for reproducible showers.
    #[new]
    #[pyo3(signature = (seed=None))]
    fn new(seed: Option<u64>) -> Self {
        Self {
            engine: CascadeEngine::new(seed),
        }
    }

    /// Discard all generations and seed a new shower.
    ///
    /// Errors: raises ValueError on non-3-vectors, non-finite input or energy <= 0.
    #[pyo3(signature = (base_point, base_direction, initial_energy=1.0))]
    fn reset(
        &mut self,
        base_point: Vec<f64>,
        base_direction: Vec<f64>,
        initial_energy: f64,
    ) -> PyResult<()> {
        let p = vec3_arg("base_point", &base_point)?;
        let d = vec3_arg("base_direction", &base_direction)?;
        self.engine.reset(p, d, initial_energy).map_err(py_err)
    }

    /// Produce the next generation and return the number of surviving segments.
    #[pyo3(signature = (length_scale=1.0, x_degree=0, z_degree=0, min_energy=0.01))]
    fn advance(
        &mut self,
        length_scale: f64,
        x_degree: i32,
        z_degree: i32,
        min_energy: f64,
    ) -> PyResult<usize> {
        self.engine
            .advance(length_scale, x_degree, z_degree, min_energy)
            .map(|g| g.len())
            .map_err(py_err)
    }

    fn num_generations(&self) -> usize {
        self.engine.num_generations()
    }

    fn frontier_size(&self) -> usize {
        self.engine.frontier().len()
    }

    /// Return generation `index` as a dict of columns:
    /// `starts`/`ends` (N, 3) float64 arrays, `energies` (N,) float64 array, `types` list of str.
    fn get_generation<'py>(&self, py: Python<'py>, index: usize) -> PyResult<Py<PyDict>> {
        let generation = self.engine.generation(index).ok_or_else(|| {
            py_err(format!(
                "generation {index} out of range ({} available)",
                self.engine.num_generations()
            ))
        })?;
        let cols = generation.columns();
        let out = PyDict::new(py);
        out.set_item("starts", points_array(&cols.starts).into_pyarray(py))?;
        out.set_item("ends", points_array(&cols.ends).into_pyarray(py))?;
        out.set_item("energies", cols.energies.into_pyarray(py))?;
        out.set_item("types", cols.type_labels)?;
        Ok(out.into())
    }
}

/// The pshower Python module entry point.
#[pymodule]
fn pshower(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ParticleShower>()?;
    Ok(())
}
