//! Mesh generation for the plot's rendering primitives.

/// Static sprite batch mesh: four vertices per point, expanded to
/// camera-facing quads in the vertex shader.
pub mod particle_mesh;
