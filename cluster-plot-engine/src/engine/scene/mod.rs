//! Scene construction for the three presentation strategies.
//!
//! Every builder maps point `i` to visual element `i`: positions are the raw
//! coordinates times the configured scale, colours come from the cyclic
//! cluster palette.

/// Bounded instance-batch partitioning and batch entity lifecycle.
pub mod billboards;

/// One sphere entity per point under a single container.
pub mod discrete_spheres;

/// Single static sprite batch covering the full dataset.
pub mod particle_cloud;

/// Proximity target entity following the cursor on the ground plane.
pub mod target_gizmo;
