/// Visual diameter of a single plotted point, in world units.
pub const DEFAULT_POINT_SIZE: f32 = 0.2;

/// World-space magnification applied to raw CSV coordinates.
pub const DEFAULT_COORDINATE_SCALE: f32 = 5.0;

/// Maximum number of data rows consumed from the input file.
pub const DEFAULT_LIMIT_PLOTS: usize = 5000;

/// Distance below which a point leaves the batched draw path and becomes an
/// individually rendered override object.
pub const DEFAULT_INTERACT_DISTANCE: f32 = 2.0;

/// Instances per draw batch. Matches the common hardware instancing limit.
pub const DEFAULT_INSTANCE_BATCH_CAPACITY: usize = 1023;

pub const TARGET_MARKER_RADIUS: f32 = 0.125;
