use bevy::prelude::*;

/// Number of hue buckets the palette cycles through. Cluster ids beyond this
/// wrap around, so id 11 shares its colour with id 1.
pub const HUE_BUCKETS: i32 = 10;

/// Palette bucket for a cluster id, always in `0..HUE_BUCKETS`.
pub fn cluster_bucket(cluster: i32) -> usize {
    cluster.rem_euclid(HUE_BUCKETS) as usize
}

/// Cyclic hue for a cluster id, as a fraction of the hue circle in `[0, 1)`.
pub fn cluster_hue(cluster: i32) -> f32 {
    cluster_bucket(cluster) as f32 / HUE_BUCKETS as f32
}

/// Fully saturated plot colour for a cluster id.
pub fn cluster_color(cluster: i32) -> Color {
    Color::hsv(cluster_hue(cluster) * 360.0, 1.0, 1.0)
}
