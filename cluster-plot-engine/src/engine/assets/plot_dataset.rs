use bevy::prelude::*;

/// One parsed data row: reduced-dimension coordinates plus a cluster label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub cluster: i32,
}

impl PlotPoint {
    /// World-space position after applying the configured magnification.
    pub fn scaled_position(&self, scale: f32) -> Vec3 {
        Vec3::new(self.x, self.y, self.z) * scale
    }
}

/// Ordered point collection in CSV row order. Immutable once loaded.
#[derive(Resource, Debug, Clone, Default)]
pub struct PlotDataset {
    points: Vec<PlotPoint>,
}

impl PlotDataset {
    pub fn from_points(points: Vec<PlotPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PlotPoint] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlotPoint> {
        self.points.iter()
    }

    /// Centre of the scaled cloud, for camera framing.
    pub fn scaled_center(&self, scale: f32) -> Vec3 {
        let (min, max) = self.scaled_bounds(scale);
        (min + max) * 0.5
    }

    /// Extent of the scaled cloud along each axis.
    pub fn scaled_extent(&self, scale: f32) -> Vec3 {
        let (min, max) = self.scaled_bounds(scale);
        max - min
    }

    fn scaled_bounds(&self, scale: f32) -> (Vec3, Vec3) {
        let mut min = Vec3::ZERO;
        let mut max = Vec3::ZERO;
        for (i, point) in self.points.iter().enumerate() {
            let pos = point.scaled_position(scale);
            if i == 0 {
                min = pos;
                max = pos;
            } else {
                min = min.min(pos);
                max = max.max(pos);
            }
        }
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> PlotDataset {
        PlotDataset::from_points(vec![
            PlotPoint { x: 1.0, y: 2.0, z: 3.0, cluster: 0 },
            PlotPoint { x: -1.0, y: 0.0, z: 1.0, cluster: 2 },
        ])
    }

    #[test]
    fn scaled_position_applies_magnification() {
        let point = PlotPoint { x: 1.0, y: 2.0, z: 3.0, cluster: 0 };
        assert_eq!(point.scaled_position(2.0), Vec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn bounds_cover_all_points() {
        let data = dataset();
        assert_eq!(data.scaled_center(1.0), Vec3::new(0.0, 1.0, 2.0));
        assert_eq!(data.scaled_extent(1.0), Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(data.scaled_extent(3.0), Vec3::new(6.0, 6.0, 6.0));
    }

    #[test]
    fn empty_dataset_has_zero_bounds() {
        let data = PlotDataset::default();
        assert!(data.is_empty());
        assert_eq!(data.scaled_center(5.0), Vec3::ZERO);
        assert_eq!(data.scaled_extent(5.0), Vec3::ZERO);
    }
}
