use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

use crate::engine::assets::plot_dataset::PlotDataset;
use constants::cluster::cluster_color;

const CORNERS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// Build the whole cloud as one static vertex batch. Every point contributes
/// four vertices sharing its centre position; the vertex shader offsets each
/// corner along the camera plane, so the batch itself never changes.
pub fn build_particle_mesh(dataset: &PlotDataset, scale: f32) -> Mesh {
    let count = dataset.len();
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(count * 4);
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(count * 4);
    let mut colors: Vec<[f32; 4]> = Vec::with_capacity(count * 4);
    let mut indices: Vec<u32> = Vec::with_capacity(count * 6);

    for (i, point) in dataset.iter().enumerate() {
        let center = point.scaled_position(scale).to_array();
        let color = cluster_color(point.cluster).to_linear().to_f32_array();
        let base = (i * 4) as u32;
        for corner in CORNERS {
            positions.push(center);
            uvs.push(corner);
            colors.push(color);
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::plot_dataset::PlotPoint;

    fn dataset(n: usize) -> PlotDataset {
        PlotDataset::from_points(
            (0..n)
                .map(|i| PlotPoint {
                    x: i as f32,
                    y: 0.0,
                    z: 0.0,
                    cluster: i as i32,
                })
                .collect(),
        )
    }

    #[test]
    fn four_vertices_and_six_indices_per_point() {
        let mesh = build_particle_mesh(&dataset(7), 1.0);
        assert_eq!(mesh.count_vertices(), 7 * 4);
        match mesh.indices() {
            Some(Indices::U32(indices)) => assert_eq!(indices.len(), 7 * 6),
            other => panic!("unexpected indices: {other:?}"),
        }
    }

    #[test]
    fn corners_share_the_scaled_centre() {
        let mesh = build_particle_mesh(&dataset(2), 3.0);
        let positions = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .and_then(|values| values.as_float3())
            .expect("position attribute");
        // Second point sits at x = 1 before scaling.
        for corner in 4..8 {
            assert_eq!(positions[corner], [3.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn rebuild_is_deterministic() {
        let data = dataset(5);
        let a = build_particle_mesh(&data, 2.0);
        let b = build_particle_mesh(&data, 2.0);
        assert_eq!(a.count_vertices(), b.count_vertices());
        let pos = |m: &Mesh| {
            m.attribute(Mesh::ATTRIBUTE_POSITION)
                .and_then(|v| v.as_float3())
                .map(<[_]>::to_vec)
        };
        assert_eq!(pos(&a), pos(&b));
    }
}
