/// Camera-facing sprite material for the particle cloud strategy.
use bevy::{
    pbr::{MaterialPipeline, MaterialPipelineKey},
    prelude::*,
    reflect::TypePath,
    render::{
        mesh::MeshVertexBufferLayoutRef,
        render_resource::{
            AsBindGroup, RenderPipelineDescriptor, ShaderRef, SpecializedMeshPipelineError,
        },
    },
};

const PARTICLE_CLOUD_SHADER_PATH: &str = "shaders/particle_cloud.wgsl";

/// Expands the 4-vertices-per-point batch into camera-facing circular
/// sprites. The only parameter is the world-space sprite diameter; colour
/// rides on the vertices.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct ParticleCloudMaterial {
    #[uniform(0)]
    pub point_size: f32,
}

impl Material for ParticleCloudMaterial {
    fn vertex_shader() -> ShaderRef {
        PARTICLE_CLOUD_SHADER_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        PARTICLE_CLOUD_SHADER_PATH.into()
    }

    fn specialize(
        _pipeline: &MaterialPipeline<Self>,
        descriptor: &mut RenderPipelineDescriptor,
        layout: &MeshVertexBufferLayoutRef,
        _key: MaterialPipelineKey<Self>,
    ) -> Result<(), SpecializedMeshPipelineError> {
        // The sprite batch carries centre position, corner UV, and colour.
        let vertex_layout = layout.0.get_layout(&[
            Mesh::ATTRIBUTE_POSITION.at_shader_location(0),
            Mesh::ATTRIBUTE_UV_0.at_shader_location(1),
            Mesh::ATTRIBUTE_COLOR.at_shader_location(2),
        ])?;
        descriptor.vertex.buffers = vec![vertex_layout];
        Ok(())
    }
}
