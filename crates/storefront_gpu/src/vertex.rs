use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub tex_coords: [f32; 2],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Quad covering the whole clip space, texture origin at the top-left.
pub const FULLSCREEN_QUAD: [Vertex; 4] = [
    Vertex { position: [-1.0, -1.0], tex_coords: [0.0, 1.0] },
    Vertex { position: [1.0, -1.0], tex_coords: [1.0, 1.0] },
    Vertex { position: [1.0, 1.0], tex_coords: [1.0, 0.0] },
    Vertex { position: [-1.0, 1.0], tex_coords: [0.0, 0.0] },
];

pub const FULLSCREEN_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_indices_reference_all_corners() {
        for corner in 0..FULLSCREEN_QUAD.len() as u16 {
            assert!(FULLSCREEN_INDICES.contains(&corner));
        }
    }

    #[test]
    fn test_top_left_maps_to_texture_origin() {
        let top_left = FULLSCREEN_QUAD
            .iter()
            .find(|v| v.position == [-1.0, 1.0])
            .map(|v| v.tex_coords);
        assert_eq!(top_left, Some([0.0, 0.0]));
    }
}
