use crate::config::TextureConfig;
use crate::context::GpuContext;
use crate::error::{GpuError, Result};

/// GPU texture holding one rasterised frame.
pub struct Texture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    pub width: u32,
    pub height: u32,
}

/// Number of bytes an RGBA8 buffer of the given dimensions must hold.
pub fn rgba8_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}

fn check_len(data: &[u8], width: u32, height: u32) -> Result<()> {
    let expected = rgba8_len(width, height);
    if data.len() != expected {
        return Err(GpuError::Texture(format!(
            "Invalid data size: expected {} bytes for {}x{} RGBA8, got {}",
            expected,
            width,
            height,
            data.len()
        )));
    }
    Ok(())
}

impl Texture {
    /// Create a texture from RGBA8 bytes.
    pub fn from_rgba8(
        ctx: &GpuContext,
        data: &[u8],
        width: u32,
        height: u32,
        config: &TextureConfig,
    ) -> Result<Self> {
        check_len(data, width, height)?;

        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Frame Texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Frame Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: config.mag_filter,
            min_filter: config.min_filter,
            ..Default::default()
        });

        let frame = Self {
            texture,
            view,
            sampler,
            width,
            height,
        };
        frame.write(ctx, data)?;
        Ok(frame)
    }

    /// Overwrite the texture contents; dimensions must match.
    pub fn write(&self, ctx: &GpuContext, data: &[u8]) -> Result<()> {
        check_len(data, self.width, self.height)?;

        ctx.queue.write_texture(
            self.texture.as_image_copy(),
            data,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * self.width),
                rows_per_image: Some(self.height),
            },
            wgpu::Extent3d {
                width: self.width,
                height: self.height,
                depth_or_array_layers: 1,
            },
        );
        Ok(())
    }

    pub fn matches(&self, width: u32, height: u32) -> bool {
        self.width == width && self.height == height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba8_len() {
        assert_eq!(rgba8_len(2, 3), 24);
        assert_eq!(rgba8_len(0, 100), 0);
    }

    #[test]
    fn test_check_len_rejects_short_buffer() {
        assert!(check_len(&[0u8; 16], 2, 2).is_ok());
        let err = check_len(&[0u8; 15], 2, 2).unwrap_err();
        assert!(err.to_string().contains("expected 16 bytes"));
    }
}
