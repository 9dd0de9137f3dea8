//! Fullscreen frame pipeline.
//!
//! The UI is rasterised on the CPU; this pipeline only copies the finished
//! frame onto the window surface.

use std::sync::Arc;

use wgpu::util::DeviceExt;
use winit::window::Window;

use super::{BindGroupLayoutBuilder, PipelineBuilder};
use crate::bindings::{FRAME_GROUP, FRAME_SAMPLER_BINDING, FRAME_TEXTURE_BINDING};
use crate::config::{GpuConfig, TextureConfig};
use crate::context::GpuContext;
use crate::error::{GpuError, Result};
use crate::texture::Texture;
use crate::vertex::{Vertex, FULLSCREEN_INDICES, FULLSCREEN_QUAD};

pub(crate) const FRAME_SHADER: &str = r#"
struct VertexInput {
    @location(0) position: vec2<f32>,
    @location(1) tex_coords: vec2<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) tex_coords: vec2<f32>,
};

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = vec4<f32>(in.position, 0.0, 1.0);
    out.tex_coords = in.tex_coords;
    return out;
}

@group(0) @binding(0)
var frame_texture: texture_2d<f32>;
@group(0) @binding(1)
var frame_sampler: sampler;

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return textureSample(frame_texture, frame_sampler, in.tex_coords);
}
"#;

/// Pipeline drawing one textured quad over the whole surface.
pub struct FramePipeline {
    render_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    num_indices: u32,
    frame_bind_group_layout: wgpu::BindGroupLayout,
}

impl FramePipeline {
    pub fn new(ctx: &GpuContext) -> Result<Self> {
        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Frame Shader"),
            source: wgpu::ShaderSource::Wgsl(FRAME_SHADER.into()),
        });

        let frame_bind_group_layout = BindGroupLayoutBuilder::new(&ctx.device)
            .with_label("Frame Bind Group Layout")
            .add_texture_2d(FRAME_TEXTURE_BINDING, wgpu::ShaderStages::FRAGMENT)
            .add_sampler(FRAME_SAMPLER_BINDING, wgpu::ShaderStages::FRAGMENT)
            .build();

        let render_pipeline = PipelineBuilder::new(&ctx.device, ctx.surface_config.format)
            .with_label("Frame Render Pipeline")
            .with_shader(&shader, "vs_main", "fs_main")
            .with_vertex_buffer(Vertex::desc())
            .with_bind_group_layouts(&[&frame_bind_group_layout])
            .build()
            .ok_or_else(|| GpuError::Texture("frame pipeline has no shader".to_string()))?;

        let vertex_buffer = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Frame Vertex Buffer"),
            contents: bytemuck::cast_slice(&FULLSCREEN_QUAD),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Frame Index Buffer"),
            contents: bytemuck::cast_slice(&FULLSCREEN_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        Ok(Self {
            render_pipeline,
            vertex_buffer,
            index_buffer,
            num_indices: FULLSCREEN_INDICES.len() as u32,
            frame_bind_group_layout,
        })
    }

    /// Create bind group for a frame texture
    pub fn create_bind_group(&self, ctx: &GpuContext, texture: &Texture) -> wgpu::BindGroup {
        ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Frame Bind Group"),
            layout: &self.frame_bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: FRAME_TEXTURE_BINDING,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: FRAME_SAMPLER_BINDING,
                    resource: wgpu::BindingResource::Sampler(&texture.sampler),
                },
            ],
        })
    }

    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        bind_group: &wgpu::BindGroup,
        clear: wgpu::Color,
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Frame Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        render_pass.set_pipeline(&self.render_pipeline);
        render_pass.set_bind_group(FRAME_GROUP, bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        render_pass.draw_indexed(0..self.num_indices, 0, 0..1);
    }
}

/// Owns the GPU side of a window: context, pipeline and the current frame texture.
pub struct Presenter {
    ctx: GpuContext,
    pipeline: FramePipeline,
    texture_config: TextureConfig,
    frame: Option<(Texture, wgpu::BindGroup)>,
}

impl Presenter {
    pub async fn new(window: Arc<Window>, config: GpuConfig) -> Result<Self> {
        let ctx = GpuContext::new(window, config).await?;
        let pipeline = FramePipeline::new(&ctx)?;
        Ok(Self {
            ctx,
            pipeline,
            texture_config: TextureConfig::default(),
            frame: None,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.ctx.resize(width, height);
    }

    /// Surface size in physical pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.ctx.width(), self.ctx.height())
    }

    /// Upload an RGBA8 frame and present it.
    pub fn present(&mut self, rgba: &[u8], width: u32, height: u32) -> Result<()> {
        let reuse = matches!(&self.frame, Some((texture, _)) if texture.matches(width, height));
        if reuse {
            if let Some((texture, _)) = &self.frame {
                texture.write(&self.ctx, rgba)?;
            }
        } else {
            log::debug!("Allocating frame texture {}x{}", width, height);
            let texture = Texture::from_rgba8(&self.ctx, rgba, width, height, &self.texture_config)?;
            let bind_group = self.pipeline.create_bind_group(&self.ctx, &texture);
            self.frame = Some((texture, bind_group));
        }

        let surface_frame = match self.ctx.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                let (w, h) = self.size();
                log::warn!("Surface lost or outdated, reconfiguring at {}x{}", w, h);
                self.ctx.resize(w, h);
                return Ok(());
            }
            Err(e) => return Err(GpuError::Frame(e.to_string())),
        };

        let view = surface_frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        if let Some((_, bind_group)) = &self.frame {
            self.pipeline
                .render(&mut encoder, &view, bind_group, self.ctx.config.clear_color.into());
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        surface_frame.present();
        Ok(())
    }
}
