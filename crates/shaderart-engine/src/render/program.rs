use anyhow::Result;

use crate::render::RenderTarget;

use super::uniforms::{self, UniformBlock, UniformLocation};

const PRELUDE: &str = include_str!("shaders/fullscreen.wgsl");

/// Fragment shader used when the runtime config does not provide one.
pub const DEFAULT_FRAGMENT: &str = include_str!("shaders/default.wgsl");

/// Compiled fullscreen shader and its uniform buffer.
///
/// The fragment source is appended to a prelude declaring `u: Uniforms`,
/// `VsOut` and the vertex stage; it must define `fs_main`.
pub struct ShaderProgram {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
}

impl ShaderProgram {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        fragment_source: &str,
    ) -> Result<Self> {
        anyhow::ensure!(
            fragment_source.contains("fs_main"),
            "fragment shader must define `fs_main`"
        );

        let source = format!("{PRELUDE}\n{fragment_source}");
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shaderart program"),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("shaderart uniforms bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<UniformBlock>() as u64,
                    ),
                },
                count: None,
            }],
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("shaderart uniforms"),
            size: std::mem::size_of::<UniformBlock>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            // Zero-initialized: every uniform starts at 0.
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("shaderart uniforms bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("shaderart pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("shaderart pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("shader program built for {format:?}");

        Ok(Self {
            pipeline,
            bind_group,
            uniform_buffer,
        })
    }

    /// Resolves a uniform by its shader-visible name.
    ///
    /// Names use the host convention (`pointerStart`, not `pointer_start`).
    pub fn uniform_location(&self, name: &str) -> Option<UniformLocation> {
        let (name, offset, kind) = uniforms::lookup(name)?;
        Some(UniformLocation {
            buffer: self.uniform_buffer.clone(),
            name,
            offset,
            kind,
        })
    }

    /// Draws the fullscreen triangle, replacing the target's contents.
    pub fn draw(&self, target: &mut RenderTarget<'_>) {
        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("shaderart pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.draw(0..3, 0..1);
    }
}
