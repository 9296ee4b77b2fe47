use crate::constants::{
    MAX_RIPPLES, QUAD_VERTICES, RIPPLE_STRIDE, SAMPLER_BINDING, TEXTURE_BINDING, UNIFORM_BINDING,
};
use crate::core::FrameInputs;
use wgpu::util::DeviceExt;

/// Uniform block shared with `ripple.frag.wgsl`. Field order and padding must
/// match the WGSL struct exactly.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct RippleUniforms {
    pub(crate) resolution: [f32; 2],
    pub(crate) time: f32,
    pub(crate) ripple_count: u32,
    pub(crate) amplitude: f32,
    pub(crate) frequency: f32,
    pub(crate) pulse_amplitude: f32,
    pub(crate) edge_softness: f32,
    pub(crate) decay: f32,
    pub(crate) speed: f32,
    pub(crate) strength: f32,
    pub(crate) ambient_intensity: f32,
    pub(crate) specular_intensity: f32,
    pub(crate) tiling: f32,
    pub(crate) _pad0: [f32; 2],
    pub(crate) light_position: [f32; 4],
    pub(crate) light_color: [f32; 4],
    pub(crate) ambient_color: [f32; 4],
    pub(crate) ripples: [[f32; RIPPLE_STRIDE]; MAX_RIPPLES],
}

impl RippleUniforms {
    pub(crate) fn pack(inputs: &FrameInputs<'_>, resolution: [f32; 2]) -> Self {
        let p = inputs.params;
        Self {
            resolution,
            time: inputs.time,
            ripple_count: inputs.ripple_count,
            amplitude: p.amplitude,
            frequency: p.frequency,
            pulse_amplitude: p.pulse_amplitude,
            edge_softness: p.edge_softness,
            decay: p.decay,
            speed: p.speed,
            strength: p.strength,
            ambient_intensity: p.ambient_intensity,
            specular_intensity: p.specular_intensity,
            tiling: p.tiling,
            _pad0: [0.0; 2],
            light_position: p.light_position.extend(0.0).to_array(),
            light_color: p.light_color.extend(1.0).to_array(),
            ambient_color: p.ambient_color.extend(1.0).to_array(),
            ripples: *inputs.ripples,
        }
    }
}

pub(crate) struct RipplePass {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) quad_buffer: wgpu::Buffer,
}

pub(crate) fn create_ripple_pass(
    device: &wgpu::Device,
    vertex_module: &wgpu::ShaderModule,
    fragment_module: &wgpu::ShaderModule,
    color_format: wgpu::TextureFormat,
    surface_view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
) -> RipplePass {
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("ripple_bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: UNIFORM_BINDING,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: TEXTURE_BINDING,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: SAMPLER_BINDING,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("ripple_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("ripple_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: vertex_module,
            entry_point: Some("vs_main"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<[f32; 2]>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &wgpu::vertex_attr_array![0 => Float32x2],
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: fragment_module,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("ripple_uniforms"),
        size: std::mem::size_of::<RippleUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("ripple_bg"),
        layout: &bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: UNIFORM_BINDING,
                resource: uniform_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: TEXTURE_BINDING,
                resource: wgpu::BindingResource::TextureView(surface_view),
            },
            wgpu::BindGroupEntry {
                binding: SAMPLER_BINDING,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    });
    let quad_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("fullscreen_quad"),
        contents: bytemuck::cast_slice(&QUAD_VERTICES),
        usage: wgpu::BufferUsages::VERTEX,
    });

    RipplePass {
        pipeline,
        uniform_buffer,
        bind_group,
        quad_buffer,
    }
}
