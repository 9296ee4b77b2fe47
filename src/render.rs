use crate::assets::StartupAssets;
use crate::constants::CLEAR_COLOR;
use crate::core::{FrameInputs, ShadingStage};
use crate::error::RippleError;
use crate::input::surface_extent;
use web_sys as web;

mod helpers;
mod ripple_pass;

use ripple_pass::{create_ripple_pass, RipplePass, RippleUniforms};

// ===================== WebGPU state =====================

/// Adapter, device and configured surface. The first of the three awaited
/// startup steps; the texture upload and program build borrow it.
pub struct GpuContext {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
}

/// The sampled surface image. The texture is kept alive for the bind group.
pub struct SurfaceTexture {
    _texture: wgpu::Texture,
    view: wgpu::TextureView,
}

impl GpuContext {
    pub async fn acquire(canvas: &web::HtmlCanvasElement) -> Result<Self, RippleError> {
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| RippleError::setup(format!("create_surface: {}", e)))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| RippleError::setup("no WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // baseline limits; a single quad pass needs nothing more
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| RippleError::setup(format!("request_device: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| RippleError::setup("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let max_dim = device.limits().max_texture_dimension_2d;
        let (width, height) =
            surface_extent(canvas.width().max(1), canvas.height().max(1), max_dim)
                .unwrap_or((1, 1));
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} format={:?}", width, height, format);
        Ok(Self {
            surface,
            device,
            queue,
            config,
        })
    }

    /// Copy the decoded surface image onto the GPU. Validation errors from
    /// the upload are reported as a setup failure.
    pub async fn upload_surface_texture(
        &self,
        image: &web::ImageBitmap,
    ) -> Result<SurfaceTexture, RippleError> {
        self.device.push_error_scope(wgpu::ErrorFilter::Validation);
        let (texture, view) =
            helpers::upload_image_bitmap(&self.device, &self.queue, "surface_texture", image);
        if let Some(err) = self.device.pop_error_scope().await {
            return Err(RippleError::setup(format!("texture upload: {}", err)));
        }
        Ok(SurfaceTexture {
            _texture: texture,
            view,
        })
    }

    /// Compile both shader stages and link them into the ripple pipeline
    /// bound to `texture`.
    pub async fn build_program(
        &self,
        assets: &StartupAssets,
        texture: &SurfaceTexture,
    ) -> Result<RipplePass, RippleError> {
        let device = &self.device;
        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let vertex_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("ripple_vs"),
            source: wgpu::ShaderSource::Wgsl(assets.vertex_wgsl.as_str().into()),
        });
        let fragment_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("ripple_fs"),
            source: wgpu::ShaderSource::Wgsl(assets.fragment_wgsl.as_str().into()),
        });
        for (stage, module) in [("vertex", &vertex_module), ("fragment", &fragment_module)] {
            let errors = helpers::compilation_errors(module).await;
            if !errors.is_empty() {
                for e in &errors {
                    log::error!("[shader:{}] {}", stage, e);
                }
                _ = device.pop_error_scope().await;
                return Err(RippleError::setup(format!(
                    "{} shader failed to compile ({} errors)",
                    stage,
                    errors.len()
                )));
            }
        }
        let sampler = helpers::create_repeat_sampler(device);
        let pass = create_ripple_pass(
            device,
            &vertex_module,
            &fragment_module,
            self.config.format,
            &texture.view,
            &sampler,
        );
        if let Some(err) = device.pop_error_scope().await {
            return Err(RippleError::setup(format!("program link: {}", err)));
        }
        Ok(pass)
    }
}

pub struct RippleRenderer {
    gpu: GpuContext,
    canvas: web::HtmlCanvasElement,
    pass: RipplePass,
    _surface_texture: SurfaceTexture,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl RippleRenderer {
    pub fn new(
        gpu: GpuContext,
        canvas: &web::HtmlCanvasElement,
        surface_texture: SurfaceTexture,
        pass: RipplePass,
    ) -> Self {
        let width = gpu.config.width;
        let height = gpu.config.height;
        Self {
            gpu,
            canvas: canvas.clone(),
            pass,
            _surface_texture: surface_texture,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: CLEAR_COLOR[3],
            },
        }
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        let max_dim = self.gpu.device.limits().max_texture_dimension_2d;
        let Some((width, height)) = surface_extent(width, height, max_dim) else {
            return;
        };
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    pub fn reconfigure(&mut self) {
        let gpu = &mut self.gpu;
        gpu.config.width = self.width;
        gpu.config.height = self.height;
        gpu.surface.configure(&gpu.device, &gpu.config);
    }
}

impl ShadingStage for RippleRenderer {
    type Error = wgpu::SurfaceError;

    fn configure(&mut self, inputs: &FrameInputs<'_>) -> Result<(), Self::Error> {
        self.resize_if_needed(self.canvas.width(), self.canvas.height());
        let u = RippleUniforms::pack(inputs, [self.width as f32, self.height as f32]);
        self.gpu
            .queue
            .write_buffer(&self.pass.uniform_buffer, 0, bytemuck::bytes_of(&u));
        Ok(())
    }

    fn draw(&mut self) -> Result<(), Self::Error> {
        let frame = self.gpu.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("ripple_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_viewport(0.0, 0.0, self.width as f32, self.height as f32, 0.0, 1.0);
            rpass.set_pipeline(&self.pass.pipeline);
            rpass.set_bind_group(0, &self.pass.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.pass.quad_buffer.slice(..));
            rpass.draw(0..6, 0..1);
        }
        self.gpu.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
