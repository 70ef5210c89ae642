//! Per-window render state: GPU context plus the quad pipeline.

use std::sync::Arc;
use winit::window::Window;

use crate::gpu::{GpuContext, RendererError};
use crate::quad::{QuadInstance, QuadRenderer};

/// Core rendering state.
///
/// The workspace chrome is quads only; panel contents render into
/// their own embedded surfaces composited above this layer.
pub struct RenderState {
    pub gpu: GpuContext,
    pub quad: QuadRenderer,
    pub clear_color: wgpu::Color,
}

impl RenderState {
    /// Create a fully initialized render state from a window.
    pub async fn new(window: Arc<Window>) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window).await?;
        let quad = QuadRenderer::new(&gpu.device, gpu.format());

        Ok(Self {
            gpu,
            quad,
            clear_color: wgpu::Color {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                a: 1.0,
            },
        })
    }

    /// Handle a window resize by reconfiguring the surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    /// Set the background clear color, in linear space.
    pub fn set_clear_color(&mut self, rgba: [f32; 4]) {
        self.clear_color = wgpu::Color {
            r: rgba[0] as f64,
            g: rgba[1] as f64,
            b: rgba[2] as f64,
            a: rgba[3] as f64,
        };
    }

    /// Render one frame: clear, then draw the prepared chrome quads.
    pub fn render_frame(&mut self, quads: &[QuadInstance]) -> Result<(), RendererError> {
        self.quad.prepare(
            &self.gpu.queue,
            quads,
            self.gpu.width as f32,
            self.gpu.height as f32,
        );

        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(e) => {
                tracing::error!("Failed to get surface texture: {e}");
                return Err(RendererError::SurfaceError(e.to_string()));
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("sumeru chrome encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("sumeru chrome pass"),
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

            self.quad.render(&mut pass);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.width, self.gpu.height, self.gpu.format());

        Ok(())
    }
}

fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    static FIRST_FRAME: std::sync::Once = std::sync::Once::new();
    FIRST_FRAME.call_once(|| {
        tracing::info!("first frame presented: {width}x{height} {format:?}");
    });
}
