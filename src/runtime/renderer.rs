//! Softbuffer-backed renderer for the layout

use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use softbuffer::{Context, Surface};
use winit::window::Window;

use sidebar_layout::model::AppModel;
use sidebar_layout::view::frame::Frame;
use sidebar_layout::view::paint;

pub struct Renderer {
    surface: Surface<Rc<Window>, Rc<Window>>,
    /// Persistent back buffer; softbuffer doesn't guarantee contents between frames
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
    scale_factor: f64,
}

impl Renderer {
    /// Create a renderer sized to the window's current physical size
    pub fn new(window: Rc<Window>, context: &Context<Rc<Window>>) -> Result<Self> {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();

        let surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create surface: {}", e))?;

        let mut renderer = Self {
            surface,
            back_buffer: Vec::new(),
            width: 0,
            height: 0,
            scale_factor,
        };
        renderer.resize(size.width, size.height)?;
        Ok(renderer)
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
    }

    /// Resize the surface and back buffer (physical pixels)
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            // Minimized; keep the old surface until a real size arrives
            return Ok(());
        };

        self.surface
            .resize(w, h)
            .map_err(|e| anyhow!("Failed to resize surface: {}", e))?;

        self.width = width;
        self.height = height;
        self.back_buffer = vec![0u32; width as usize * height as usize];
        Ok(())
    }

    /// Paint the model and present it
    pub fn render(&mut self, model: &AppModel) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        let mut frame = Frame::new(
            &mut self.back_buffer,
            self.width as usize,
            self.height as usize,
        );
        paint(&mut frame, model, self.scale_factor as f32);

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow!("Failed to get surface buffer: {}", e))?;
        if buffer.len() == self.back_buffer.len() {
            buffer.copy_from_slice(&self.back_buffer);
        } else {
            tracing::warn!(
                surface = buffer.len(),
                back_buffer = self.back_buffer.len(),
                "surface size mismatch, skipping frame"
            );
        }
        buffer
            .present()
            .map_err(|e| anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }
}
