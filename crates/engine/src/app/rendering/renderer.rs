use std::sync::Arc;

use pixels::{Error, Pixels, SurfaceTexture, TextureError};
use winit::window::Window;

use super::surface::Frame;

/// Owns the pixel buffer presented to the window. The buffer stays at the
/// logical resolution chosen at startup; window resizes only rescale the
/// surface it is blitted onto.
pub struct Renderer {
    pixels: Pixels<'static>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(window: Arc<Window>, width: u32, height: u32) -> Result<Self, Error> {
        let surface_size = window.inner_size();
        let surface = SurfaceTexture::new(surface_size.width, surface_size.height, window);
        let pixels = Pixels::new(width, height, surface)?;
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    pub(crate) fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), TextureError> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels.resize_surface(width, height)
    }

    pub(crate) fn frame(&mut self) -> Frame<'_> {
        Frame::from_buffer(self.pixels.frame_mut(), self.width, self.height)
    }

    pub(crate) fn present(&mut self) -> Result<(), Error> {
        self.pixels.render()
    }
}
