//! Blocking window showing a rendered heatmap.
use crate::RgbImage;
use anyhow::Result;
use log::info;
use minifb::{Key, Window, WindowOptions};

/// A window displaying a single image until it is closed.
pub struct HeatmapWindow {
    title: String,
    fps: usize,
}

impl HeatmapWindow {
    /// Creates a window with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fps: 30,
        }
    }

    /// Shows `image`; returns once the window is closed or Escape is pressed.
    pub fn show(&self, image: &RgbImage) -> Result<()> {
        let (width, height) = (image.width() as usize, image.height() as usize);
        let mut window = Window::new(
            &self.title,
            width,
            height,
            WindowOptions {
                resize: true,
                ..Default::default()
            },
        )?;
        window.set_target_fps(self.fps);
        info!("Showing heatmap in window {:?}", self.title);

        let buf = image.to_0rgb();
        while window.is_open() && !window.is_key_down(Key::Escape) {
            window.update_with_buffer(&buf, width, height)?;
        }
        Ok(())
    }
}
