//! Heatmaps drawn with plotters.
use crate::RgbImage;
use actmap_core::{HeatmapConfig, HeatmapError, HeatmapPanel, Renderer};
use anyhow::Result;
use log::debug;
use plotters::{
    chart::ChartContext,
    coord::{cartesian::Cartesian2d, combinators::BindKeyPoints, ranged1d::Ranged, Shift},
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};
use std::path::Path;

const FONT: &str = "sans-serif";
const MARGIN: u32 = 10;

/// Largest width or height of a rendered image in pixels.
pub const MAX_IMAGE_SIDE: u32 = 1 << 14;

/// Colour of a cell holding `v`, scaled to `[0, 1]`.
fn cell_color(v: f64) -> HSLColor {
    let v = v.clamp(0.0, 1.0);
    HSLColor(240.0 / 360.0 - 240.0 / 360.0 * v, 0.7, 0.1 + 0.4 * v)
}

/// Draws heatmap panels side by side into RGB images or PNG files.
///
/// Every panel is scaled to its own maximum, so the darkest cell of a panel
/// is zero and the brightest its largest value. Cells are annotated with
/// their values when they are large enough to hold the text.
#[derive(Debug, Clone)]
pub struct PlotRenderer {
    cell_size: u32,
    font_size: u32,
    precision: usize,
}

impl Default for PlotRenderer {
    fn default() -> Self {
        Self::new(&HeatmapConfig::default())
    }
}

impl PlotRenderer {
    /// Creates a renderer with the cell and font sizes of `config`.
    pub fn new(config: &HeatmapConfig) -> Self {
        Self {
            cell_size: config.cell_size.max(1),
            font_size: config.font_size.max(1),
            precision: config.precision,
        }
    }

    fn y_label_area(&self, panel: &HeatmapPanel) -> u32 {
        let chars = panel
            .row_labels()
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);
        let chars = u32::try_from(chars).unwrap_or(u32::MAX);
        (chars.saturating_mul(self.font_size).saturating_mul(3) / 5)
            .saturating_add(self.font_size.saturating_mul(3))
    }

    fn x_label_area(&self) -> u32 {
        self.font_size.saturating_mul(3)
    }

    fn caption_area(&self) -> u32 {
        self.font_size.saturating_mul(2).saturating_add(MARGIN)
    }

    fn cells(&self, n: usize) -> u32 {
        u32::try_from(n)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.cell_size)
    }

    /// Size in pixels of the image holding `panels`.
    ///
    /// Saturates at `u32::MAX`; [`Renderer::render`] and [`save`](Self::save)
    /// reject images with a side longer than [`MAX_IMAGE_SIDE`].
    pub fn size(&self, panels: &[HeatmapPanel]) -> (u32, u32) {
        panels.iter().fold((0u32, 0u32), |(w, h), panel| {
            let values = panel.values();
            let pw = self
                .y_label_area(panel)
                .saturating_add(self.cells(values.ncols()))
                .saturating_add(2 * MARGIN);
            let ph = self
                .caption_area()
                .saturating_add(self.cells(values.nrows()))
                .saturating_add(self.x_label_area())
                .saturating_add(2 * MARGIN);
            (w.saturating_add(pw), h.max(ph))
        })
    }

    fn checked_size(&self, panels: &[HeatmapPanel]) -> Result<(u32, u32), HeatmapError> {
        let (width, height) = self.size(panels);
        if width == 0 || height == 0 || width > MAX_IMAGE_SIDE || height > MAX_IMAGE_SIDE {
            return Err(HeatmapError::Render(format!(
                "a {}x{} image is outside of [1, {}] pixels per side",
                width, height, MAX_IMAGE_SIDE
            )));
        }
        Ok((width, height))
    }

    /// Renders `panels` into a PNG file.
    pub fn save(&self, panels: &[HeatmapPanel], path: impl AsRef<Path>) -> Result<()> {
        let size = self.checked_size(panels)?;
        let root = BitMapBackend::new(path.as_ref(), size).into_drawing_area();
        self.draw(&root, panels)?;
        debug!("Saved a {:?} heatmap to {:?}", size, path.as_ref());
        Ok(())
    }

    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, panels: &[HeatmapPanel]) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE)?;
        let mut rest = root.clone();
        for panel in panels {
            let (w, _) = self.size(std::slice::from_ref(panel));
            let (area, right) = rest.split_horizontally(w as i32);
            self.draw_panel(&area, panel)?;
            rest = right;
        }
        root.present()?;
        Ok(())
    }

    fn draw_panel<DB>(&self, area: &DrawingArea<DB, Shift>, panel: &HeatmapPanel) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let values = panel.values();
        let (nrows, ncols) = (values.nrows(), values.ncols());
        let max = panel.max_value();
        let row_labels = panel.row_labels();
        let col_labels = panel.col_labels();

        // Row 0 is drawn at the top, cell centres carry the tick labels.
        let x_ticks = (0..ncols).map(|j| j as f64 + 0.5).collect::<Vec<_>>();
        let y_ticks = (0..nrows).map(|i| i as f64 + 0.5).collect::<Vec<_>>();
        let mut chart = ChartBuilder::on(area)
            .caption(panel.title(), (FONT, self.font_size.saturating_add(4)))
            .margin(MARGIN)
            .x_label_area_size(self.x_label_area())
            .y_label_area_size(self.y_label_area(panel))
            .build_cartesian_2d(
                (0f64..ncols as f64).with_key_points(x_ticks),
                (0f64..nrows as f64).with_key_points(y_ticks),
            )?;

        let x_formatter = |x: &f64| {
            col_labels
                .get(x.floor() as usize)
                .cloned()
                .unwrap_or_default()
        };
        let y_formatter = |y: &f64| {
            let i = y.floor() as usize;
            if i < nrows {
                row_labels[nrows - 1 - i].clone()
            } else {
                String::new()
            }
        };
        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc(panel.x_label())
            .y_desc(panel.y_label())
            .x_labels(ncols)
            .y_labels(nrows)
            .x_label_formatter(&x_formatter)
            .y_label_formatter(&y_formatter)
            .label_style((FONT, self.font_size))
            .draw()?;

        self.draw_cells(&mut chart, panel)?;

        let scaled = |v: f64| if max > 0.0 { v / max } else { 0.0 };
        let annotate = self.cell_size >= self.font_size.saturating_mul(3);
        if annotate {
            let style = TextStyle::from((FONT, self.font_size).into_font())
                .pos(Pos::new(HPos::Center, VPos::Center));
            chart.draw_series(values.indexed_iter().map(|((i, j), &v)| {
                let color = if scaled(v) < 0.6 { &WHITE } else { &BLACK };
                Text::new(
                    format!("{:.*}", self.precision, v),
                    (j as f64 + 0.5, (nrows - 1 - i) as f64 + 0.5),
                    style.color(color),
                )
            }))?;
        }
        Ok(())
    }

    /// Fills one unit square per cell, row 0 at the top.
    fn draw_cells<DB, X, Y>(
        &self,
        chart: &mut ChartContext<'_, DB, Cartesian2d<X, Y>>,
        panel: &HeatmapPanel,
    ) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
        X: Ranged<ValueType = f64>,
        Y: Ranged<ValueType = f64>,
    {
        let values = panel.values();
        let nrows = values.nrows();
        let max = panel.max_value();
        let scaled = |v: f64| if max > 0.0 { v / max } else { 0.0 };
        chart.draw_series(values.indexed_iter().map(|((i, j), &v)| {
            let y = (nrows - 1 - i) as f64;
            let x = j as f64;
            Rectangle::new([(x, y), (x + 1.0, y + 1.0)], cell_color(scaled(v)).filled())
        }))?;
        Ok(())
    }
}

impl Renderer for PlotRenderer {
    type Output = RgbImage;

    fn render(&mut self, panels: &[HeatmapPanel]) -> Result<RgbImage, HeatmapError> {
        let (width, height) = self.checked_size(panels)?;
        let mut buf = vec![0u8; 3 * width as usize * height as usize];
        {
            let root = BitMapBackend::with_buffer(buf.as_mut_slice(), (width, height))
                .into_drawing_area();
            self.draw(&root, panels)
                .map_err(|e| HeatmapError::Render(e.to_string()))?;
        }
        RgbImage::from_raw(width, height, buf).map_err(|e| HeatmapError::Render(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_color_range() {
        let dark = cell_color(0.0);
        let bright = cell_color(1.0);
        assert!(dark.2 < bright.2);
        assert_eq!(cell_color(2.0).2, bright.2);
    }

    fn rgb(v: f64) -> [u8; 3] {
        let (r, g, b) = cell_color(v).to_backend_color().rgb;
        [r, g, b]
    }

    #[test]
    fn test_cells_in_image() -> Result<()> {
        let labels = |ls: &[&str]| ls.iter().map(|l| l.to_string()).collect::<Vec<_>>();
        let panel = HeatmapPanel::new(
            "",
            ndarray::array![[0.0, 0.5], [1.0, 0.25]],
            labels(&["(0,)", "(1,)"]),
            labels(&["1", "2"]),
        )?;

        // No captions or label areas, so no fonts are needed.
        let (width, height) = (20u32, 20u32);
        let mut buf = vec![0u8; 3 * (width * height) as usize];
        {
            let root = BitMapBackend::with_buffer(buf.as_mut_slice(), (width, height))
                .into_drawing_area();
            root.fill(&WHITE)?;
            let mut chart = ChartBuilder::on(&root).build_cartesian_2d(0f64..2f64, 0f64..2f64)?;
            PlotRenderer::default().draw_cells(&mut chart, &panel)?;
            root.present()?;
        }
        let image = RgbImage::from_raw(width, height, buf)?;

        assert_eq!(image.pixel(5, 5), Some(rgb(0.0)));
        assert_eq!(image.pixel(15, 5), Some(rgb(0.5)));
        assert_eq!(image.pixel(5, 15), Some(rgb(1.0)));
        assert_eq!(image.pixel(15, 15), Some(rgb(0.25)));
        assert_ne!(rgb(0.0), rgb(1.0));
        Ok(())
    }

    #[test]
    fn test_oversized_image() {
        let labels = |n: usize| (0..n).map(|i| i.to_string()).collect::<Vec<_>>();
        let panel =
            HeatmapPanel::new("", ndarray::Array2::zeros((8, 2000)), labels(8), labels(2000))
                .unwrap();
        let mut renderer = PlotRenderer::default();
        let (width, _) = renderer.size(std::slice::from_ref(&panel));
        assert!(width > MAX_IMAGE_SIDE);
        assert!(matches!(
            renderer.render(std::slice::from_ref(&panel)),
            Err(HeatmapError::Render(_))
        ));

        let huge = PlotRenderer::new(&HeatmapConfig::default().cell_size(u32::MAX));
        assert_eq!(huge.size(std::slice::from_ref(&panel)).0, u32::MAX);
        assert!(matches!(
            huge.clone().render(&[panel]),
            Err(HeatmapError::Render(_))
        ));
        assert!(matches!(
            renderer.render(&[]),
            Err(HeatmapError::Render(_))
        ));
    }
}
