//! Render a settled frame to **SVG**: one filled circle per bubble, colored
//! by region with a darker outline, and region titles overlaid while split
//! mode is active.
//!
//! Output is SVG-only: text lands as `<text>` elements, so no font assets are
//! bundled or rasterized.

pub mod palette;
pub mod text;

pub use palette::region_color;

use crate::chart::Frame;
use anyhow::Result;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

/// Write the frame to an SVG file at its own canvas size.
pub fn render_svg<P: AsRef<Path>>(frame: &Frame, out_path: P) -> Result<()> {
    let path_string = out_path.as_ref().to_string_lossy().into_owned();
    let size = (frame.width.round() as u32, frame.height.round() as u32);
    let root = SVGBackend::new(path_string.as_str(), size).into_drawing_area();
    root.fill(&WHITE).map_err(|e| anyhow::anyhow!("{:?}", e))?;

    // Frames arrive sorted largest-value first, so small bubbles draw on top.
    for node in &frame.nodes {
        let center = (node.x.round() as i32, node.y.round() as i32);
        let r = node.radius.round().max(1.0) as i32;
        let fill = palette::region_color(&node.region);
        let stroke = palette::darker(fill);
        root.draw(&Circle::new(center, r, fill.filled()))
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        root.draw(&Circle::new(center, r, stroke.stroke_width(2)))
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }

    let label_style = (FontFamily::SansSerif, 24)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    for label in &frame.labels {
        let anchor = (label.anchor.x.round() as i32, label.anchor.y.round() as i32);
        root.draw(&Text::new(label.category.clone(), anchor, label_style.clone()))
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }

    root.present().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}
