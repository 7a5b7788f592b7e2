use std::path::Path;

use crate::foundation::core::Rgb8;
use crate::foundation::error::{InfographicError, InfographicResult};
use crate::render::components::RenderedBlock;

/// Vertical gap inserted before each section, in pixels.
pub const DEFAULT_SPACING: u32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Paste position of one section on the canvas.
pub struct Placement {
    pub x: i64,
    pub y: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Solved canvas dimensions and section paste positions.
pub struct StackLayout {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub placements: [Placement; 2],
}

#[derive(Clone, Copy, Debug)]
/// Inputs to the two-section stack composition.
pub struct AssembleOpts {
    pub canvas_width: u32,
    /// Canvas fill; the orchestrator passes the top dominant color.
    pub background: Rgb8,
    pub spacing: u32,
    /// Apply the computed `(canvas_width - block_width) / 2` offset when
    /// pasting. The historical layout computed this offset but always
    /// pasted at x = 0; `false` keeps that left-aligned behavior.
    pub center_sections: bool,
}

impl AssembleOpts {
    pub fn new(canvas_width: u32, background: Rgb8) -> Self {
        Self {
            canvas_width,
            background,
            spacing: DEFAULT_SPACING,
            center_sections: false,
        }
    }
}

/// Solve the vertical stack layout for two sections of `(width, height)`.
///
/// The canvas height is `4 * spacing + h1 + h2`: spacing above section 1,
/// between the sections, below section 2, plus one extra spacing unit. The
/// multiplier is a fixed layout constant of the format, recomputed on every
/// run and never cached.
pub fn solve_stack_layout(
    canvas_width: u32,
    spacing: u32,
    sizes: [(u32, u32); 2],
    center_sections: bool,
) -> InfographicResult<StackLayout> {
    if canvas_width == 0 {
        return Err(InfographicError::validation("canvas width must be > 0"));
    }
    if spacing == 0 {
        return Err(InfographicError::validation("spacing must be > 0"));
    }

    let [(w1, h1), (w2, h2)] = sizes;
    let canvas_height = 4 * spacing + h1 + h2;

    // The centered offset is computed for each section but only applied on
    // request; the compatible default pastes both sections at x = 0.
    let x1 = if center_sections {
        centered_x(canvas_width, w1)
    } else {
        0
    };
    let x2 = if center_sections {
        centered_x(canvas_width, w2)
    } else {
        0
    };

    let mut next_y = i64::from(spacing);
    let first = Placement { x: x1, y: next_y };
    next_y += i64::from(spacing) + i64::from(h1);
    let second = Placement { x: x2, y: next_y };

    Ok(StackLayout {
        canvas_width,
        canvas_height,
        placements: [first, second],
    })
}

fn centered_x(canvas_width: u32, block_width: u32) -> i64 {
    (i64::from(canvas_width) - i64::from(block_width)) / 2
}

/// Compose the two pre-rendered section blocks into one canvas.
pub fn compose_stack(
    section_01: &RenderedBlock,
    section_02: &RenderedBlock,
    opts: &AssembleOpts,
) -> InfographicResult<RenderedBlock> {
    let layout = solve_stack_layout(
        opts.canvas_width,
        opts.spacing,
        [
            (section_01.width(), section_01.height()),
            (section_02.width(), section_02.height()),
        ],
        opts.center_sections,
    )?;

    let mut canvas = image::RgbaImage::from_pixel(
        layout.canvas_width,
        layout.canvas_height,
        opts.background.to_rgba(),
    );
    image::imageops::replace(
        &mut canvas,
        section_01.image(),
        layout.placements[0].x,
        layout.placements[0].y,
    );
    image::imageops::replace(
        &mut canvas,
        section_02.image(),
        layout.placements[1].x,
        layout.placements[1].y,
    );
    Ok(RenderedBlock::new(canvas))
}

/// Compose and persist the final infographic.
pub fn assemble_infographic(
    section_01: &RenderedBlock,
    section_02: &RenderedBlock,
    opts: &AssembleOpts,
    out_path: &Path,
) -> InfographicResult<()> {
    let canvas = compose_stack(section_01, section_02, opts)?;
    canvas.save_png(out_path).map_err(|e| {
        InfographicError::assembly(format!("write infographic '{}': {e}", out_path.display()))
    })?;
    tracing::info!(path = %out_path.display(), "infographic generated and saved");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/canvas.rs"]
mod tests;
