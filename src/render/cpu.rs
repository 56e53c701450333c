use crate::animation::state::FrameState;
use crate::foundation::core::{Affine, BezPath, Canvas, Rgb8};
use crate::foundation::error::{ChromaError, ChromaResult};
use crate::render::draw::draw_scene;
use crate::render::surface::{DrawSurface, FrameRGBA};
use crate::scene::shape::ShapeDescriptor;

/// CPU raster surface powered by `vello_cpu`.
///
/// The render context and target pixmap are kept across frames; each frame resets the context.
pub struct CpuSurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
}

impl CpuSurface {
    /// Allocate a surface for `canvas`. Dimensions must fit in `u16`.
    pub fn new(canvas: Canvas) -> ChromaResult<Self> {
        if canvas.width == 0 || canvas.height == 0 {
            return Err(ChromaError::validation("canvas width/height must be > 0"));
        }
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| ChromaError::render("surface width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| ChromaError::render("surface height exceeds u16"))?;
        Ok(Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
            pixmap: vello_cpu::Pixmap::new(width, height),
        })
    }

    /// Surface dimensions.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: u32::from(self.width),
            height: u32::from(self.height),
        }
    }

    /// Drop any recorded draw commands.
    pub fn begin_frame(&mut self) {
        self.ctx.reset();
    }

    /// Rasterize recorded commands and read the frame back.
    pub fn finish_frame(&mut self) -> FrameRGBA {
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    /// Draw a whole scene and read it back.
    pub fn render(
        &mut self,
        shapes: &[ShapeDescriptor],
        frame: &FrameState,
    ) -> ChromaResult<FrameRGBA> {
        self.begin_frame();
        draw_scene(self, shapes, frame)?;
        Ok(self.finish_frame())
    }
}

impl DrawSurface for CpuSurface {
    fn clear(&mut self, gray: u8) -> ChromaResult<()> {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(gray, gray, gray, 255));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));
        Ok(())
    }

    fn fill_path(&mut self, transform: Affine, path: &BezPath, color: Rgb8) -> ChromaResult<()> {
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, 255,
        ));
        self.ctx.fill_path(&bezpath_to_cpu(path));
        Ok(())
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
