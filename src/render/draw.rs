use crate::animation::state::FrameState;
use crate::foundation::core::{Affine, BezPath, Rgb8};
use crate::foundation::error::ChromaResult;
use crate::render::geometry::{shadow_shift, shape_path};
use crate::render::surface::DrawSurface;
use crate::scene::shape::ShapeDescriptor;

/// Wraps a [`DrawSurface`] with a transform stack.
pub struct Painter<'a, S: DrawSurface + ?Sized> {
    surface: &'a mut S,
    stack: Vec<Affine>,
}

impl<'a, S: DrawSurface + ?Sized> Painter<'a, S> {
    /// Start with the identity transform.
    pub fn new(surface: &'a mut S) -> Self {
        Self {
            surface,
            stack: Vec::new(),
        }
    }

    /// Current accumulated transform.
    pub fn transform(&self) -> Affine {
        self.stack.last().copied().unwrap_or(Affine::IDENTITY)
    }

    /// Number of open transform scopes.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Run `f` with `local` appended to the current transform.
    ///
    /// The scope is popped whether `f` succeeds or returns an error.
    pub fn with_transform<R>(
        &mut self,
        local: Affine,
        f: impl FnOnce(&mut Self) -> ChromaResult<R>,
    ) -> ChromaResult<R> {
        let next = self.transform() * local;
        self.stack.push(next);
        let out = f(self);
        self.stack.pop();
        out
    }

    /// Clear the canvas.
    pub fn clear(&mut self, gray: u8) -> ChromaResult<()> {
        self.surface.clear(gray)
    }

    /// Fill `path` under the current transform.
    pub fn fill(&mut self, path: &BezPath, color: Rgb8) -> ChromaResult<()> {
        let t = self.transform();
        self.surface.fill_path(t, path, color)
    }
}

/// Clear to the frame's background and draw every shape in order.
pub fn draw_scene<S: DrawSurface + ?Sized>(
    surface: &mut S,
    shapes: &[ShapeDescriptor],
    frame: &FrameState,
) -> ChromaResult<()> {
    let mut painter = Painter::new(surface);
    painter.clear(frame.background)?;
    for shape in shapes {
        draw_shape(&mut painter, shape, frame)?;
    }
    Ok(())
}

/// Left shadow, right shadow, then fill, all inside the shape's translate + rotate scope.
pub fn draw_shape<S: DrawSurface + ?Sized>(
    painter: &mut Painter<'_, S>,
    shape: &ShapeDescriptor,
    frame: &FrameState,
) -> ChromaResult<()> {
    let path = shape_path(shape.kind, shape.rx, shape.ry);
    let placement = Affine::translate(shape.position.to_vec2()) * Affine::rotate(shape.rotation);
    painter.with_transform(placement, |p| {
        let copies = [
            (frame.left_offset, shape.shadow.left.rgb()),
            (frame.right_offset, shape.shadow.right.rgb()),
        ];
        for (offset, color) in copies {
            let shift = Affine::translate(shadow_shift(shape.kind, offset));
            p.with_transform(shift, |p| p.fill(&path, color))?;
        }
        p.fill(&path, shape.fill)
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/draw.rs"]
mod tests;
