use core::ops::{Deref, DerefMut};

use super::PaintCtx;

/// Saved paint state that is restored when the scope is dropped.
///
/// Restoration happens on every exit path: normal return, early `?` return,
/// and unwinding out of a panicking render.
///
/// ```rust,ignore
/// let mut scope = PaintScope::new(canvas);
/// style.apply(&mut *scope);
/// scope.ellipse(center, size);
/// // restore() runs here
/// ```
pub struct PaintScope<'a, C: PaintCtx + ?Sized> {
    ctx: &'a mut C,
}

impl<'a, C: PaintCtx + ?Sized> PaintScope<'a, C> {
    #[inline]
    pub fn new(ctx: &'a mut C) -> Self {
        ctx.save();
        Self { ctx }
    }
}

impl<C: PaintCtx + ?Sized> Deref for PaintScope<'_, C> {
    type Target = C;

    #[inline]
    fn deref(&self) -> &C {
        self.ctx
    }
}

impl<C: PaintCtx + ?Sized> DerefMut for PaintScope<'_, C> {
    #[inline]
    fn deref_mut(&mut self) -> &mut C {
        self.ctx
    }
}

impl<C: PaintCtx + ?Sized> Drop for PaintScope<'_, C> {
    fn drop(&mut self) {
        self.ctx.restore();
    }
}
