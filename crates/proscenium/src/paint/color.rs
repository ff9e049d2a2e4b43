/// Linear premultiplied RGBA color handed to the host's fill and stroke setters.
///
/// Invariant:
/// - `rgb` components are already multiplied by `a` (premultiplied alpha).
///
/// The scene never blends colors itself; hosts convert to whatever their
/// paint API expects via [`to_straight`](Self::to_straight).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::from_premul(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::from_premul(1.0, 1.0, 1.0, 1.0);

    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Opaque gray from a single byte level (`0` = black, `255` = white).
    #[inline]
    pub fn gray(level: u8) -> Self {
        Self::from_srgb_u8(level, level, level, 255)
    }

    /// Creates a premultiplied color from straight RGBA bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components in `[0, 1]`.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn gray_extremes_match_constants() {
        assert_eq!(Color::gray(0), Color::BLACK);
        assert_eq!(Color::gray(255), Color::WHITE);
    }

    #[test]
    fn straight_alpha_is_premultiplied() {
        let c = Color::from_straight(1.0, 0.5, 0.0, 0.5);
        assert_approx_eq!(f32, c.r, 0.5);
        assert_approx_eq!(f32, c.g, 0.25);
        assert_approx_eq!(f32, c.a, 0.5);

        let (r, g, _, a) = c.to_straight();
        assert_approx_eq!(f32, r, 1.0);
        assert_approx_eq!(f32, g, 0.5);
        assert_approx_eq!(f32, a, 0.5);
    }

    #[test]
    fn transparent_unpremultiplies_to_zero() {
        assert_eq!(Color::transparent().to_straight(), (0.0, 0.0, 0.0, 0.0));
    }
}
