use derive_more::{Add, AddAssign, Display, From, Into, Sum};

/// A length in whole pixels. All widths, heights, and width budgets in the
/// crate are expressed in `Px`.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Add,
    AddAssign,
    Sum,
    Display,
    From,
    Into,
)]
#[display("{_0}px")]
pub struct Px(pub u32);

impl Px {
    pub const ZERO: Px = Px(0);

    /// Subtract, clamping at zero rather than wrapping
    pub fn saturating_sub(self, rhs: Px) -> Px {
        Px(self.0.saturating_sub(rhs.0))
    }

    /// Multiply by a count, e.g. spacing between `n` gaps
    pub fn times(self, n: usize) -> Px {
        Px(self.0.saturating_mul(n as u32))
    }

    /// Round a fractional pixel measurement up to whole pixels
    pub fn ceil(value: f32) -> Px {
        if value <= 0.0 {
            Px(0)
        } else {
            Px(value.ceil() as u32)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturating_sub_clamps_at_zero() {
        assert_eq!(Px(3).saturating_sub(Px(5)), Px::ZERO);
        assert_eq!(Px(5).saturating_sub(Px(3)), Px(2));
    }

    #[test]
    fn ceil_rounds_fractions_up() {
        assert_eq!(Px::ceil(10.01), Px(11));
        assert_eq!(Px::ceil(10.0), Px(10));
        assert_eq!(Px::ceil(-2.0), Px(0));
    }

    #[test]
    fn sums_and_displays() {
        let total: Px = [Px(1), Px(2), Px(3)].into_iter().sum();
        assert_eq!(total, Px(6));
        assert_eq!(format!("{}", total), "6px");
    }
}
