use std::{
    fmt::{Debug, Display},
    ops::{AddAssign, Mul},
};

/// Represents an amount of money in USD currency.
///
/// The amount is stored as a floating-point number of dollars, exactly as it
/// appears in the price catalogue, and the [`Display`] implementation formats
/// it with a dollar sign to 2 decimal places.
#[derive(Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Usd(f64);

impl Usd {
    /// Returns the amount as a plain number of dollars.
    #[must_use]
    pub fn dollars(self) -> f64 {
        self.0
    }
}

impl From<f64> for Usd {
    fn from(dollars: f64) -> Self {
        Self(dollars)
    }
}

impl Debug for Usd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Usd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl AddAssign for Usd {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<f64> for Usd {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_dollars_to_two_decimal_places() {
        assert_eq!(Usd::from(30.0).to_string(), "$30.00");
        assert_eq!(Usd::from(7.125).to_string(), "$7.12");
        assert_eq!(Usd::default().to_string(), "$0.00");
    }

    #[test]
    fn display_keeps_the_sign_of_negative_amounts() {
        assert_eq!(Usd::from(-5.0).to_string(), "$-5.00");
    }

    #[test]
    fn mul_scales_an_amount_by_a_quantity() {
        assert_eq!(Usd::from(10.0) * 3.0, Usd::from(30.0));
        assert_eq!(Usd::from(2.5) * -2.0, Usd::from(-5.0));
        assert_eq!((Usd::from(2.5) * 2.0).dollars(), 5.0);
    }

    #[test]
    fn add_assign_accumulates_amounts() {
        let mut total = Usd::default();
        total += Usd::from(1.25);
        total += Usd::from(2.75);
        assert_eq!(total, Usd::from(4.0));
    }
}
