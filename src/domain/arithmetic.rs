//! Component-wise arithmetic on [`Interval`].
//!
//! No operation carries between fields. Integer fields wrap on overflow in
//! `Add`/`Sub`/`Neg`; `Mul`/`Div` scale each field through `f64` and truncate
//! months and days back to integers, so scaling by a non-integer factor is
//! only exact when those fields are zero. Seconds follow IEEE-754, dividing by
//! zero yields an infinity or NaN rather than an error.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::interval::Interval;

impl Add for Interval {
    type Output = Interval;

    fn add(self, rhs: Interval) -> Interval {
        Interval {
            months: self.months.wrapping_add(rhs.months),
            days: self.days.wrapping_add(rhs.days),
            seconds: self.seconds + rhs.seconds,
        }
    }
}

impl Sub for Interval {
    type Output = Interval;

    fn sub(self, rhs: Interval) -> Interval {
        Interval {
            months: self.months.wrapping_sub(rhs.months),
            days: self.days.wrapping_sub(rhs.days),
            seconds: self.seconds - rhs.seconds,
        }
    }
}

impl Neg for Interval {
    type Output = Interval;

    fn neg(self) -> Interval {
        Interval {
            months: self.months.wrapping_neg(),
            days: self.days.wrapping_neg(),
            seconds: -self.seconds,
        }
    }
}

impl Mul<f64> for Interval {
    type Output = Interval;

    fn mul(self, factor: f64) -> Interval {
        Interval {
            months: (f64::from(self.months) * factor) as i32,
            days: (f64::from(self.days) * factor) as i32,
            seconds: self.seconds * factor,
        }
    }
}

impl Div<f64> for Interval {
    type Output = Interval;

    fn div(self, divisor: f64) -> Interval {
        Interval {
            months: (f64::from(self.months) / divisor) as i32,
            days: (f64::from(self.days) / divisor) as i32,
            seconds: self.seconds / divisor,
        }
    }
}

impl AddAssign for Interval {
    fn add_assign(&mut self, rhs: Interval) {
        *self = *self + rhs;
    }
}

impl SubAssign for Interval {
    fn sub_assign(&mut self, rhs: Interval) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Interval {
    fn mul_assign(&mut self, factor: f64) {
        *self = *self * factor;
    }
}

impl DivAssign<f64> for Interval {
    fn div_assign(&mut self, divisor: f64) {
        *self = *self / divisor;
    }
}

impl Sum for Interval {
    fn sum<I: Iterator<Item = Interval>>(iter: I) -> Interval {
        iter.fold(Interval::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Interval> for Interval {
    fn sum<I: Iterator<Item = &'a Interval>>(iter: I) -> Interval {
        iter.copied().sum()
    }
}
