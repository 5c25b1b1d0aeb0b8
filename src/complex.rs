// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The small slice of complex arithmetic the escape-time kernel needs:
//! addition, multiplication, and the squared norm.  The squared norm
//! stands in for the true modulus so the escape test never has to
//! take a square root.

use num::{Complex, Zero};
use std::ops::{Add, Mul};

/// A point on the complex plane, treating the real part as the
/// x-component and the imaginary part as the y-component.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ComplexNumber {
    /// The real (x) component.
    pub real: f64,
    /// The imaginary (y) component.
    pub imaginary: f64,
}

impl ComplexNumber {
    /// Constructor.
    pub fn new(real: f64, imaginary: f64) -> Self {
        ComplexNumber { real, imaginary }
    }

    /// Componentwise sum.
    #[inline]
    pub fn add(self, other: ComplexNumber) -> ComplexNumber {
        ComplexNumber {
            real: self.real + other.real,
            imaginary: self.imaginary + other.imaginary,
        }
    }

    /// `(a+bi)(c+di) = (ac-bd) + (ad+bc)i`
    #[inline]
    pub fn multiply(self, other: ComplexNumber) -> ComplexNumber {
        ComplexNumber {
            real: self.real * other.real - self.imaginary * other.imaginary,
            imaginary: self.real * other.imaginary + self.imaginary * other.real,
        }
    }

    /// `real² + imaginary²`
    #[inline]
    pub fn norm_squared(self) -> f64 {
        self.real * self.real + self.imaginary * self.imaginary
    }
}

impl Add for ComplexNumber {
    type Output = ComplexNumber;

    #[inline]
    fn add(self, other: ComplexNumber) -> ComplexNumber {
        ComplexNumber::add(self, other)
    }
}

impl Mul for ComplexNumber {
    type Output = ComplexNumber;

    #[inline]
    fn mul(self, other: ComplexNumber) -> ComplexNumber {
        self.multiply(other)
    }
}

impl Zero for ComplexNumber {
    fn zero() -> Self {
        ComplexNumber::new(0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        self.real == 0.0 && self.imaginary == 0.0
    }
}

impl From<Complex<f64>> for ComplexNumber {
    fn from(c: Complex<f64>) -> Self {
        ComplexNumber::new(c.re, c.im)
    }
}

impl From<ComplexNumber> for Complex<f64> {
    fn from(c: ComplexNumber) -> Self {
        Complex::new(c.real, c.imaginary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_componentwise() {
        let sum = ComplexNumber::new(1.5, -2.0).add(ComplexNumber::new(0.5, 3.0));
        assert_eq!(sum, ComplexNumber::new(2.0, 1.0));
    }

    #[test]
    fn multiply_follows_the_complex_product() {
        // (1+2i)(3+4i) = 3 + 4i + 6i + 8i² = -5 + 10i
        let product = ComplexNumber::new(1.0, 2.0).multiply(ComplexNumber::new(3.0, 4.0));
        assert_eq!(product, ComplexNumber::new(-5.0, 10.0));
    }

    #[test]
    fn i_squared_is_minus_one() {
        let i = ComplexNumber::new(0.0, 1.0);
        assert_eq!(i * i, ComplexNumber::new(-1.0, 0.0));
    }

    #[test]
    fn norm_squared_skips_the_root() {
        assert_eq!(ComplexNumber::new(3.0, 4.0).norm_squared(), 25.0);
        assert_eq!(ComplexNumber::zero().norm_squared(), 0.0);
    }

    #[test]
    fn operators_agree_with_num_complex() {
        let (a, b) = (Complex::new(0.25, -1.5), Complex::new(-0.75, 0.125));
        let ours = ComplexNumber::from(a) * ComplexNumber::from(b) + ComplexNumber::from(a);
        let theirs = a * b + a;
        assert_eq!(Complex::from(ours), theirs);
        assert_eq!(ComplexNumber::from(a).norm_squared(), a.norm_sqr());
    }
}
