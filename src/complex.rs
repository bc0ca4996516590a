use std::{
    fmt::Display,
    hash::{Hash, Hasher},
    ops,
};

use ordered_float::OrderedFloat;

use crate::{error::SolveError, solver::SolveResult};

/// `0.0` as a complex number.
pub const ZERO: ComplexNumber = ComplexNumber::new(0.0, 0.0);
/// `1.0` as a complex number.
pub const ONE: ComplexNumber = ComplexNumber::new(1.0, 0.0);

/// Represents a complex number with real and imaginary parts.
///
/// Values are immutable: every arithmetic operation returns a new
/// `ComplexNumber` and leaves its operands untouched. Division is only
/// available through [`ComplexNumber::checked_div`], which reports a zero
/// divisor instead of producing `NaN` components.
#[derive(Debug, Clone, Copy)]
pub struct ComplexNumber {
    /// The real part of the number.
    pub real:      f64,
    /// The imaginary part of the number.
    pub imaginary: f64,
}

impl Display for ComplexNumber {
    /// Formats the number as the literal `<real> + <imaginary>i`.
    ///
    /// Negative imaginary parts are not rewritten into a subtraction; the
    /// output is always the two parts joined by ` + `, which keeps the
    /// rendering in the same shape the input parser accepts.
    ///
    /// # Example
    /// ```
    /// use lineq::complex::ComplexNumber;
    /// assert_eq!(ComplexNumber::new(3.0, -2.0).to_string(), "3 + -2i");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} + {}i", self.real, self.imaginary)
    }
}

impl ComplexNumber {
    /// Constructs a new complex number from real and imaginary components.
    ///
    /// # Parameters
    /// - `real`: The real part.
    /// - `imaginary`: The imaginary part.
    ///
    /// # Returns
    /// The new `ComplexNumber`.
    ///
    /// # Example
    /// ```
    /// use lineq::complex::ComplexNumber;
    /// let c = ComplexNumber::new(5.0, -1.0);
    /// assert_eq!(c.real, 5.0);
    /// assert_eq!(c.imaginary, -1.0);
    /// ```
    #[must_use]
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self { real, imaginary }
    }

    /// Returns `true` when both parts are exactly zero.
    ///
    /// This is a bitwise-exact comparison with no epsilon. It is the check
    /// the solver uses for singularity detection at the default tolerance,
    /// so a determinant that is merely close to zero does not count.
    ///
    /// # Example
    /// ```
    /// use lineq::complex::{ComplexNumber, ZERO};
    /// assert!(ZERO.is_zero());
    /// assert!(!ComplexNumber::new(1e-300, 0.0).is_zero());
    /// ```
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.real == 0.0 && self.imaginary == 0.0
    }

    /// Returns the complex conjugate of the number.
    ///
    /// # Example
    /// ```
    /// use lineq::complex::ComplexNumber;
    /// let c = ComplexNumber::new(1.0, 5.0);
    /// assert_eq!(c.conj(), ComplexNumber::new(1.0, -5.0));
    /// ```
    #[must_use]
    pub const fn conj(&self) -> Self {
        Self { real:      self.real,
               imaginary: -self.imaginary, }
    }

    /// Returns the squared magnitude (`real² + imaginary²`).
    ///
    /// This is the denominator of the division formula; division is defined
    /// exactly when it is non-zero.
    #[must_use]
    pub fn norm_sqr(&self) -> f64 {
        self.real.mul_add(self.real, self.imaginary * self.imaginary)
    }

    /// Divides the number by `rhs`, failing on a zero divisor.
    ///
    /// Uses the conjugate formula: `a / b = a·conj(b) / |b|²`.
    ///
    /// # Errors
    /// Returns `SolveError::DivisionByZero` when `rhs.norm_sqr()` is zero.
    ///
    /// # Example
    /// ```
    /// use lineq::complex::{ComplexNumber, ZERO};
    ///
    /// let a = ComplexNumber::new(4.0, 2.0);
    /// let b = ComplexNumber::new(2.0, 0.0);
    /// assert_eq!(a.checked_div(b).unwrap(), ComplexNumber::new(2.0, 1.0));
    /// assert!(a.checked_div(ZERO).is_err());
    /// ```
    pub fn checked_div(self, rhs: Self) -> SolveResult<Self> {
        let denom = rhs.norm_sqr();
        if denom == 0.0 {
            return Err(SolveError::DivisionByZero);
        }

        Ok(Self { real:      self.real.mul_add(rhs.real, self.imaginary * rhs.imaginary) / denom,
                  imaginary: self.imaginary
                                 .mul_add(rhs.real, -(self.real * rhs.imaginary))
                             / denom, })
    }
}

impl ops::Neg for ComplexNumber {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { real:      -self.real,
               imaginary: -self.imaginary, }
    }
}

impl ops::Add for ComplexNumber {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { real:      self.real + rhs.real,
               imaginary: self.imaginary + rhs.imaginary, }
    }
}

impl ops::AddAssign for ComplexNumber {
    fn add_assign(&mut self, rhs: Self) {
        self.real += rhs.real;
        self.imaginary += rhs.imaginary;
    }
}

impl ops::Sub for ComplexNumber {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { real:      self.real - rhs.real,
               imaginary: self.imaginary - rhs.imaginary, }
    }
}

impl ops::SubAssign for ComplexNumber {
    fn sub_assign(&mut self, rhs: Self) {
        self.real -= rhs.real;
        self.imaginary -= rhs.imaginary;
    }
}

impl ops::Mul for ComplexNumber {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self { real:      self.real
                              .mul_add(rhs.real, -(self.imaginary * rhs.imaginary)),
               imaginary: self.real.mul_add(rhs.imaginary, self.imaginary * rhs.real), }
    }
}

impl ops::MulAssign for ComplexNumber {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T> From<T> for ComplexNumber where T: Into<f64>
{
    fn from(value: T) -> Self {
        Self { real:      value.into(),
               imaginary: 0.0, }
    }
}

impl PartialEq for ComplexNumber {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.real) == OrderedFloat(other.real)
        && OrderedFloat(self.imaginary) == OrderedFloat(other.imaginary)
    }
}

impl Eq for ComplexNumber {}

impl Hash for ComplexNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(self.real).hash(state);
        OrderedFloat(self.imaginary).hash(state);
    }
}
