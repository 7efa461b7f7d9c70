use std::ops::{Add, Mul, Sub};

// Hand-rolled instead of pulling in num-complex; f64 is the precision seam,
// so a deeper-zoom representation only has to replace this type.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// Modulus: `sqrt(real² + imag²)`.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Principal-branch power with a real exponent, via polar form:
    /// `r^p * (cos(p·θ) + i·sin(p·θ))` with `θ = atan2(imag, real)`.
    #[must_use]
    pub fn powf(self, exponent: f64) -> Self {
        let r = self.magnitude();
        let theta = self.imag.atan2(self.real);
        let scale = r.powf(exponent);
        let angle = exponent * theta;

        Self {
            real: scale * angle.cos(),
            imag: scale * angle.sin(),
        }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            real: self.real - other.real,
            imag: self.imag - other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}
