/*
 *  Copyright 2021 QuantumBadger
 *
 *  Licensed under the Apache License, Version 2.0 (the "License");
 *  you may not use this file except in compliance with the License.
 *  You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 *  Unless required by applicable law or agreed to in writing, software
 *  distributed under the License is distributed on an "AS IS" BASIS,
 *  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *  See the License for the specific language governing permissions and
 *  limitations under the License.
 */

use num_traits::Float;

use crate::dimen::Vector2;

/// Angles passed to and returned from these methods are in degrees, unless
/// the method name ends in `_radians`. Positive angles are counter-clockwise
/// in a Cartesian frame where the y axis points up, and an angle of zero
/// points along the positive x axis.
impl<T: Float> Vector2<T>
{
    /// Returns a unit vector pointing in the direction of `angle_degrees`.
    ///
    /// ```rust
    /// # use planar::dimen::Vector2D;
    /// assert_eq!(Vector2D::new(1.0, 0.0), Vector2D::from_angle(0.0));
    /// ```
    #[inline]
    #[must_use]
    pub fn from_angle(angle_degrees: T) -> Self
    {
        Self::from_angle_radians(angle_degrees.to_radians())
    }

    #[inline]
    #[must_use]
    pub fn from_angle_radians(angle_radians: T) -> Self
    {
        let (sin, cos) = angle_radians.sin_cos();
        Vector2::new(cos, sin)
    }

    /// Returns the square of the Euclidean length of this vector.
    #[inline]
    #[must_use]
    pub fn magnitude_squared(self) -> T
    {
        self.x * self.x + self.y * self.y
    }

    /// Returns the Euclidean length of this vector. NaN components propagate.
    #[inline]
    #[must_use]
    pub fn magnitude(self) -> T
    {
        self.magnitude_squared().sqrt()
    }

    /// Returns a vector of length one pointing in the same direction.
    ///
    /// If the magnitude of this vector is exactly zero, the vector is returned
    /// unchanged rather than producing NaN components. See
    /// [Vector2::try_normalize] to detect this case.
    #[must_use]
    pub fn normalize(self) -> Self
    {
        let magnitude = self.magnitude();

        if magnitude == T::zero() {
            log::trace!("Not normalizing zero-magnitude vector");
            return self;
        }

        Vector2::new(self.x / magnitude, self.y / magnitude)
    }

    /// Returns a vector of length one pointing in the same direction, or
    /// `None` if the vector has zero magnitude or the result is not finite.
    #[must_use]
    pub fn try_normalize(self) -> Option<Self>
    {
        let magnitude = self.magnitude();

        if magnitude == T::zero() {
            log::trace!("Cannot normalize zero-magnitude vector");
            return None;
        }

        let result = Vector2::new(self.x / magnitude, self.y / magnitude);

        if !result.x.is_finite() || !result.y.is_finite() {
            log::trace!("Normalization of non-finite vector has no direction");
            return None;
        }

        Some(result)
    }

    /// Treating both vectors as points, returns the distance between them.
    #[inline]
    #[must_use]
    pub fn distance(self, other: Self) -> T
    {
        (other - self).magnitude()
    }

    #[inline]
    #[must_use]
    pub fn distance_squared(self, other: Self) -> T
    {
        (other - self).magnitude_squared()
    }

    /// Returns the dot product of the two vectors. This is zero when the
    /// vectors are orthogonal, or when either is the zero vector.
    #[inline]
    #[must_use]
    pub fn dot(self, other: Self) -> T
    {
        self.x * other.x + self.y * other.y
    }

    /// Returns the z component of the cross product of the two vectors,
    /// extended into three dimensions with `z = 0`. Positive when `other` is
    /// counter-clockwise from `self`.
    #[inline]
    #[must_use]
    pub fn cross(self, other: Self) -> T
    {
        self.x * other.y - self.y * other.x
    }

    /// Returns a new vector rotated counter-clockwise by `angle_degrees`.
    #[inline]
    #[must_use]
    pub fn rotate(self, angle_degrees: T) -> Self
    {
        self.rotate_radians(angle_degrees.to_radians())
    }

    #[must_use]
    pub fn rotate_radians(self, angle_radians: T) -> Self
    {
        let (sin, cos) = angle_radians.sin_cos();

        Vector2::new(
            self.x * cos - self.y * sin,
            self.x * sin + self.y * cos
        )
    }

    /// Returns the direction of this vector, in degrees, in the range
    /// `-180..=180`.
    #[inline]
    #[must_use]
    pub fn angle(self) -> T
    {
        self.angle_radians().to_degrees()
    }

    #[inline]
    #[must_use]
    pub fn angle_radians(self) -> T
    {
        self.y.atan2(self.x)
    }

    /// Returns the signed angle, in degrees, needed to rotate `self` onto the
    /// direction of `other`.
    #[inline]
    #[must_use]
    pub fn angle_between(self, other: Self) -> T
    {
        self.cross(other).atan2(self.dot(other)).to_degrees()
    }

    /// Linearly interpolates between `self` (at `t = 0`) and `other`
    /// (at `t = 1`).
    #[inline]
    #[must_use]
    pub fn lerp(self, other: Self, t: T) -> Self
    {
        self + (other - self) * t
    }
}

#[cfg(test)]
mod test
{
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::dimen::{Vec2, Vector2D};

    #[test]
    fn test_magnitude()
    {
        assert_eq!(5.0, Vector2D::new(3.0, 4.0).magnitude());
        assert_eq!(25.0, Vector2D::new(-3.0, 4.0).magnitude_squared());
        assert_eq!(0.0, Vector2D::ZERO.magnitude());
        assert_eq!(5.0, Vec2::new(0.0, -5.0).magnitude());
        assert!(Vector2D::new(f64::NAN, 1.0).magnitude().is_nan());
    }

    #[test]
    fn test_normalize()
    {
        let n = Vector2D::new(3.0, 4.0).normalize();
        assert_relative_eq!(0.6, n.x);
        assert_relative_eq!(0.8, n.y);

        let n = Vec2::new(-10.0, 0.0).normalize();
        assert_eq!(Vec2::new(-1.0, 0.0), n);

        let zero = Vector2D::ZERO.normalize();
        assert_eq!(Vector2D::ZERO, zero);
        assert!(!zero.x.is_nan());
    }

    #[test]
    fn test_try_normalize()
    {
        assert_eq!(None, Vector2D::ZERO.try_normalize());
        assert_eq!(None, Vector2D::new(f64::INFINITY, 0.0).try_normalize());
        assert_eq!(
            Some(Vector2D::new(0.0, 1.0)),
            Vector2D::new(0.0, 2.0).try_normalize()
        );
    }

    #[test]
    fn test_from_angle()
    {
        assert_eq!(Vector2D::new(1.0, 0.0), Vector2D::from_angle(0.0));

        let v = Vector2D::from_angle(90.0);
        assert_abs_diff_eq!(0.0, v.x, epsilon = 1e-12);
        assert_abs_diff_eq!(1.0, v.y, epsilon = 1e-12);

        let v = Vector2D::from_angle(180.0);
        assert_abs_diff_eq!(-1.0, v.x, epsilon = 1e-12);
        assert_abs_diff_eq!(0.0, v.y, epsilon = 1e-12);

        let v = Vec2::from_angle_radians(std::f32::consts::FRAC_PI_2);
        assert_abs_diff_eq!(0.0, v.x, epsilon = 1e-6);
        assert_abs_diff_eq!(1.0, v.y, epsilon = 1e-6);
    }

    #[test]
    fn test_distance()
    {
        let origin = Vector2D::ZERO;
        let p = Vector2D::new(3.0, 4.0);

        assert_eq!(5.0, origin.distance(p));
        assert_eq!(5.0, p.distance(origin));
        assert_eq!(25.0, p.distance_squared(origin));
        assert_eq!(0.0, p.distance(p));
    }

    #[test]
    fn test_dot_and_cross()
    {
        let x = Vector2D::new(1.0, 0.0);
        let y = Vector2D::new(0.0, 1.0);

        assert_eq!(0.0, x.dot(y));
        assert_eq!(11.0, Vector2D::new(1.0, 2.0).dot(Vector2D::new(3.0, 4.0)));
        assert_eq!(-1.0, x.dot(-x));

        assert_eq!(1.0, x.cross(y));
        assert_eq!(-1.0, y.cross(x));
        assert_eq!(0.0, x.cross(x * 3.0));
    }

    #[test]
    fn test_rotate()
    {
        let v = Vector2D::new(1.0, 0.0);

        assert_eq!(v, v.rotate(0.0));

        let r = v.rotate(90.0);
        assert_abs_diff_eq!(0.0, r.x, epsilon = 1e-12);
        assert_abs_diff_eq!(1.0, r.y, epsilon = 1e-12);

        let r = Vector2D::new(2.0, 1.0).rotate(-90.0);
        assert_abs_diff_eq!(1.0, r.x, epsilon = 1e-12);
        assert_abs_diff_eq!(-2.0, r.y, epsilon = 1e-12);

        let r = Vector2D::new(3.0, 4.0).rotate(37.0);
        assert_relative_eq!(5.0, r.magnitude(), epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_does_not_modify_input()
    {
        let v = Vector2D::new(1.0, 2.0);
        let _ = v.rotate(45.0);
        assert_eq!(Vector2D::new(1.0, 2.0), v);
    }

    #[test]
    fn test_angle()
    {
        assert_eq!(0.0, Vector2D::new(5.0, 0.0).angle());
        assert_relative_eq!(90.0, Vector2D::new(0.0, 2.0).angle());
        assert_relative_eq!(-45.0, Vector2D::new(1.0, -1.0).angle());
        assert_relative_eq!(180.0, Vector2D::new(-1.0, 0.0).angle());

        let x = Vector2D::new(1.0, 0.0);
        let y = Vector2D::new(0.0, 3.0);
        assert_relative_eq!(90.0, x.angle_between(y));
        assert_relative_eq!(-90.0, y.angle_between(x));
        assert_eq!(0.0, x.angle_between(x));
    }

    #[test]
    fn test_lerp()
    {
        let a = Vector2D::ZERO;
        let b = Vector2D::new(10.0, 20.0);

        assert_eq!(a, a.lerp(b, 0.0));
        assert_eq!(b, a.lerp(b, 1.0));
        assert_eq!(Vector2D::new(2.5, 5.0), a.lerp(b, 0.25));
    }
}
