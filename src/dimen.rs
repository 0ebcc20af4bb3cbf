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

use std::fmt::{Display, Formatter};
use std::ops::{
    Add,
    AddAssign,
    Div,
    DivAssign,
    Mul,
    MulAssign,
    Neg,
    Sub,
    SubAssign
};

use num_traits::Zero;

/// A vector with two f64 values. This is the main type of the crate.
pub type Vector2D = Vector2<f64>;

/// A vector with two f32 values.
pub type Vec2 = Vector2<f32>;

/// A vector with two i32 values.
pub type IVec2 = Vector2<i32>;

/// A vector with two u32 values.
pub type UVec2 = Vector2<u32>;

/// A vector containing two numeric values. This may represent a direction,
/// a displacement, or a point.
///
/// `Vector2` is a plain `Copy` value: every operation returns a new vector
/// and leaves its inputs untouched, with the exception of
/// [Vector2::negate] and the `*Assign` operators, which take `&mut self`.
#[repr(C)]
#[derive(PartialEq, Eq, Clone, Copy, Hash, Debug, Default)]
pub struct Vector2<T>
{
    /// The horizontal component of the vector.
    pub x: T,
    /// The vertical component of the vector.
    pub y: T
}

impl<T> Vector2<T>
{
    /// Instantiates a new `Vector2` from the specified horizontal and vertical
    /// components.
    #[inline]
    #[must_use]
    pub const fn new(x: T, y: T) -> Self
    {
        Vector2 { x, y }
    }
}

impl<T: Zero> Vector2<T>
{
    /// Returns a vector with both components set to zero.
    #[inline]
    #[must_use]
    pub fn zero() -> Self
    {
        Vector2::new(T::zero(), T::zero())
    }

    /// Returns `true` if both components are exactly zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool
    {
        self.x.is_zero() && self.y.is_zero()
    }
}

impl Vector2<f32>
{
    /// A vector containing `(0, 0)`.
    pub const ZERO: Vec2 = Vector2::new(0.0, 0.0);

    /// Returns a new vector with each component converted to `f64`.
    #[inline]
    #[must_use]
    pub fn into_f64(self) -> Vector2D
    {
        Vector2::new(self.x as f64, self.y as f64)
    }
}

impl Vector2<f64>
{
    /// A vector containing `(0, 0)`.
    pub const ZERO: Vector2D = Vector2::new(0.0, 0.0);

    /// Returns a new vector with each component converted to `f32`.
    #[inline]
    #[must_use]
    pub fn into_f32(self) -> Vec2
    {
        Vector2::new(self.x as f32, self.y as f32)
    }
}

impl Vector2<i32>
{
    /// A vector containing `(0, 0)`.
    pub const ZERO: IVec2 = Vector2::new(0, 0);

    /// Returns a new vector with each component converted to `f32`.
    #[inline]
    #[must_use]
    pub fn into_f32(self) -> Vec2
    {
        Vector2::new(self.x as f32, self.y as f32)
    }

    /// Returns a new vector with each component converted to `f64`.
    #[inline]
    #[must_use]
    pub fn into_f64(self) -> Vector2D
    {
        Vector2::new(self.x as f64, self.y as f64)
    }
}

impl Vector2<u32>
{
    /// A vector containing `(0, 0)`.
    pub const ZERO: UVec2 = Vector2::new(0, 0);
}

impl<T: Copy + Neg<Output = T>> Vector2<T>
{
    /// Returns a new vector pointing in the opposite direction. Equivalent to
    /// the unary `-` operator.
    #[inline]
    #[must_use]
    pub fn negated(self) -> Self
    {
        Vector2::new(-self.x, -self.y)
    }

    /// Flips the sign of both components in place, and returns the same
    /// (now mutated) vector so that calls may be chained.
    ///
    /// This is the only operation which modifies its receiver. Use
    /// [Vector2::negated] to obtain a new vector instead.
    ///
    /// ```rust
    /// # use planar::dimen::Vector2D;
    /// let mut v = Vector2D::new(1.0, -2.0);
    /// v.negate();
    /// assert_eq!(v, Vector2D::new(-1.0, 2.0));
    /// ```
    #[inline]
    pub fn negate(&mut self) -> &mut Self
    {
        self.x = -self.x;
        self.y = -self.y;
        self
    }

    /// Rotates the vector by 90 degrees in the clockwise direction, assuming
    /// a Cartesian frame where the y axis points up.
    #[inline]
    #[must_use]
    pub fn rotate_90_degrees_clockwise(self) -> Self
    {
        Vector2::new(self.y, -self.x)
    }

    /// Rotates the vector by 90 degrees in the anti-clockwise direction,
    /// assuming a Cartesian frame where the y axis points up.
    #[inline]
    #[must_use]
    pub fn rotate_90_degrees_anticlockwise(self) -> Self
    {
        Vector2::new(-self.y, self.x)
    }
}

impl<T: Display> Display for Vector2<T>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T> From<(T, T)> for Vector2<T>
{
    #[inline]
    fn from(value: (T, T)) -> Self
    {
        Vector2::new(value.0, value.1)
    }
}

impl<T> From<[T; 2]> for Vector2<T>
{
    #[inline]
    fn from(value: [T; 2]) -> Self
    {
        let [x, y] = value;
        Vector2::new(x, y)
    }
}

impl<T> From<Vector2<T>> for (T, T)
{
    #[inline]
    fn from(value: Vector2<T>) -> Self
    {
        (value.x, value.y)
    }
}

impl<T> From<Vector2<T>> for [T; 2]
{
    #[inline]
    fn from(value: Vector2<T>) -> Self
    {
        [value.x, value.y]
    }
}

impl<T: Add<Output = T>> Add for Vector2<T>
{
    type Output = Vector2<T>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output
    {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: AddAssign> AddAssign for Vector2<T>
{
    #[inline]
    fn add_assign(&mut self, rhs: Self)
    {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<T: Sub<Output = T>> Sub for Vector2<T>
{
    type Output = Vector2<T>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output
    {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: SubAssign> SubAssign for Vector2<T>
{
    #[inline]
    fn sub_assign(&mut self, rhs: Self)
    {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Vector2<T>
{
    type Output = Vector2<T>;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output
    {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Copy + MulAssign> MulAssign<T> for Vector2<T>
{
    #[inline]
    fn mul_assign(&mut self, rhs: T)
    {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Mul<Vec2> for f32
{
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: Vec2) -> Self::Output
    {
        rhs * self
    }
}

impl Mul<Vector2D> for f64
{
    type Output = Vector2D;

    #[inline]
    fn mul(self, rhs: Vector2D) -> Self::Output
    {
        rhs * self
    }
}

/// Divides each component by `rhs`.
///
/// For floating point components, dividing by zero follows IEEE-754: the
/// result is infinite, or NaN where the component is itself zero.
impl<T: Copy + Div<Output = T>> Div<T> for Vector2<T>
{
    type Output = Vector2<T>;

    #[inline]
    fn div(self, rhs: T) -> Self::Output
    {
        Vector2::new(self.x / rhs, self.y / rhs)
    }
}

impl<T: Copy + DivAssign> DivAssign<T> for Vector2<T>
{
    #[inline]
    fn div_assign(&mut self, rhs: T)
    {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl<T: Neg<Output = T>> Neg for Vector2<T>
{
    type Output = Vector2<T>;

    #[inline]
    fn neg(self) -> Self::Output
    {
        Vector2::new(-self.x, -self.y)
    }
}
