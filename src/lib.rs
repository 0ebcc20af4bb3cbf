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

//! A small two-dimensional vector type.
//!
//! [Vector2] is a `Copy` pair of components with the usual arithmetic
//! operators. When the components are floating point, it also provides
//! magnitude, normalization, distance, dot product, angle conversion and
//! rotation.
//!
//! ```rust
//! use planar::Vector2D;
//!
//! let v = Vector2D::new(3.0, 4.0);
//!
//! assert_eq!(5.0, v.magnitude());
//! assert_eq!(Vector2D::new(4.0, 6.0), Vector2D::new(1.0, 2.0) + v);
//! assert_eq!(5.0, Vector2D::ZERO.distance(v));
//! ```
//!
//! No operation in this crate can fail. Division by zero produces infinite
//! or NaN components as per IEEE-754, and normalizing the zero vector returns
//! the zero vector.
//!
//! Degenerate cases are reported through the `log` crate at `trace` level.

pub use ::log as log;

/// Types representing vectors, and their arithmetic.
pub mod dimen;

// Geometric operations on floating point vectors, as inherent methods.
mod geometry;

/// Conversions to and from `glam` types.
#[cfg(feature = "glam")]
pub mod interop;

pub use crate::dimen::{IVec2, UVec2, Vec2, Vector2, Vector2D};
