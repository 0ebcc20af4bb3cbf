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

//! Conversions between this crate's vectors and the equivalent `glam`
//! types, for handing values to renderers which expect `glam` input.

use crate::dimen::{IVec2, UVec2, Vec2, Vector2D};

macro_rules! glam_conversions {
    ($ours:ty, $theirs:ty) => {
        impl From<$theirs> for $ours
        {
            #[inline]
            fn from(value: $theirs) -> Self
            {
                Self::new(value.x, value.y)
            }
        }

        impl From<$ours> for $theirs
        {
            #[inline]
            fn from(value: $ours) -> Self
            {
                <$theirs>::new(value.x, value.y)
            }
        }
    };
}

glam_conversions!(Vec2, glam::Vec2);
glam_conversions!(Vector2D, glam::DVec2);
glam_conversions!(IVec2, glam::IVec2);
glam_conversions!(UVec2, glam::UVec2);
