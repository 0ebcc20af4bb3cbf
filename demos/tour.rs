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

use planar::log;
use planar::Vector2D;

fn main()
{
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Trace)
        .init()
        .unwrap();

    let a = Vector2D::new(3.0, 4.0);
    let b = Vector2D::new(1.0, 2.0);

    log::info!("a = {}, b = {}", a, b);
    log::info!("a + b = {}", a + b);
    log::info!("a - b = {}", a - b);
    log::info!("a * 2 = {}", a * 2.0);
    log::info!("a / 2 = {}", a / 2.0);
    log::info!("a / 0 = {}", a / 0.0);

    log::info!("|a| = {}", a.magnitude());
    log::info!("normalize(a) = {}", a.normalize());
    log::info!("normalize(0) = {}", Vector2D::ZERO.normalize());

    log::info!("distance(a, b) = {}", a.distance(b));
    log::info!("dot(a, b) = {}", a.dot(b));
    log::info!("angle(a) = {} degrees", a.angle());

    for angle in [0.0, 45.0, 90.0, 180.0].iter().copied() {
        log::info!(
            "from_angle({}) = {}, rotate(a, {}) = {}",
            angle,
            Vector2D::from_angle(angle),
            angle,
            a.rotate(angle)
        );
    }

    let mut c = a;
    c.negate();
    log::info!("negated in place: {} (was {})", c, a);
}
