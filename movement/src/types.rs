/*!
Math aliases shared by the movement modules.

No algorithms live here. Everything is expressed with nalgebra
single-precision types, the same ones Rapier uses for its scene queries, so velocities and
displacements can be handed to the character controller without conversion.

Axis convention
- `+Y` is up. `velocity.y` is vertical speed, `x`/`z` form the horizontal plane.
- In the character's local frame `+X` is rightward and `+Z` is forward.
*/

use nalgebra as na;

pub type Vec3 = na::Vector3<f32>;
pub type Quat = na::UnitQuaternion<f32>;
