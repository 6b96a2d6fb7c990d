//! Rapier-backed character controller against an immutable static world.
//!
//! Collision resolution is Rapier's `KinematicCharacterController`; this module only builds
//! the query world and adapts the controller to [`CharacterController`].
//!
//! Design goals
//! - Deterministic: given the same inputs (sorted by `id`), build identical in-memory sets.
//! - Query-only: no dynamics step, the world never changes after construction.

// Re-export Rapier so the driver can name Rapier types without depending on it directly.
pub use rapier3d;

use rapier3d::{
    control::{CharacterAutostep, CharacterLength, KinematicCharacterController},
    na::{Translation3, UnitQuaternion},
    prelude::*,
};

use crate::{
    CharacterController, Vec3,
    constants::{DEFAULT_CAPSULE_HALF_HEIGHT, DEFAULT_CAPSULE_RADIUS, DEFAULT_TICK},
};

/// Downward probe used to find the ground at spawn (meters).
const SPAWN_PROBE_DISTANCE: f32 = 0.05;

/// Canonical definition of an immutable world collider.
///
/// Conventions
/// - Units are meters.
/// - Rotation is a unit quaternion.
/// - For planes, the normal is derived from the pose: `normal = rotation * +Y`.
#[derive(Clone, Debug)]
pub struct WorldStaticDef {
    /// Stable unique identifier used to ensure deterministic insertion order.
    pub id: u32,
    /// World-space translation.
    pub translation: Vector<f32>,
    /// World-space rotation (unit quaternion).
    pub rotation: UnitQuaternion<f32>,
    /// Collider shape parameters.
    pub shape: ColliderShapeDef,
}

impl WorldStaticDef {
    /// Horizontal floor through the origin.
    pub fn floor(id: u32) -> Self {
        Self {
            id,
            translation: Vector::zeros(),
            rotation: UnitQuaternion::identity(),
            shape: ColliderShapeDef::Plane {
                offset_along_normal: 0.0,
            },
        }
    }
}

/// Supported static collider shapes.
#[derive(Clone, Debug)]
pub enum ColliderShapeDef {
    /// Infinite plane (half-space), offset along its pose-derived normal.
    Plane { offset_along_normal: f32 },

    /// Oriented cuboid with given half-extents (meters). Rotate it to get a ramp.
    Cuboid { half_extents: Vector<f32> },

    /// Sphere/ball (meters).
    Sphere { radius: f32 },
}

/// Y-aligned capsule for the character (meters).
///
/// `half_height` is the half-length of the cylinder section, so the total height is
/// `2 * half_height + 2 * radius`.
#[derive(Clone, Copy, Debug)]
pub struct CapsuleSpec {
    pub radius: f32,
    pub half_height: f32,
}

impl Default for CapsuleSpec {
    fn default() -> Self {
        Self {
            radius: DEFAULT_CAPSULE_RADIUS,
            half_height: DEFAULT_CAPSULE_HALF_HEIGHT,
        }
    }
}

/// In-memory Rapier structures needed for KCC queries against a static world.
pub struct RapierQueryWorld {
    bodies: RigidBodySet,
    colliders: ColliderSet,
    broad_phase: BroadPhaseBvh,
    narrow_phase: NarrowPhase,
}

impl RapierQueryWorld {
    /// Build a query world from static collider definitions.
    ///
    /// The input is sorted by `id` before insertion. NaN/invalid values should be rejected by
    /// the caller.
    pub fn build(mut defs: Vec<WorldStaticDef>, dt: f32) -> Self {
        defs.sort_by_key(|d| d.id);

        let bodies = RigidBodySet::new();
        let mut colliders = ColliderSet::new();
        let mut modified_colliders = Vec::with_capacity(defs.len());

        for def in &defs {
            let mut collider = collider_from_def(def);
            if !matches!(def.shape, ColliderShapeDef::Plane { .. }) {
                let iso = Isometry::from_parts(Translation3::from(def.translation), def.rotation);
                collider.set_position(iso);
            }
            modified_colliders.push(colliders.insert(collider));
        }

        let mut broad_phase = BroadPhaseBvh::new();
        let mut events = Vec::new();
        broad_phase.update(
            &IntegrationParameters {
                dt,
                ..IntegrationParameters::default()
            },
            &colliders,
            &bodies,
            &modified_colliders,
            &[],
            &mut events,
        );

        log::debug!("built static query world with {} colliders", colliders.len());

        Self {
            bodies,
            colliders,
            broad_phase,
            narrow_phase: NarrowPhase::default(),
        }
    }

    /// Borrowed `QueryPipeline` for scene queries and the KCC.
    pub fn query_pipeline<'a>(&'a self, filter: QueryFilter<'a>) -> QueryPipeline<'a> {
        self.broad_phase.as_query_pipeline(
            self.narrow_phase.query_dispatcher(),
            &self.bodies,
            &self.colliders,
            filter,
        )
    }
}

/// Build a Rapier collider from a `WorldStaticDef`.
///
/// Planes are placed directly from their normal and offset. Other shapes are created at the
/// origin and posed by the caller.
fn collider_from_def(def: &WorldStaticDef) -> Collider {
    match &def.shape {
        ColliderShapeDef::Plane {
            offset_along_normal,
        } => {
            // n ⋅ x = dist, with dist measured from the pose translation.
            let n = def.rotation * Vector::y();
            let dist = n.dot(&def.translation) + *offset_along_normal;
            let unit_n = UnitVector::new_normalize(n);

            ColliderBuilder::new(SharedShape::new(HalfSpace::new(unit_n)))
                .translation(unit_n.into_inner() * dist)
                .build()
        }

        ColliderShapeDef::Cuboid { half_extents } => {
            ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z).build()
        }

        ColliderShapeDef::Sphere { radius } => ColliderBuilder::ball(*radius).build(),
    }
}

/// A capsule character moved by Rapier's kinematic character controller.
pub struct RapierCharacter<'w> {
    world: &'w RapierQueryWorld,
    kcc: KinematicCharacterController,
    shape: Capsule,
    position: Vec3,
    grounded: bool,
}

impl<'w> RapierCharacter<'w> {
    /// Place a character with its capsule center at `spawn` and probe for ground below it.
    pub fn spawn(world: &'w RapierQueryWorld, capsule: CapsuleSpec, spawn: Vec3) -> Self {
        let kcc = KinematicCharacterController {
            autostep: Some(CharacterAutostep {
                include_dynamic_bodies: false,
                max_height: CharacterLength::Relative(0.4),
                ..CharacterAutostep::default()
            }),
            offset: CharacterLength::Relative(0.025),
            ..KinematicCharacterController::default()
        };

        let mut character = Self {
            world,
            kcc,
            shape: Capsule::new_y(capsule.half_height, capsule.radius),
            position: spawn,
            grounded: false,
        };
        character.move_by(
            Vec3::new(0.0, -SPAWN_PROBE_DISTANCE, 0.0),
            DEFAULT_TICK.as_secs_f32(),
        );
        character
    }
}

impl CharacterController for RapierCharacter<'_> {
    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn move_by(&mut self, displacement: Vec3, dt: f32) {
        let query_pipeline = self.world.query_pipeline(QueryFilter::only_fixed());
        let pose = Isometry::translation(self.position.x, self.position.y, self.position.z);

        let correction = self.kcc.move_shape(
            dt,
            &query_pipeline,
            &self.shape,
            &pose,
            displacement,
            |_| {},
        );

        self.position += correction.translation;

        if self.grounded != correction.grounded {
            log::debug!(
                "grounded {} -> {} at ({:.3}, {:.3}, {:.3})",
                self.grounded,
                correction.grounded,
                self.position.x,
                self.position.y,
                self.position.z
            );
        }
        self.grounded = correction.grounded;
    }

    fn position(&self) -> Vec3 {
        self.position
    }
}
