//! Native objects held in the backend's registry.

use glam::{DAffine3, DVec3};
use hinge_foundation::{EntityId, EntityKind};

/// A simulation world.
#[derive(Clone, Debug, PartialEq)]
pub struct TpeWorld {
    /// World name.
    pub name: String,
    /// Simulated seconds elapsed.
    pub time: f64,
}

/// A model moving as one body.
#[derive(Clone, Debug, PartialEq)]
pub struct TpeModel {
    /// Model name.
    pub name: String,
    /// Placement in the world.
    pub pose: DAffine3,
    /// Linear velocity in world coordinates.
    pub linear_velocity: DVec3,
}

/// A link inside a model.
#[derive(Clone, Debug, PartialEq)]
pub struct TpeLink {
    /// Link name.
    pub name: String,
}

/// Shape geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Geometry {
    /// A capsule along the local z axis.
    Capsule {
        /// Cap and cylinder radius.
        radius: f64,
        /// Cylinder length.
        height: f64,
    },
    /// An axis-aligned box.
    Box {
        /// Edge lengths.
        size: DVec3,
    },
    /// A sphere.
    Sphere {
        /// Radius.
        radius: f64,
    },
}

/// A collision shape attached to a link.
#[derive(Clone, Debug, PartialEq)]
pub struct TpeShape {
    /// Shape name.
    pub name: String,
    /// Placement relative to the link.
    pub pose: DAffine3,
    /// What the shape looks like.
    pub geometry: Geometry,
}

/// A fixed joint. The link it moves is its parent in the registry.
#[derive(Clone, Debug, PartialEq)]
pub struct TpeJoint {
    /// Joint name.
    pub name: String,
    /// The link it holds on to, or `None` for the world.
    pub parent_link: Option<EntityId>,
}

/// Any native object.
#[derive(Clone, Debug, PartialEq)]
pub enum TpeEntity {
    /// A world.
    World(TpeWorld),
    /// A model.
    Model(TpeModel),
    /// A link.
    Link(TpeLink),
    /// A shape.
    Shape(TpeShape),
    /// A joint.
    Joint(TpeJoint),
}

macro_rules! projections {
    ($($variant:ident($native:ty) => $as_ref:ident, $as_mut:ident;)+) => {
        impl TpeEntity {
            $(
                #[doc = concat!("Returns the ", stringify!($native), " if this is one.")]
                #[must_use]
                pub fn $as_ref(&self) -> Option<&$native> {
                    match self {
                        Self::$variant(native) => Some(native),
                        _ => None,
                    }
                }

                #[doc = concat!("Returns the ", stringify!($native), " mutably if this is one.")]
                pub fn $as_mut(&mut self) -> Option<&mut $native> {
                    match self {
                        Self::$variant(native) => Some(native),
                        _ => None,
                    }
                }
            )+
        }
    };
}

projections! {
    World(TpeWorld) => as_world, as_world_mut;
    Model(TpeModel) => as_model, as_model_mut;
    Link(TpeLink) => as_link, as_link_mut;
    Shape(TpeShape) => as_shape, as_shape_mut;
    Joint(TpeJoint) => as_joint, as_joint_mut;
}

impl TpeEntity {
    /// The registry kind matching this object.
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::World(_) => EntityKind::World,
            Self::Model(_) => EntityKind::Model,
            Self::Link(_) => EntityKind::Link,
            Self::Shape(_) => EntityKind::Shape,
            Self::Joint(_) => EntityKind::Joint,
        }
    }

    /// The object's name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::World(world) => &world.name,
            Self::Model(model) => &model.name,
            Self::Link(link) => &link.name,
            Self::Shape(shape) => &shape.name,
            Self::Joint(joint) => &joint.name,
        }
    }
}
