//! The standard feature catalog.
//!
//! Each module declares one or more features, the implementation trait a
//! backend provides for each, and the proxy methods the feature adds.
//!
//! | Feature | Requires |
//! |---|---|
//! | [`GetEngineInfo`] | |
//! | [`GetEntities`] | |
//! | [`ConstructEmptyWorld`], [`ConstructEmptyModel`], [`ConstructEmptyLink`] | |
//! | [`RemoveEntities`] | [`GetEntities`] |
//! | [`CapsuleShapeCast`], [`BoxShapeCast`], [`SphereShapeCast`] | |
//! | `Get*ShapeProperties`, `Set*ShapeProperties`, `Attach*Shape` | the matching cast |
//! | [`AttachFixedJoint`] | [`GetEntities`] |
//! | [`ModelKinematics`] | |
//! | [`ForwardStep`] | [`ModelKinematics`] |
//! | [`ExtensionData`] | |

mod box_shape;
mod capsule;
mod construct;
mod engine_info;
mod entities;
mod extension;
mod joint;
mod kinematics;
mod remove;
mod sphere;
mod step;

pub use box_shape::{
    AttachBoxShape, AttachBoxShapeImpl, BoxParams, BoxShapeCast, BoxShapeCastImpl,
    GetBoxShapeProperties, GetBoxShapePropertiesImpl, SetBoxShapeProperties,
    SetBoxShapePropertiesImpl,
};
pub use capsule::{
    AttachCapsuleShape, AttachCapsuleShapeImpl, CapsuleParams, CapsuleShapeCast,
    CapsuleShapeCastImpl, GetCapsuleShapeProperties, GetCapsuleShapePropertiesImpl,
    SetCapsuleShapeProperties, SetCapsuleShapePropertiesImpl,
};
pub use construct::{
    ConstructEmptyLink, ConstructEmptyLinkImpl, ConstructEmptyModel, ConstructEmptyModelImpl,
    ConstructEmptyWorld, ConstructEmptyWorldImpl, DEFAULT_LINK_NAME, DEFAULT_MODEL_NAME,
    DEFAULT_WORLD_NAME,
};
pub use engine_info::{GetEngineInfo, GetEngineInfoImpl};
pub use entities::{GetEntities, GetEntitiesImpl};
pub use extension::{ExtensionData, ExtensionDataImpl};
pub use joint::{AttachFixedJoint, AttachFixedJointImpl, DEFAULT_JOINT_NAME};
pub use kinematics::{ModelKinematics, ModelKinematicsImpl};
pub use remove::{RemoveEntities, RemoveEntitiesImpl};
pub use sphere::{
    AttachSphereShape, AttachSphereShapeImpl, GetSphereShapeProperties,
    GetSphereShapePropertiesImpl, SetSphereShapeProperties, SetSphereShapePropertiesImpl,
    SphereParams, SphereShapeCast, SphereShapeCastImpl,
};
pub use step::{ChangedPoses, ForwardStep, ForwardStepImpl, StepInput, StepOutput, TimeStep, WorldTime};
