//! The feature list the reference backend provides.

use hinge_feature::catalog::{
    AttachBoxShape, AttachBoxShapeImpl, AttachCapsuleShape, AttachCapsuleShapeImpl,
    AttachFixedJoint, AttachFixedJointImpl, AttachSphereShape, AttachSphereShapeImpl,
    BoxShapeCast, BoxShapeCastImpl, CapsuleShapeCast, CapsuleShapeCastImpl, ConstructEmptyLink,
    ConstructEmptyLinkImpl, ConstructEmptyModel, ConstructEmptyModelImpl, ConstructEmptyWorld,
    ConstructEmptyWorldImpl, ExtensionData, ExtensionDataImpl, ForwardStep, ForwardStepImpl,
    GetBoxShapeProperties, GetBoxShapePropertiesImpl, GetCapsuleShapeProperties,
    GetCapsuleShapePropertiesImpl, GetEngineInfo, GetEngineInfoImpl, GetEntities,
    GetEntitiesImpl, GetSphereShapeProperties, GetSphereShapePropertiesImpl, ModelKinematics,
    ModelKinematicsImpl, RemoveEntities, RemoveEntitiesImpl, SetBoxShapeProperties,
    SetBoxShapePropertiesImpl, SetCapsuleShapeProperties, SetCapsuleShapePropertiesImpl,
    SetSphereShapeProperties, SetSphereShapePropertiesImpl, SphereShapeCast, SphereShapeCastImpl,
};
use hinge_feature::feature_list;

feature_list! {
    /// Every feature in the standard catalog.
    pub struct TpeFeatures: TpeInterface {
        GetEngineInfo: GetEngineInfoImpl,
        GetEntities: GetEntitiesImpl,
        ConstructEmptyWorld: ConstructEmptyWorldImpl,
        ConstructEmptyModel: ConstructEmptyModelImpl,
        ConstructEmptyLink: ConstructEmptyLinkImpl,
        RemoveEntities: RemoveEntitiesImpl,
        CapsuleShapeCast: CapsuleShapeCastImpl,
        GetCapsuleShapeProperties: GetCapsuleShapePropertiesImpl,
        SetCapsuleShapeProperties: SetCapsuleShapePropertiesImpl,
        AttachCapsuleShape: AttachCapsuleShapeImpl,
        BoxShapeCast: BoxShapeCastImpl,
        GetBoxShapeProperties: GetBoxShapePropertiesImpl,
        SetBoxShapeProperties: SetBoxShapePropertiesImpl,
        AttachBoxShape: AttachBoxShapeImpl,
        SphereShapeCast: SphereShapeCastImpl,
        GetSphereShapeProperties: GetSphereShapePropertiesImpl,
        SetSphereShapeProperties: SetSphereShapePropertiesImpl,
        AttachSphereShape: AttachSphereShapeImpl,
        AttachFixedJoint: AttachFixedJointImpl,
        ModelKinematics: ModelKinematicsImpl,
        ForwardStep: ForwardStepImpl,
        ExtensionData: ExtensionDataImpl,
    }
}
