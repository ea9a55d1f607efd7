//! The reference backend.
//!
//! Every native object lives in one [`EntityRegistry`]. The engine is the
//! root placeholder the registry reserves at id 0; the first world built
//! fills it, so the engine and its first world share an id. Later worlds
//! are recorded under id 0 but are enumerated by kind, not by parent.

use glam::DVec3;
use hinge_data::CompositeData;
use hinge_feature::Implementation;
use hinge_feature::catalog::{
    AttachBoxShapeImpl, AttachCapsuleShapeImpl, AttachFixedJointImpl, AttachSphereShapeImpl,
    BoxParams, BoxShapeCastImpl, CapsuleParams, CapsuleShapeCastImpl, ChangedPoses,
    ConstructEmptyLinkImpl, ConstructEmptyModelImpl, ConstructEmptyWorldImpl, ExtensionDataImpl,
    ForwardStepImpl, GetBoxShapePropertiesImpl, GetCapsuleShapePropertiesImpl,
    GetEngineInfoImpl, GetEntitiesImpl, GetSphereShapePropertiesImpl, ModelKinematicsImpl,
    RemoveEntitiesImpl, SetBoxShapePropertiesImpl, SetCapsuleShapePropertiesImpl,
    SetSphereShapePropertiesImpl, SphereParams, SphereShapeCastImpl, StepInput, StepOutput,
    TimeStep, WorldTime,
};
use hinge_foundation::{
    EntityId, EntityKind, Error, ErrorKind, FeaturePolicy3d, Identity, Policy, Result,
};
use hinge_registry::EntityRegistry;

use crate::config::TpeConfig;
use crate::native::{
    Geometry, TpeEntity, TpeJoint, TpeLink, TpeModel, TpeShape, TpeWorld,
};

type P3 = FeaturePolicy3d;

/// A kinematic backend for three dimensions in double precision.
#[derive(Debug)]
pub struct TpeBackend {
    config: TpeConfig,
    registry: EntityRegistry<TpeEntity>,
    engine_index: usize,
}

impl Default for TpeBackend {
    fn default() -> Self {
        Self::new(TpeConfig::default())
    }
}

macro_rules! natives {
    ($($get:ident $(/ $get_mut:ident)?: $kind:ident => $native:ty, $as_ref:ident $(/ $as_mut:ident)?;)+) => {
        impl TpeBackend {
            $(
                fn $get(&self, id: EntityId) -> Result<&$native> {
                    self.registry
                        .get_kind(id, EntityKind::$kind)?
                        .$as_ref()
                        .ok_or_else(|| mismatched(id, EntityKind::$kind))
                }

                $(
                    fn $get_mut(&mut self, id: EntityId) -> Result<&mut $native> {
                        self.registry
                            .get_kind_mut(id, EntityKind::$kind)?
                            .$as_mut()
                            .ok_or_else(|| mismatched(id, EntityKind::$kind))
                    }
                )?
            )+
        }
    };
}

natives! {
    world / world_mut: World => TpeWorld, as_world / as_world_mut;
    model / model_mut: Model => TpeModel, as_model / as_model_mut;
    link: Link => TpeLink, as_link;
    shape / shape_mut: Shape => TpeShape, as_shape / as_shape_mut;
    joint / joint_mut: Joint => TpeJoint, as_joint / as_joint_mut;
}

fn mismatched(id: EntityId, kind: EntityKind) -> Error {
    Error::new(ErrorKind::Internal(format!(
        "slot {id} is registered as a {kind} but holds another object"
    )))
}

fn not_a(shape: EntityId, geometry: &str) -> Error {
    Error::unsupported(format!("shape {shape} is not a {geometry}"))
}

impl TpeBackend {
    /// Creates a backend with no engine initiated yet.
    #[must_use]
    pub fn new(config: TpeConfig) -> Self {
        let registry = EntityRegistry::new(config.registry.clone());
        Self {
            config,
            registry,
            engine_index: 0,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &TpeConfig {
        &self.config
    }

    /// Returns the registry holding every native object.
    #[must_use]
    pub fn registry(&self) -> &EntityRegistry<TpeEntity> {
        &self.registry
    }

    fn add(&mut self, parent: EntityId, native: TpeEntity) -> Result<EntityId> {
        let kind = native.kind();
        let identity = self.registry.register_owned(Some(parent), kind, native)?;
        tracing::debug!(id = %identity, %parent, %kind, "constructed entity");
        Ok(identity.id())
    }

    fn add_shape(
        &mut self,
        link: EntityId,
        name: &str,
        pose: <P3 as Policy>::Pose,
        geometry: Geometry,
    ) -> Result<EntityId> {
        self.link(link)?;
        let shape = TpeShape {
            name: name.to_string(),
            pose,
            geometry,
        };
        self.add(link, TpeEntity::Shape(shape))
    }

    /// Entities of `kind` that `parent` enumerates, in creation order.
    ///
    /// Worlds are enumerated by kind, since every world after the first
    /// hangs off the first.
    fn siblings(&self, parent: EntityId, kind: EntityKind) -> Vec<EntityId> {
        if kind == EntityKind::World {
            self.registry
                .ids_of_kind(EntityKind::World)
                .filter(|id| self.registry.get(*id).is_some())
                .collect()
        } else {
            self.registry.children_of_kind(parent, kind).collect()
        }
    }

    fn geometry(&self, shape: EntityId) -> Option<Geometry> {
        self.shape(shape).ok().map(|shape| shape.geometry)
    }
}

impl Implementation<P3> for TpeBackend {
    fn initiate_engine(&mut self, engine_id: usize) -> Identity {
        self.engine_index = engine_id;
        let identity = self.registry.initiate_engine();
        tracing::debug!(engine_id, %identity, name = %self.config.engine_name, "initiated engine");
        identity
    }
}

impl GetEngineInfoImpl<P3> for TpeBackend {
    fn engine_name(&self, _engine: EntityId) -> String {
        self.config.engine_name.clone()
    }

    fn engine_index(&self, _engine: EntityId) -> usize {
        self.engine_index
    }
}

impl GetEntitiesImpl<P3> for TpeBackend {
    fn entity_name(&self, id: EntityId) -> Result<String> {
        self.registry
            .get(id)
            .map(|native| native.name().to_string())
            .ok_or_else(|| Error::entity_not_found(id))
    }

    fn entity_index(&self, id: EntityId) -> Result<usize> {
        let native = self
            .registry
            .get(id)
            .ok_or_else(|| Error::entity_not_found(id))?;
        let parent = self.registry.parent_of(id).unwrap_or(EntityId::ROOT);
        self.siblings(parent, native.kind())
            .iter()
            .position(|sibling| *sibling == id)
            .ok_or_else(|| {
                Error::new(ErrorKind::Internal(format!(
                    "{id} is missing from its parent's children"
                )))
            })
    }

    fn parent_id(&self, id: EntityId) -> Option<EntityId> {
        self.registry.parent_of(id)
    }

    fn child_count(&self, parent: EntityId, kind: EntityKind) -> usize {
        self.siblings(parent, kind).len()
    }

    fn child_by_index(&self, parent: EntityId, kind: EntityKind, index: usize) -> Option<EntityId> {
        self.siblings(parent, kind).get(index).copied()
    }

    fn child_by_name(&self, parent: EntityId, kind: EntityKind, name: &str) -> Option<EntityId> {
        self.siblings(parent, kind).into_iter().find(|child| {
            self.registry
                .get(*child)
                .is_some_and(|native| native.name() == name)
        })
    }
}

impl ConstructEmptyWorldImpl<P3> for TpeBackend {
    fn construct_empty_world(&mut self, engine: EntityId, name: &str) -> Result<EntityId> {
        let world = TpeWorld {
            name: name.to_string(),
            time: 0.0,
        };
        self.add(engine, TpeEntity::World(world))
    }
}

impl ConstructEmptyModelImpl<P3> for TpeBackend {
    fn construct_empty_model(&mut self, world: EntityId, name: &str) -> Result<EntityId> {
        self.world(world)?;
        let model = TpeModel {
            name: name.to_string(),
            pose: P3::identity_pose(),
            linear_velocity: DVec3::ZERO,
        };
        self.add(world, TpeEntity::Model(model))
    }
}

impl ConstructEmptyLinkImpl<P3> for TpeBackend {
    fn construct_empty_link(&mut self, model: EntityId, name: &str) -> Result<EntityId> {
        self.model(model)?;
        let link = TpeLink {
            name: name.to_string(),
        };
        self.add(model, TpeEntity::Link(link))
    }
}

impl RemoveEntitiesImpl<P3> for TpeBackend {
    fn remove_model(&mut self, model: EntityId) -> Result<bool> {
        match self.registry.kind_of(model) {
            None => Ok(false),
            Some(EntityKind::Model) => {
                self.registry.remove(model)?;
                Ok(true)
            }
            Some(other) => Err(Error::wrong_kind(model, EntityKind::Model, other)),
        }
    }

    fn model_removed(&self, model: EntityId) -> bool {
        self.registry.kind_of(model) != Some(EntityKind::Model)
    }
}

impl CapsuleShapeCastImpl<P3> for TpeBackend {
    fn capsule_shape_cast(&self, shape: EntityId) -> Option<EntityId> {
        matches!(self.geometry(shape), Some(Geometry::Capsule { .. })).then_some(shape)
    }
}

impl GetCapsuleShapePropertiesImpl<P3> for TpeBackend {
    fn capsule_radius(&self, shape: EntityId) -> Result<f64> {
        match self.shape(shape)?.geometry {
            Geometry::Capsule { radius, .. } => Ok(radius),
            _ => Err(not_a(shape, "capsule")),
        }
    }

    fn capsule_height(&self, shape: EntityId) -> Result<f64> {
        match self.shape(shape)?.geometry {
            Geometry::Capsule { height, .. } => Ok(height),
            _ => Err(not_a(shape, "capsule")),
        }
    }
}

impl SetCapsuleShapePropertiesImpl<P3> for TpeBackend {
    fn set_capsule_radius(&mut self, shape: EntityId, value: f64) -> Result<()> {
        match &mut self.shape_mut(shape)?.geometry {
            Geometry::Capsule { radius, .. } => {
                *radius = value;
                Ok(())
            }
            _ => Err(not_a(shape, "capsule")),
        }
    }

    fn set_capsule_height(&mut self, shape: EntityId, value: f64) -> Result<()> {
        match &mut self.shape_mut(shape)?.geometry {
            Geometry::Capsule { height, .. } => {
                *height = value;
                Ok(())
            }
            _ => Err(not_a(shape, "capsule")),
        }
    }
}

impl AttachCapsuleShapeImpl<P3> for TpeBackend {
    fn attach_capsule_shape(&mut self, link: EntityId, params: &CapsuleParams<P3>) -> Result<EntityId> {
        let geometry = Geometry::Capsule {
            radius: params.radius,
            height: params.height,
        };
        self.add_shape(link, &params.name, params.pose, geometry)
    }
}

impl BoxShapeCastImpl<P3> for TpeBackend {
    fn box_shape_cast(&self, shape: EntityId) -> Option<EntityId> {
        matches!(self.geometry(shape), Some(Geometry::Box { .. })).then_some(shape)
    }
}

impl GetBoxShapePropertiesImpl<P3> for TpeBackend {
    fn box_size(&self, shape: EntityId) -> Result<DVec3> {
        match self.shape(shape)?.geometry {
            Geometry::Box { size } => Ok(size),
            _ => Err(not_a(shape, "box")),
        }
    }
}

impl SetBoxShapePropertiesImpl<P3> for TpeBackend {
    fn set_box_size(&mut self, shape: EntityId, value: DVec3) -> Result<()> {
        match &mut self.shape_mut(shape)?.geometry {
            Geometry::Box { size } => {
                *size = value;
                Ok(())
            }
            _ => Err(not_a(shape, "box")),
        }
    }
}

impl AttachBoxShapeImpl<P3> for TpeBackend {
    fn attach_box_shape(&mut self, link: EntityId, params: &BoxParams<P3>) -> Result<EntityId> {
        let geometry = Geometry::Box { size: params.size };
        self.add_shape(link, &params.name, params.pose, geometry)
    }
}

impl SphereShapeCastImpl<P3> for TpeBackend {
    fn sphere_shape_cast(&self, shape: EntityId) -> Option<EntityId> {
        matches!(self.geometry(shape), Some(Geometry::Sphere { .. })).then_some(shape)
    }
}

impl GetSphereShapePropertiesImpl<P3> for TpeBackend {
    fn sphere_radius(&self, shape: EntityId) -> Result<f64> {
        match self.shape(shape)?.geometry {
            Geometry::Sphere { radius } => Ok(radius),
            _ => Err(not_a(shape, "sphere")),
        }
    }
}

impl SetSphereShapePropertiesImpl<P3> for TpeBackend {
    fn set_sphere_radius(&mut self, shape: EntityId, value: f64) -> Result<()> {
        match &mut self.shape_mut(shape)?.geometry {
            Geometry::Sphere { radius } => {
                *radius = value;
                Ok(())
            }
            _ => Err(not_a(shape, "sphere")),
        }
    }
}

impl AttachSphereShapeImpl<P3> for TpeBackend {
    fn attach_sphere_shape(&mut self, link: EntityId, params: &SphereParams<P3>) -> Result<EntityId> {
        let geometry = Geometry::Sphere {
            radius: params.radius,
        };
        self.add_shape(link, &params.name, params.pose, geometry)
    }
}

impl AttachFixedJointImpl<P3> for TpeBackend {
    fn attach_fixed_joint(
        &mut self,
        child_link: EntityId,
        parent_link: Option<EntityId>,
        name: &str,
    ) -> Result<EntityId> {
        self.link(child_link)?;
        if let Some(parent_link) = parent_link {
            self.link(parent_link)?;
        }
        let joint = TpeJoint {
            name: name.to_string(),
            parent_link,
        };
        self.add(child_link, TpeEntity::Joint(joint))
    }

    fn joint_child_link(&self, joint: EntityId) -> Result<EntityId> {
        self.joint(joint)?;
        self.registry.parent_of(joint).ok_or_else(|| {
            Error::new(ErrorKind::Internal(format!("joint {joint} has no child link")))
        })
    }

    fn joint_parent_link(&self, joint: EntityId) -> Result<Option<EntityId>> {
        // A parent link removed with its model no longer holds the joint.
        let parent = self.joint(joint)?.parent_link;
        Ok(parent.filter(|link| self.registry.kind_of(*link) == Some(EntityKind::Link)))
    }

    fn detach_joint(&mut self, joint: EntityId) -> Result<()> {
        self.joint_mut(joint)?.parent_link = None;
        tracing::debug!(%joint, "detached joint");
        Ok(())
    }
}

impl ModelKinematicsImpl<P3> for TpeBackend {
    fn model_pose(&self, model: EntityId) -> Result<<P3 as Policy>::Pose> {
        Ok(self.model(model)?.pose)
    }

    fn set_model_pose(&mut self, model: EntityId, pose: <P3 as Policy>::Pose) -> Result<()> {
        self.model_mut(model)?.pose = pose;
        Ok(())
    }

    fn model_linear_velocity(&self, model: EntityId) -> Result<DVec3> {
        Ok(self.model(model)?.linear_velocity)
    }

    fn set_model_linear_velocity(&mut self, model: EntityId, velocity: DVec3) -> Result<()> {
        self.model_mut(model)?.linear_velocity = velocity;
        Ok(())
    }
}

impl ForwardStepImpl<P3> for TpeBackend {
    fn step_world(&mut self, world: EntityId, input: &mut StepInput) -> Result<StepOutput<P3>> {
        let dt = input
            .get::<TimeStep>()
            .map_or(self.config.default_time_step, |step| step.0);
        if !dt.is_finite() || dt < 0.0 {
            return Err(Error::unsupported(format!("stepping by {dt} seconds")));
        }
        self.world(world)?;

        let models: Vec<EntityId> = self
            .registry
            .children_of_kind(world, EntityKind::Model)
            .collect();
        let mut changed = Vec::new();
        for id in models {
            let model = self.model_mut(id)?;
            if dt > 0.0 && model.linear_velocity != DVec3::ZERO {
                model.pose.translation += model.linear_velocity * dt;
                changed.push((id, model.pose));
            }
        }

        let state = self.world_mut(world)?;
        state.time += dt;
        let time = state.time;
        tracing::trace!(%world, dt, time, changed = changed.len(), "stepped world");

        Ok(StepOutput::new()
            .with(WorldTime(time))
            .with(ChangedPoses::<P3>(changed)))
    }
}

impl ExtensionDataImpl<P3> for TpeBackend {
    fn extension_data(&self, id: EntityId) -> Result<CompositeData> {
        self.registry
            .metadata(id)
            .cloned()
            .ok_or_else(|| Error::entity_not_found(id))
    }

    fn merge_extension_data(&mut self, id: EntityId, data: &CompositeData) -> Result<()> {
        self.registry
            .metadata_mut(id)
            .ok_or_else(|| Error::entity_not_found(id))?
            .merge_from(data);
        Ok(())
    }
}
