//! Entity enumeration, naming and parent lookup.

use hinge_foundation::{EntityId, EntityKind, Policy, Result};

use crate::declare_feature;
use crate::entity::{
    BoxShapeKind, CapsuleShapeKind, Engine, Entity, Joint, JointKind, Link, LinkKind, Model,
    ModelKind, Shape, ShapeKind, SphereShapeKind, World, WorldKind,
};
use crate::implementation::Implementation;
use crate::list::FeatureList;

declare_feature!(
    /// Enumerates and names the entities of an engine.
    GetEntities, "hinge::GetEntities"
);

/// Backend side of [`GetEntities`].
///
/// Children of an engine are its worlds; of a world, its models; of a
/// model, its links; of a link, its shapes and joints. Indices count
/// children of one kind under one parent, in creation order.
pub trait GetEntitiesImpl<P: Policy>: Implementation<P> {
    /// Name of an entity.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` for unknown or removed ids.
    fn entity_name(&self, id: EntityId) -> Result<String>;

    /// Index of an entity among its siblings of the same kind.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` for unknown or removed ids.
    fn entity_index(&self, id: EntityId) -> Result<usize>;

    /// The entity's parent in the hierarchy.
    fn parent_id(&self, id: EntityId) -> Option<EntityId>;

    /// Number of children of `kind` under `parent`.
    fn child_count(&self, parent: EntityId, kind: EntityKind) -> usize;

    /// Child of `kind` at `index` under `parent`.
    fn child_by_index(&self, parent: EntityId, kind: EntityKind, index: usize)
    -> Option<EntityId>;

    /// Child of `kind` named `name` under `parent`.
    fn child_by_name(&self, parent: EntityId, kind: EntityKind, name: &str) -> Option<EntityId>;
}

macro_rules! children {
    ($owner:ident => $child:ident, $child_kind:ident, $entity_kind:expr,
     $count:ident, $by_index:ident, $by_name:ident) => {
        impl<P: Policy, F: FeatureList> $owner<P, F>
        where
            F::Backend<P>: GetEntitiesImpl<P>,
        {
            #[doc = concat!("Number of child ", stringify!($child), " entities.")]
            #[must_use]
            pub fn $count(&self) -> usize {
                self.backend().child_count(self.id(), $entity_kind)
            }

            #[doc = concat!("Child ", stringify!($child), " at `index`.")]
            #[must_use]
            pub fn $by_index(&self, index: usize) -> Option<$child<P, F>> {
                let id = self.backend().child_by_index(self.id(), $entity_kind, index)?;
                Some(self.proxy::<$child_kind>(id))
            }

            #[doc = concat!("Child ", stringify!($child), " named `name`.")]
            #[must_use]
            pub fn $by_name(&self, name: &str) -> Option<$child<P, F>> {
                let id = self.backend().child_by_name(self.id(), $entity_kind, name)?;
                Some(self.proxy::<$child_kind>(id))
            }
        }
    };
}

children!(Engine => World, WorldKind, EntityKind::World, world_count, world_by_index, world_by_name);
children!(World => Model, ModelKind, EntityKind::Model, model_count, model_by_index, model_by_name);
children!(Model => Link, LinkKind, EntityKind::Link, link_count, link_by_index, link_by_name);
children!(Link => Shape, ShapeKind, EntityKind::Shape, shape_count, shape_by_index, shape_by_name);
children!(Link => Joint, JointKind, EntityKind::Joint, joint_count, joint_by_index, joint_by_name);

macro_rules! naming {
    ($($kind:ident),+) => {
        $(
            impl<P: Policy, F: FeatureList> Entity<P, F, $kind>
            where
                F::Backend<P>: GetEntitiesImpl<P>,
            {
                /// Name of this entity.
                ///
                /// # Errors
                ///
                /// `EntityNotFound` once the entity has been removed.
                pub fn name(&self) -> Result<String> {
                    self.backend().entity_name(self.id())
                }

                /// Index of this entity among its siblings of the same kind.
                ///
                /// # Errors
                ///
                /// `EntityNotFound` once the entity has been removed.
                pub fn index(&self) -> Result<usize> {
                    self.backend().entity_index(self.id())
                }
            }
        )+
    };
}

naming!(
    WorldKind,
    ModelKind,
    LinkKind,
    ShapeKind,
    JointKind,
    CapsuleShapeKind,
    BoxShapeKind,
    SphereShapeKind
);

macro_rules! parent {
    ($owner:ident => $parent:ident, $parent_kind:ident, $getter:ident) => {
        impl<P: Policy, F: FeatureList> $owner<P, F>
        where
            F::Backend<P>: GetEntitiesImpl<P>,
        {
            #[doc = concat!("The ", stringify!($parent), " this entity belongs to.")]
            #[must_use]
            pub fn $getter(&self) -> Option<$parent<P, F>> {
                let id = self.backend().parent_id(self.id())?;
                Some(self.proxy::<$parent_kind>(id))
            }
        }
    };
}

parent!(Model => World, WorldKind, world);
parent!(Link => Model, ModelKind, model);
parent!(Shape => Link, LinkKind, link);
parent!(Joint => Link, LinkKind, link);
