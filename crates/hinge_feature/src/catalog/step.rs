//! Forward stepping.
//!
//! Stepping exchanges data through [`ExpectData`] stores: the client fills a
//! [`StepInput`] and the backend answers with a [`StepOutput`]. Both expect
//! the types the catalog knows about, and both accept anything else a
//! backend or client wants to pass along.

use hinge_data::{Data, DataTag, ExpectData};
use hinge_foundation::{EntityId, Policy, Result};

use crate::catalog::kinematics::{ModelKinematics, ModelKinematicsImpl};
use crate::declare_feature;
use crate::entity::World;
use crate::list::FeatureList;

declare_feature!(
    /// Advances a world in time.
    ForwardStep, "hinge::ForwardStep", requires [ModelKinematics]
);

/// Length of one step, in seconds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TimeStep(pub f64);

impl Data for TimeStep {
    const LABEL: &'static str = "hinge::TimeStep";
}

/// Simulated time of a world after a step, in seconds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WorldTime(pub f64);

impl Data for WorldTime {
    const LABEL: &'static str = "hinge::WorldTime";
}

/// Models whose placement changed during a step, with their new placement.
#[derive(Clone, Debug, PartialEq)]
pub struct ChangedPoses<P: Policy>(pub Vec<(EntityId, P::Pose)>);

impl<P: Policy> Default for ChangedPoses<P> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<P: Policy> Data for ChangedPoses<P> {
    const LABEL: &'static str = "hinge::ChangedPoses";
    const TAG: DataTag = DataTag::from_label(Self::LABEL).extend(P::NAME);
}

/// What a client hands to [`World::step`].
pub type StepInput = ExpectData<(TimeStep,)>;

/// What a backend hands back from a step.
pub type StepOutput<P> = ExpectData<(WorldTime, ChangedPoses<P>)>;

/// Backend side of [`ForwardStep`].
pub trait ForwardStepImpl<P: Policy>: ModelKinematicsImpl<P> {
    /// Advances `world` by one step.
    ///
    /// A missing [`TimeStep`] means the backend's default step.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` or `WrongKind` if `world` is not a live world.
    fn step_world(&mut self, world: EntityId, input: &mut StepInput) -> Result<StepOutput<P>>;
}

impl<P: Policy, F: FeatureList> World<P, F>
where
    F::Backend<P>: ForwardStepImpl<P>,
{
    /// Advances this world by one step.
    ///
    /// The backend reads `input` through the usual accessors, so entries it
    /// consumed are marked queried afterwards.
    ///
    /// # Errors
    ///
    /// `EntityNotFound` once the world has been removed.
    pub fn step(&self, input: &mut StepInput) -> Result<StepOutput<P>> {
        self.backend().step_world(self.id(), input)
    }
}
