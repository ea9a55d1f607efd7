//! Compile-time feature lists.
//!
//! [`feature_list!`](crate::feature_list) turns a list of features into:
//!
//! - a marker type implementing [`FeatureList`];
//! - an aggregate backend trait whose supertraits are the implementation
//!   traits of every member, blanket-implemented for any type providing
//!   them all;
//! - a constant that fails to compile when a member's requirement is not in
//!   the list.
//!
//! The aggregate trait object is the only dynamic dispatch between a client
//! and a backend.

use std::sync::Arc;

use hinge_foundation::{Policy, Result};
use parking_lot::Mutex;

use crate::feature::{FeatureDescriptor, FeatureSet};
use crate::implementation::Implementation;

/// The backend handle every proxy of one engine shares.
pub type SharedBackend<P, F> = Arc<Mutex<<F as FeatureList>::Backend<P>>>;

/// A statically composed list of features.
pub trait FeatureList: Sized + 'static {
    /// Descriptors of the members, in declaration order.
    const FEATURES: &'static [FeatureDescriptor];

    /// The aggregate backend interface for a policy.
    type Backend<P: Policy>: ?Sized + Implementation<P>;

    /// Composes the members into a [`FeatureSet`].
    ///
    /// # Errors
    ///
    /// Never for lists built with [`feature_list!`](crate::feature_list),
    /// whose requirements are checked at compile time.
    fn feature_set() -> Result<FeatureSet> {
        FeatureSet::compose(Self::FEATURES)
    }
}

/// Moves a concrete backend behind the list's aggregate interface.
pub trait BackendOf<P: Policy, B>: FeatureList {
    /// Wraps `backend` into the shared handle.
    fn erase(backend: B) -> SharedBackend<P, Self>;
}

/// Declares a feature list.
///
/// Each entry pairs a feature with its implementation trait; both must be in
/// scope. The second identifier names the generated aggregate backend trait.
///
/// ```rust
/// use hinge_feature::catalog::{
///     ConstructEmptyWorld, ConstructEmptyWorldImpl, GetEngineInfo, GetEngineInfoImpl,
/// };
/// use hinge_feature::{FeatureList, feature_list};
///
/// feature_list! {
///     /// Just enough to name an engine and give it a world.
///     pub struct Minimal: MinimalBackend {
///         GetEngineInfo: GetEngineInfoImpl,
///         ConstructEmptyWorld: ConstructEmptyWorldImpl,
///     }
/// }
///
/// assert_eq!(Minimal::FEATURES.len(), 2);
/// ```
///
/// A list missing a requirement does not compile:
///
/// ```compile_fail
/// use hinge_feature::catalog::{GetCapsuleShapeProperties, GetCapsuleShapePropertiesImpl};
/// use hinge_feature::feature_list;
///
/// feature_list! {
///     pub struct Broken: BrokenBackend {
///         GetCapsuleShapeProperties: GetCapsuleShapePropertiesImpl,
///     }
/// }
/// ```
#[macro_export]
macro_rules! feature_list {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident: $api:ident {
            $($feature:ident: $implementation:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        #[doc = concat!("Backend interface required by [`", stringify!($name), "`].")]
        $vis trait $api<P: $crate::__private::Policy>:
            $crate::Implementation<P> $(+ $implementation<P>)+
        {
        }

        impl<P, B> $api<P> for B
        where
            P: $crate::__private::Policy,
            B: $crate::Implementation<P> $(+ $implementation<P>)+,
        {
        }

        impl $crate::FeatureList for $name {
            const FEATURES: &'static [$crate::FeatureDescriptor] =
                &[$(<$feature as $crate::Feature>::DESCRIPTOR),+];

            type Backend<P: $crate::__private::Policy> = dyn $api<P>;
        }

        impl<P, B> $crate::BackendOf<P, B> for $name
        where
            P: $crate::__private::Policy,
            B: $api<P>,
        {
            fn erase(backend: B) -> $crate::SharedBackend<P, Self> {
                ::std::sync::Arc::new($crate::__private::Mutex::new(backend))
            }
        }

        const _: () = $crate::assert_requirements(
            <$name as $crate::FeatureList>::FEATURES,
        );
    };
}
