//! Operations shared by [`CompositeData`] and [`ExpectData`].

use crate::composite::{CompositeData, DataStatus};
use crate::diagnostics::Diagnosis;
use crate::expect::{ExpectData, ExpectList};
use crate::tag::Data;

/// A heterogeneous store holding at most one value per [`Data`] type.
///
/// Lets feature code accept either store:
///
/// ```rust
/// use hinge_data::{CompositeData, Data, DataStore, ExpectData};
///
/// #[derive(Clone)]
/// struct Gravity(f64);
/// impl Data for Gravity {
///     const LABEL: &'static str = "example::Gravity";
/// }
///
/// fn gravity(store: &mut impl DataStore) -> f64 {
///     store.get::<Gravity>().map_or(-9.81, |g| g.0)
/// }
///
/// assert_eq!(gravity(&mut CompositeData::new()), -9.81);
/// assert_eq!(gravity(&mut ExpectData::<(Gravity,)>::new().with(Gravity(-1.6))), -1.6);
/// ```
pub trait DataStore {
    /// Inserts or overwrites the entry for `T`, optionally marking it required.
    fn insert_with<T: Data>(&mut self, value: T, required: bool) -> bool;

    /// Reads `T`, marking the entry queried.
    fn get<T: Data>(&mut self) -> Option<&T>;

    /// Mutably reads `T`, marking the entry queried.
    fn get_mut<T: Data>(&mut self) -> Option<&mut T>;

    /// Reads `T` without marking it queried.
    fn peek<T: Data>(&self) -> Option<&T>;

    /// Removes the entry for `T`.
    fn remove<T: Data>(&mut self) -> Option<T>;

    /// Returns the flags of the entry for `T`.
    fn status_of<T: Data>(&self) -> DataStatus;

    /// Reports write-without-read and read-without-provide mismatches.
    fn diagnose(&self) -> Diagnosis;

    /// Inserts or overwrites the entry for `T`.
    fn insert<T: Data>(&mut self, value: T) -> bool {
        self.insert_with(value, false)
    }

    /// Returns true if an entry for `T` exists.
    fn has<T: Data>(&self) -> bool {
        self.status_of::<T>().exists
    }

    /// Returns true if the entry for `T` exists and is required.
    fn requires<T: Data>(&self) -> bool {
        self.status_of::<T>().required
    }
}

impl DataStore for CompositeData {
    fn insert_with<T: Data>(&mut self, value: T, required: bool) -> bool {
        CompositeData::insert_with(self, value, required)
    }

    fn get<T: Data>(&mut self) -> Option<&T> {
        CompositeData::get(self)
    }

    fn get_mut<T: Data>(&mut self) -> Option<&mut T> {
        CompositeData::get_mut(self)
    }

    fn peek<T: Data>(&self) -> Option<&T> {
        CompositeData::peek(self)
    }

    fn remove<T: Data>(&mut self) -> Option<T> {
        CompositeData::remove(self)
    }

    fn status_of<T: Data>(&self) -> DataStatus {
        CompositeData::status_of::<T>(self)
    }

    fn diagnose(&self) -> Diagnosis {
        CompositeData::diagnose(self)
    }
}

impl<E: ExpectList> DataStore for ExpectData<E> {
    fn insert_with<T: Data>(&mut self, value: T, required: bool) -> bool {
        ExpectData::insert_with(self, value, required)
    }

    fn get<T: Data>(&mut self) -> Option<&T> {
        ExpectData::get(self)
    }

    fn get_mut<T: Data>(&mut self) -> Option<&mut T> {
        ExpectData::get_mut(self)
    }

    fn peek<T: Data>(&self) -> Option<&T> {
        ExpectData::peek(self)
    }

    fn remove<T: Data>(&mut self) -> Option<T> {
        ExpectData::remove(self)
    }

    fn status_of<T: Data>(&self) -> DataStatus {
        ExpectData::status_of::<T>(self)
    }

    fn diagnose(&self) -> Diagnosis {
        ExpectData::diagnose(self)
    }
}
