use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use hashbrown::HashMap;

use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// NonGenericTypeInfoCell

/// A container for [`TypeInfo`] over non-generic types.
///
/// The info is created on first access and then shared for the lifetime of
/// the program, so [`Typed::type_info`] can hand out `&'static` references.
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
pub struct NonGenericTypeInfoCell(OnceLock<TypeInfo>);

impl NonGenericTypeInfoCell {
    /// Initializes an empty cell.
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored [`TypeInfo`], creating it with `f` on first access.
    pub fn get_or_init<F>(&'static self, f: F) -> &'static TypeInfo
    where
        F: FnOnce() -> TypeInfo,
    {
        self.0.get_or_init(f)
    }
}

// -----------------------------------------------------------------------------
// GenericTypeInfoCell

/// A container for [`TypeInfo`] over generic types.
///
/// A `static` inside a generic function is shared across all monomorphizations,
/// so this cell keys the stored info by [`TypeId`] and leaks one `TypeInfo`
/// per concrete instantiation.
pub struct GenericTypeInfoCell(OnceLock<RwLock<HashMap<TypeId, &'static TypeInfo>>>);

impl GenericTypeInfoCell {
    /// Initializes an empty cell.
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the [`TypeInfo`] stored for `T`, creating it with `f` on the
    /// first access for that concrete type.
    pub fn get_or_insert<T, F>(&'static self, f: F) -> &'static TypeInfo
    where
        T: Any + ?Sized,
        F: FnOnce() -> TypeInfo,
    {
        let mapping = self.0.get_or_init(Default::default);
        let id = TypeId::of::<T>();

        let read = mapping.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(info) = read.get(&id).copied() {
            return info;
        }
        drop(read);

        let mut write = mapping.write().unwrap_or_else(PoisonError::into_inner);
        // A racing writer may have inserted between the read and the write lock.
        *write.entry(id).or_insert_with(|| Box::leak(Box::new(f())))
    }
}
