use core::fmt;
use std::borrow::Cow;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, impl_reflect_opaque};
use crate::info::{OpaqueInfo, TypeInfo, Typed};
use crate::ops::{ReflectKind, ReflectRef};

impl_reflect_opaque!(String, Cow<'static, str>);

// Collections are leaves for key-value coding: a key path names fields, not
// elements, so descending into one yields "absent".

impl<T: Reflect> Typed for Vec<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self, _>(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        <Self as Typed>::type_info()
    }

    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Opaque
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Opaque(self)
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|item| item as &dyn Reflect))
            .finish()
    }
}

impl<T: Reflect> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self, _>(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

impl<T: Reflect> Reflect for Option<T> {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        <Self as Typed>::type_info()
    }

    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Opaque
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Opaque(self)
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => write!(f, "Some({:?})", value as &dyn Reflect),
            None => f.write_str("None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::ops::ReflectKind;

    #[test]
    fn collections_are_leaves() {
        let vec = vec![1_i32, 2, 3];
        assert_eq!(vec.reflect_kind(), ReflectKind::Opaque);
        assert!(vec.reflect_ref().as_struct().is_none());
    }

    #[test]
    fn generic_info_is_per_instantiation() {
        let ints = Vec::<i32>::new().reflect_type_info();
        let bools = Vec::<bool>::new().reflect_type_info();

        assert!(ints.type_is::<Vec<i32>>());
        assert!(bools.type_is::<Vec<bool>>());
        assert!(ints.ty_id() != bools.ty_id());
    }

    #[test]
    fn erased_debug() {
        let vec = vec![1_i32, 2];
        assert_eq!(format!("{:?}", vec.as_reflect()), "[1, 2]");

        let some = Some(5_u8);
        assert_eq!(format!("{:?}", some.as_reflect()), "Some(5)");

        let none: Option<u8> = None;
        assert_eq!(format!("{:?}", none.as_reflect()), "None");
    }
}
