//! Built-in [`Reflect`](crate::Reflect) implementations for leaf types.

/// Implement `Typed` + `Reflect` for a non-generic leaf type.
///
/// The type must implement `Debug`, `Send`, `Sync` and be `'static`.
macro_rules! impl_reflect_opaque {
    ($($ty:ty),* $(,)?) => {$(
        impl $crate::info::Typed for $ty {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::NonGenericTypeInfoCell =
                    $crate::impls::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    $crate::info::TypeInfo::Opaque($crate::info::OpaqueInfo::new::<Self>())
                })
            }
        }

        impl $crate::Reflect for $ty {
            #[inline]
            fn reflect_type_info(&self) -> &'static $crate::info::TypeInfo {
                <Self as $crate::info::Typed>::type_info()
            }

            #[inline]
            fn reflect_kind(&self) -> $crate::ops::ReflectKind {
                $crate::ops::ReflectKind::Opaque
            }

            #[inline]
            fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
                $crate::ops::ReflectRef::Opaque(self)
            }

            #[inline]
            fn reflect_debug(
                &self,
                f: &mut ::core::fmt::Formatter<'_>,
            ) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(self, f)
            }
        }
    )*};
}

pub(crate) use impl_reflect_opaque;

impl_reflect_opaque!(u8, u16, u32, u64, u128, usize);
impl_reflect_opaque!(i8, i16, i32, i64, i128, isize);
impl_reflect_opaque!(f32, f64);
impl_reflect_opaque!(bool, char, ());
impl_reflect_opaque!(&'static str);
impl_reflect_opaque!(::core::time::Duration);

#[cfg(test)]
mod tests {
    use crate::Reflect;
    use crate::ops::ReflectKind;

    #[test]
    fn leaf_kinds() {
        assert_eq!(1_u8.reflect_kind(), ReflectKind::Opaque);
        assert_eq!((-3_i64).reflect_kind(), ReflectKind::Opaque);
        assert_eq!(true.reflect_kind(), ReflectKind::Opaque);
        assert_eq!("hi".reflect_kind(), ReflectKind::Opaque);
    }

    #[test]
    fn leaf_debug_is_plain() {
        assert_eq!(format!("{:?}", (&42_i32).as_reflect()), "42");
        assert_eq!(format!("{:?}", ("hi").as_reflect()), "\"hi\"");
    }

    #[test]
    fn leaf_type_info() {
        let info = 42_u32.reflect_type_info();
        assert!(info.type_is::<u32>());
        assert!(!info.is_struct());
        assert_eq!(info.type_name(), "u32");
    }
}
