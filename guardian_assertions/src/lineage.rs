//! Instance-of membership for Rust types.
//!
//! Rust has no constructor chains, so membership is declared instead: a type
//! implements [`Lineage`] (usually through [`lineage!`](crate::lineage)) and
//! names every type its values should count as instances of. A [`Class`] is
//! the handle a check tests that declaration against.
//!
//! ```
//! use guardian_assertions::{Class, is_instance_of, lineage};
//!
//! struct Animal;
//! struct Dog;
//!
//! lineage!(Animal; Dog: Animal);
//!
//! assert!(is_instance_of(Dog, Class::<Animal>::new(), ()).is_ok());
//! assert!(is_instance_of(Animal, Class::<Dog>::new(), ()).is_err());
//! ```

use std::any::{Any, TypeId, type_name};
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

/// A value that knows which types it is an instance of.
pub trait Lineage: Any {
    /// Whether this value is an instance of the type identified by `class`.
    fn descends_from(&self, class: TypeId) -> bool;
}

/// A type that can be named as an ancestor in [`lineage!`](crate::lineage).
///
/// Implemented by the macro, for declared types and for trait objects.
pub trait Ancestry: 'static {
    /// Whether instances of `Self` are instances of the type identified by
    /// `class`, following every declared ancestor to the root.
    fn includes(class: TypeId) -> bool;
}

/// Implements [`Lineage`] and [`Ancestry`] for one or more types.
///
/// Each entry names a type and, after a colon, its direct ancestors. Ancestry
/// is followed transitively, so each type only lists its own parents. Every
/// ancestor must itself be declared, and trait objects are declared with a
/// `dyn` entry. Declarations must not form a cycle.
///
/// ```
/// # use guardian_assertions::{Class, is_instance_of, lineage};
/// # trait Pet {}
/// # struct Creature; struct Animal; struct Dog;
/// lineage!(
///     dyn Pet;
///     Creature;
///     Animal: Creature;
///     Dog: Animal, dyn Pet;
/// );
///
/// assert!(is_instance_of(Dog, Class::<Creature>::new(), ()).is_ok());
/// assert!(is_instance_of(Dog, Class::<dyn Pet>::new(), ()).is_ok());
/// ```
#[macro_export]
macro_rules! lineage {
    () => {};
    (dyn $trait_path:path $(: $($ancestor:ty),+)? $(; $($rest:tt)*)?) => {
        impl $crate::Ancestry for dyn $trait_path {
            fn includes(class: ::std::any::TypeId) -> bool {
                class == ::std::any::TypeId::of::<dyn $trait_path>()
                    $($( || <$ancestor as $crate::Ancestry>::includes(class) )+)?
            }
        }

        $( $crate::lineage!($($rest)*); )?
    };
    ($ty:ty $(: $($ancestor:ty),+)? $(; $($rest:tt)*)?) => {
        impl $crate::Ancestry for $ty {
            fn includes(class: ::std::any::TypeId) -> bool {
                class == ::std::any::TypeId::of::<$ty>()
                    $($( || <$ancestor as $crate::Ancestry>::includes(class) )+)?
            }
        }

        impl $crate::Lineage for $ty {
            fn descends_from(&self, class: ::std::any::TypeId) -> bool {
                <Self as $crate::Ancestry>::includes(class)
            }
        }

        $( $crate::lineage!($($rest)*); )?
    };
}

/// Primitive values are instances of nothing.
macro_rules! primitive_lineage {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Lineage for $ty {
                fn descends_from(&self, _class: TypeId) -> bool {
                    false
                }
            }
        )+
    };
}

primitive_lineage!(
    str,
    String,
    &'static str,
    Cow<'static, str>,
    char,
    bool,
    (),
    f32,
    f64,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
);

#[cfg(feature = "json")]
primitive_lineage!(serde_json::Value);

impl<T: Lineage + ?Sized> Lineage for Box<T> {
    fn descends_from(&self, class: TypeId) -> bool {
        (**self).descends_from(class)
    }
}

impl<T: Lineage + ?Sized> Lineage for Rc<T> {
    fn descends_from(&self, class: TypeId) -> bool {
        (**self).descends_from(class)
    }
}

impl<T: Lineage + ?Sized> Lineage for Arc<T> {
    fn descends_from(&self, class: TypeId) -> bool {
        (**self).descends_from(class)
    }
}

/// A runtime handle naming the type `C`, used as the target of
/// [`is_instance_of`](crate::is_instance_of).
///
/// `C` may be unsized, so `Class<dyn Trait>` works for ancestors declared as
/// trait objects.
pub struct Class<C: ?Sized>(PhantomData<fn(&C)>);

impl<C: ?Sized + 'static> Class<C> {
    /// The handle for `C`.
    pub const fn new() -> Self {
        Self(PhantomData)
    }

    /// The [`TypeId`] instances are matched against.
    pub fn class_id(&self) -> TypeId {
        TypeId::of::<C>()
    }

    /// The name of `C`, for diagnostics.
    pub fn name(&self) -> &'static str {
        type_name::<C>()
    }

    /// Whether `value` is an instance of `C`.
    pub fn is_instance(&self, value: &dyn Lineage) -> bool {
        value.descends_from(self.class_id())
    }
}

impl<C: ?Sized + 'static> Default for Class<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized> Clone for Class<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for Class<C> {}

impl<C: ?Sized> PartialEq for Class<C> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<C: ?Sized> Eq for Class<C> {}

impl<C: ?Sized + 'static> fmt::Debug for Class<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class<{}>", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Shape;
    struct Polygon;
    struct Square;

    lineage!(Shape; Polygon: Shape; Square: Polygon);

    #[test]
    fn test_class_debug_names_type() {
        let class = Class::<Shape>::new();
        assert!(format!("{class:?}").ends_with("Shape>"));
        assert_eq!(class.class_id(), TypeId::of::<Shape>());
    }

    #[test]
    fn test_ancestry_is_transitive() {
        assert!(<Square as Ancestry>::includes(TypeId::of::<Shape>()));
        assert!(Class::<Shape>::new().is_instance(&Square));
        assert!(Class::<Polygon>::new().is_instance(&Square));
        assert!(Class::<Square>::new().is_instance(&Square));
        assert!(!Class::<Square>::new().is_instance(&Shape));
        assert!(!Class::<Polygon>::new().is_instance(&Shape));
    }

    #[test]
    fn test_primitives_have_no_lineage() {
        assert!(!Class::<f64>::new().is_instance(&1.0_f64));
        assert!(!Class::<String>::new().is_instance(&String::new()));
    }

    #[test]
    fn test_pointers_delegate() {
        let shared: Rc<dyn Lineage> = Rc::new(Square);
        assert!(Class::<Shape>::new().is_instance(&shared));
        assert!(Class::<Shape>::new().is_instance(&Arc::new(Square)));
    }
}
