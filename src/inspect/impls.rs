use std::{
    borrow::Cow,
    cell::{self, RefCell},
    collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque},
    ptr::NonNull,
    rc::{self, Rc},
    sync::{self, Arc, mpsc},
};

use super::Inspect;
use crate::{
    order,
    shape::{Complex, Identity, Map, Reference, Sequence, Shape, Target},
};

impl Inspect for () {
    fn shape(&self) -> Shape<'_> {
        Shape::Invalid
    }
}

impl Inspect for bool {
    fn shape(&self) -> Shape<'_> {
        Shape::Bool(*self)
    }
}

macro_rules! impl_signed {
    ($($ty:ty),*) => {
        $(
            impl Inspect for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Int(*self as i128)
                }
            }
        )*
    };
}

macro_rules! impl_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Inspect for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Uint(*self as u128)
                }
            }
        )*
    };
}

impl_signed!(i8, i16, i32, i64, i128, isize);
impl_unsigned!(u8, u16, u32, u64, u128, usize);

impl Inspect for f32 {
    fn shape(&self) -> Shape<'_> {
        Shape::Float(f64::from(*self))
    }
}

impl Inspect for f64 {
    fn shape(&self) -> Shape<'_> {
        Shape::Float(*self)
    }
}

impl Inspect for Complex {
    fn shape(&self) -> Shape<'_> {
        Shape::Complex(*self)
    }
}

impl Inspect for char {
    fn shape(&self) -> Shape<'_> {
        Shape::Str(Cow::Owned(self.to_string()))
    }
}

impl Inspect for str {
    fn shape(&self) -> Shape<'_> {
        Shape::Str(Cow::Borrowed(self))
    }
}

impl Inspect for String {
    fn shape(&self) -> Shape<'_> {
        Shape::Str(Cow::Borrowed(self))
    }
}

impl Inspect for Cow<'_, str> {
    fn shape(&self) -> Shape<'_> {
        Shape::Str(Cow::Borrowed(self))
    }
}

impl<T: Inspect> Inspect for [T] {
    fn shape(&self) -> Shape<'_> {
        Sequence::of(self).into()
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Sequence::of(self).into()
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Sequence::of(self).into()
    }
}

impl<T: Inspect> Inspect for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        Sequence::of(self).into()
    }
}

impl<T: Inspect> Inspect for LinkedList<T> {
    fn shape(&self) -> Shape<'_> {
        Sequence::of(self).into()
    }
}

impl<T: Inspect> Inspect for BTreeSet<T> {
    fn shape(&self) -> Shape<'_> {
        Sequence::of(self).into()
    }
}

impl<T: Inspect, S> Inspect for HashSet<T, S> {
    fn shape(&self) -> Shape<'_> {
        let mut sequence = Sequence::of(self);
        order::sort_values(&mut sequence.items);
        sequence.into()
    }
}

impl<K: Inspect, V: Inspect, S> Inspect for HashMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        Map::of("HashMap", self).into()
    }
}

impl<K: Inspect, V: Inspect> Inspect for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Map::of("BTreeMap", self).into()
    }
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn shape(&self) -> Shape<'_> {
        Reference::pointer(&**self).into()
    }
}

impl<T: Inspect + ?Sized> Inspect for &mut T {
    fn shape(&self) -> Shape<'_> {
        Reference::pointer(&**self).into()
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    fn shape(&self) -> Shape<'_> {
        Reference::owned(&**self).into()
    }
}

impl<T: Inspect + ?Sized> Inspect for Rc<T> {
    fn shape(&self) -> Shape<'_> {
        Reference::owned(&**self).into()
    }
}

impl<T: Inspect + ?Sized> Inspect for Arc<T> {
    fn shape(&self) -> Shape<'_> {
        Reference::owned(&**self).into()
    }
}

impl<T: Inspect> Inspect for rc::Weak<T> {
    fn shape(&self) -> Shape<'_> {
        match self.upgrade() {
            Some(strong) => {
                let identity = Identity::of(&*strong);
                let strong: Rc<dyn Inspect + '_> = strong;
                Reference::with_target(identity, Target::Rc(strong)).into()
            }
            None => Reference::absent().into(),
        }
    }
}

impl<T: Inspect> Inspect for sync::Weak<T> {
    fn shape(&self) -> Shape<'_> {
        match self.upgrade() {
            Some(strong) => {
                let identity = Identity::of(&*strong);
                let strong: Arc<dyn Inspect + '_> = strong;
                Reference::with_target(identity, Target::Arc(strong)).into()
            }
            None => Reference::absent().into(),
        }
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn shape(&self) -> Shape<'_> {
        match self {
            Some(value) => Reference::to(value).into(),
            None => Reference::absent().into(),
        }
    }
}

/// Panics if the cell is mutably borrowed while it is being rendered.
impl<T: Inspect> Inspect for RefCell<T> {
    fn shape(&self) -> Shape<'_> {
        let guard: cell::Ref<'_, dyn Inspect + '_> = cell::Ref::map(self.borrow(), lend);
        Reference::with_target(None, Target::Guard(guard)).into()
    }
}

fn lend<'a, T: Inspect + 'a>(value: &T) -> &(dyn Inspect + 'a) {
    value
}

impl<T> Inspect for mpsc::Sender<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Chan
    }
}

impl<T> Inspect for mpsc::SyncSender<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Chan
    }
}

impl<T> Inspect for mpsc::Receiver<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Chan
    }
}

impl<T: ?Sized> Inspect for *const T {
    fn shape(&self) -> Shape<'_> {
        Shape::UnsafePointer
    }
}

impl<T: ?Sized> Inspect for *mut T {
    fn shape(&self) -> Shape<'_> {
        Shape::UnsafePointer
    }
}

impl<T: ?Sized> Inspect for NonNull<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::UnsafePointer
    }
}

macro_rules! impl_fn_pointer {
    ($($arg:ident),*) => {
        impl<R, $($arg),*> Inspect for fn($($arg),*) -> R {
            fn shape(&self) -> Shape<'_> {
                Shape::Func
            }
        }
    };
}

impl_fn_pointer!();
impl_fn_pointer!(A);
impl_fn_pointer!(A, B);
impl_fn_pointer!(A, B, C);
impl_fn_pointer!(A, B, C, D);
impl_fn_pointer!(A, B, C, D, E);
impl_fn_pointer!(A, B, C, D, E, F);
