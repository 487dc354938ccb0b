//! Arity-generic wrappers.
//!
//! [`Method`] is implemented for every `FnOnce(&T, A0, .., An)` with the
//! arguments packed in a tuple, so one [`Bound`] type covers what the
//! generated family spells out per arity. [`Closure`] covers the case where
//! the caller already captured everything in a closure.

use std::ops::Deref;

use crate::slot::ResultSlot;
use crate::status::Status;
use crate::Runnable;

/// A method-like callable taking `&T` plus the elements of `Args`.
pub trait Method<T: ?Sized, Args> {
    type Output;

    fn invoke(self, target: &T, args: Args) -> Self::Output;
}

macro_rules! impl_method {
    ($($arg:ident: $idx:tt),*) => {
        impl<T: ?Sized, F, O, $($arg,)*> Method<T, ($($arg,)*)> for F
        where
            F: FnOnce(&T, $($arg,)*) -> O,
        {
            type Output = O;

            #[allow(unused_variables)]
            fn invoke(self, target: &T, args: ($($arg,)*)) -> O {
                self(target, $(args.$idx,)*)
            }
        }
    };
}

impl_method!();
impl_method!(A0: 0);
impl_method!(A0: 0, A1: 1);
impl_method!(A0: 0, A1: 1, A2: 2);
impl_method!(A0: 0, A1: 1, A2: 2, A3: 3);
impl_method!(A0: 0, A1: 1, A2: 2, A3: 3, A4: 4);
impl_method!(A0: 0, A1: 1, A2: 2, A3: 3, A4: 4, A5: 5);
impl_method!(A0: 0, A1: 1, A2: 2, A3: 3, A4: 4, A5: 5, A6: 6);
impl_method!(A0: 0, A1: 1, A2: 2, A3: 3, A4: 4, A5: 5, A6: 6, A7: 7);
impl_method!(A0: 0, A1: 1, A2: 2, A3: 3, A4: 4, A5: 5, A6: 6, A7: 7, A8: 8);

// === Bound === //

/// Deferred call of `m` on `o` with a tuple of arguments; the result is discarded.
pub struct Bound<C, M, Args> {
    o: C,
    m: M,
    args: Args,
}

impl<C, M, Args> Runnable for Bound<C, M, Args>
where
    C: Deref,
    M: Method<C::Target, Args>,
{
    fn run(self: Box<Self>) -> Status {
        let Self { o, m, args } = *self;
        Status::guard(move || {
            let _ = m.invoke(&*o, args);
        })
    }
}

/// Like [`Bound`], storing the result in a [`ResultSlot`].
pub struct BoundRet<C, M, Args, R> {
    o: C,
    m: M,
    args: Args,
    out: ResultSlot<R>,
}

impl<C, M, Args, R> Runnable for BoundRet<C, M, Args, R>
where
    C: Deref,
    M: Method<C::Target, Args, Output = R>,
{
    fn run(self: Box<Self>) -> Status {
        let Self { o, m, args, out } = *self;
        Status::guard(move || out.put(m.invoke(&*o, args)))
    }
}

#[must_use = "a runnable does nothing until it is run"]
pub fn wrap_runnable<C, M, Args>(o: C, m: M, args: Args) -> Box<Bound<C, M, Args>>
where
    C: Deref,
    M: Method<C::Target, Args>,
{
    Box::new(Bound { o, m, args })
}

#[must_use = "a runnable does nothing until it is run"]
pub fn wrap_runnable_ret<C, M, Args, R>(o: C, m: M, args: Args, out: ResultSlot<R>) -> Box<BoundRet<C, M, Args, R>>
where
    C: Deref,
    M: Method<C::Target, Args, Output = R>,
{
    Box::new(BoundRet { o, m, args, out })
}

// === Closure === //

pub struct Closure<F>(F);

impl<F: FnOnce()> Runnable for Closure<F> {
    fn run(self: Box<Self>) -> Status {
        Status::guard(self.0)
    }
}

#[must_use = "a runnable does nothing until it is run"]
pub fn from_fn<F: FnOnce()>(f: F) -> Box<Closure<F>> {
    Box::new(Closure(f))
}
