//! Output sinks: where bound values are written.
//!
//! The parser never owns the storage it writes into. Callers hand in a
//! [`Slot`] for single values or a [`Sequence`] for ordered collections, and
//! the parser's lifetime parameter ties that storage to the parser: the
//! storage must outlive the parser and therefore every `parse` call.
//!
//! Plain `&mut` references are the common case. Shared cells
//! (`&Cell<T>`, `&RefCell<T>`, `Rc<RefCell<T>>`) are accepted as well so a
//! callback can observe outputs while a parse is still running.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

mod binding;

pub use binding::{Collection, Scalar};

/// Single-slot output: each write replaces the previous value.
pub trait Slot<T> {
    /// Overwrites the slot with `value`.
    fn store(&mut self, value: T);
}

/// Append-only ordered output.
pub trait Sequence<T> {
    /// Appends `value` after every value written so far.
    fn append(&mut self, value: T);

    /// Replaces the whole sequence; used to seed defaults at registration.
    fn assign(&mut self, values: Vec<T>);
}

impl<T> Slot<T> for &mut T {
    fn store(&mut self, value: T) {
        **self = value;
    }
}

impl<T> Slot<T> for &Cell<T> {
    fn store(&mut self, value: T) {
        self.set(value);
    }
}

impl<T> Slot<T> for &RefCell<T> {
    fn store(&mut self, value: T) {
        *self.borrow_mut() = value;
    }
}

impl<T> Slot<T> for Rc<RefCell<T>> {
    fn store(&mut self, value: T) {
        *self.borrow_mut() = value;
    }
}

impl<T> Sequence<T> for &mut Vec<T> {
    fn append(&mut self, value: T) {
        self.push(value);
    }

    fn assign(&mut self, values: Vec<T>) {
        **self = values;
    }
}

impl<T> Sequence<T> for &RefCell<Vec<T>> {
    fn append(&mut self, value: T) {
        self.borrow_mut().push(value);
    }

    fn assign(&mut self, values: Vec<T>) {
        *self.borrow_mut() = values;
    }
}

impl<T> Sequence<T> for Rc<RefCell<Vec<T>>> {
    fn append(&mut self, value: T) {
        self.borrow_mut().push(value);
    }

    fn assign(&mut self, values: Vec<T>) {
        *self.borrow_mut() = values;
    }
}
