//! Drawing model: the ordered object store and its change notification protocol.

use super::object::{GeometricalObject, IndexCounter};
use log::debug;
use std::cell::RefCell;
use std::fmt;
use std::num::NonZeroU32;
use std::rc::Rc;
use thiserror::Error;

/// Errors raised by indexed model access.
///
/// These signal a caller bug; correct callers stay within `0..len()`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ModelError {
    #[error("object index {index} out of range (model holds {len} objects)")]
    OutOfRange { index: usize, len: usize },
}

/// What happened to the objects named by a [`ChangeEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Removed,
    Changed,
}

/// Notification sent to every listener after the model changes.
///
/// Indices are 0-based model positions. Single-object operations report a
/// degenerate range where `index0 == index1 ==` the affected position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeEvent {
    pub kind: ChangeKind,
    pub index0: usize,
    pub index1: usize,
}

impl ChangeEvent {
    fn single(kind: ChangeKind, index: usize) -> Self {
        Self {
            kind,
            index0: index,
            index1: index,
        }
    }
}

/// Observer of a [`DrawingModel`].
///
/// Listeners are called synchronously, in subscription order, with the model as
/// `source`. They may subscribe or unsubscribe listeners through `source` while
/// being notified; that only affects later events.
pub trait DrawingModelListener {
    fn model_changed(&self, source: &DrawingModel, event: &ChangeEvent);
}

/// Ordered collection of drawing objects; the single source of truth for a document.
///
/// Insertion order is display, render and encoding order. Each object receives a
/// 1-based index on insertion: lines count on their own, circles and filled
/// circles share a second counter.
pub struct DrawingModel {
    objects: Vec<GeometricalObject>,
    next_line_index: NonZeroU32,
    next_circle_index: NonZeroU32,
    listeners: RefCell<Vec<Rc<dyn DrawingModelListener>>>,
}

impl Default for DrawingModel {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DrawingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawingModel")
            .field("objects", &self.objects)
            .field("next_line_index", &self.next_line_index)
            .field("next_circle_index", &self.next_circle_index)
            .field(
                "listeners",
                &format!("<{} listeners>", self.listeners.borrow().len()),
            )
            .finish()
    }
}

impl DrawingModel {
    /// Creates an empty model with both counters at 1.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            next_line_index: NonZeroU32::MIN,
            next_circle_index: NonZeroU32::MIN,
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Current object count.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Object at model position `index`.
    pub fn get(&self, index: usize) -> Result<&GeometricalObject, ModelError> {
        let len = self.objects.len();
        self.objects
            .get(index)
            .ok_or(ModelError::OutOfRange { index, len })
    }

    /// Mutable access for in-place edits.
    ///
    /// Listeners are not told about the edit until [`DrawingModel::mark_changed`]
    /// is called for the same index.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut GeometricalObject, ModelError> {
        let len = self.objects.len();
        self.objects
            .get_mut(index)
            .ok_or(ModelError::OutOfRange { index, len })
    }

    /// All objects in insertion order.
    pub fn objects(&self) -> &[GeometricalObject] {
        &self.objects
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeometricalObject> {
        self.objects.iter()
    }

    /// Appends `object`, assigning its index from the matching counter.
    ///
    /// Any index the object already carries (a clone of a model entry, say) is
    /// replaced, so the copy is numbered like a new object. Emits an `Added`
    /// event for the new position and returns that position.
    pub fn add(&mut self, mut object: GeometricalObject) -> usize {
        let counter = match object.index_counter() {
            IndexCounter::Lines => &mut self.next_line_index,
            IndexCounter::Circles => &mut self.next_circle_index,
        };
        object.assign_index(*counter);
        *counter = counter.saturating_add(1);

        self.objects.push(object);
        let position = self.objects.len() - 1;
        debug!("Added {} at position {}", self.objects[position], position);

        self.notify(ChangeEvent::single(ChangeKind::Added, position));
        position
    }

    /// Tells listeners the object at `index` was edited in place.
    pub fn mark_changed(&self, index: usize) -> Result<(), ModelError> {
        let object = self.get(index)?;
        debug!("Object {} at position {} changed", object, index);
        self.notify(ChangeEvent::single(ChangeKind::Changed, index));
        Ok(())
    }

    /// Registers a listener. Returns `false` if it was already registered.
    pub fn subscribe(&self, listener: Rc<dyn DrawingModelListener>) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        if listeners.iter().any(|known| same_listener(known, &listener)) {
            return false;
        }
        listeners.push(listener);
        true
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe<L>(&self, listener: &Rc<L>) -> bool
    where
        L: DrawingModelListener + ?Sized,
    {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|known| !same_listener(known, listener));
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn notify(&self, event: ChangeEvent) {
        // Dispatch over a snapshot so listeners can (un)subscribe from inside a callback.
        let listeners: Vec<_> = self.listeners.borrow().clone();
        for listener in listeners {
            listener.model_changed(self, &event);
        }
    }
}

impl<'a> IntoIterator for &'a DrawingModel {
    type Item = &'a GeometricalObject;
    type IntoIter = std::slice::Iter<'a, GeometricalObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}

/// Identity comparison on the data pointer only; vtable pointers are not stable.
fn same_listener<A, B>(a: &Rc<A>, b: &Rc<B>) -> bool
where
    A: ?Sized,
    B: ?Sized,
{
    std::ptr::eq(Rc::as_ptr(a) as *const (), Rc::as_ptr(b) as *const ())
}
