//! Repaint damage derived from model change events.
//!
//! The canvas feeds every [`ChangeEvent`] of its model into a [`DirtyTracker`].
//! Added and changed objects damage their own bounds; anything the tracker cannot
//! place (removed objects, stale positions, extents beyond pixel range) damages
//! the whole viewport.

use super::model::{ChangeEvent, ChangeKind, DrawingModel};
use super::object::GeometricalObject;
use crate::util::Rect;
use log::debug;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
enum Damage {
    #[default]
    Clean,
    Regions(Vec<Rect>),
    Full,
}

/// Damage accumulated between repaints.
#[derive(Debug, Default)]
pub struct DirtyTracker {
    damage: Damage,
}

impl DirtyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Damages the whole viewport. Region damage recorded so far is subsumed.
    pub fn mark_full(&mut self) {
        self.damage = Damage::Full;
    }

    /// Damages the pixels covered by `object`, or everything if they do not fit a [`Rect`].
    pub fn mark_object(&mut self, object: &GeometricalObject) {
        let Some(rect) = object.bounds() else {
            self.mark_full();
            return;
        };
        match &mut self.damage {
            Damage::Full => {}
            Damage::Regions(regions) => regions.push(rect),
            Damage::Clean => self.damage = Damage::Regions(vec![rect]),
        }
    }

    /// Records the damage of one model event.
    ///
    /// The event names the half-open range `index0..index1`, except that a
    /// degenerate range (`index0 == index1`, sent by single-object operations)
    /// names that one position. Each object still in the model at a named
    /// position damages its bounds.
    pub fn record_event(&mut self, source: &DrawingModel, event: &ChangeEvent) {
        if event.kind == ChangeKind::Removed {
            self.mark_full();
            return;
        }

        let positions = if event.index0 == event.index1 {
            event.index0..event.index0.saturating_add(1)
        } else {
            event.index0.min(event.index1)..event.index0.max(event.index1)
        };
        for position in positions {
            match source.get(position) {
                Ok(object) => self.mark_object(object),
                Err(err) => {
                    debug!("{:?} event names a stale position: {}", event.kind, err);
                    self.mark_full();
                    return;
                }
            }
        }
    }

    /// Returns true if anything has been damaged since the last drain.
    pub fn is_dirty(&self) -> bool {
        self.damage != Damage::Clean
    }

    /// Forgets all damage, after a full repaint.
    pub fn clear(&mut self) {
        self.damage = Damage::Clean;
    }

    /// Drains the damage, clipped to `viewport`.
    ///
    /// Full damage comes back as the viewport itself. Regions entirely outside
    /// the viewport are dropped.
    pub fn take_regions(&mut self, viewport: Rect) -> Vec<Rect> {
        match std::mem::take(&mut self.damage) {
            Damage::Clean => Vec::new(),
            Damage::Full => vec![viewport],
            Damage::Regions(regions) => regions
                .iter()
                .filter_map(|rect| rect.intersection(&viewport))
                .collect(),
        }
    }
}
