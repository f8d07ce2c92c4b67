//! Leptos DragDrop Utilities
//!
//! Drag-and-drop for Leptos on top of the browser's native drag events.
//! The dragged payload lives in the caller's own state; these helpers wire
//! the events and track which drop target the pointer is currently over.

use leptos::prelude::*;
use web_sys::DragEvent;

/// Format used for the (empty) drag payload. Firefox will not start a drag
/// without some data set.
const DRAG_FORMAT: &str = "text/plain";

/// DnD state signals, generic over the drop target key
#[derive(Clone, Copy)]
pub struct DndSignals<K: Send + Sync + 'static> {
    /// Drop target under the pointer
    pub over_read: ReadSignal<Option<K>>,
    pub over_write: WriteSignal<Option<K>>,
    /// A drag started on this page is in progress
    pub active_read: ReadSignal<bool>,
    pub active_write: WriteSignal<bool>,
}

pub fn create_dnd_signals<K>() -> DndSignals<K>
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    let (over_read, over_write) = signal(None::<K>);
    let (active_read, active_write) = signal(false);
    DndSignals {
        over_read,
        over_write,
        active_read,
        active_write,
    }
}

/// Whether `target` is the hovered drop target (tracked)
pub fn is_over<K>(dnd: DndSignals<K>, target: K) -> bool
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    dnd.active_read.get() && dnd.over_read.get() == Some(target)
}

/// End drag operation
pub fn end_drag<K>(dnd: &DndSignals<K>)
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    dnd.over_write.set(None);
    dnd.active_write.set(false);
}

/// Create dragstart handler for draggable elements.
/// `on_start` records whatever the caller considers "in flight".
pub fn make_on_dragstart<K, F>(
    dnd: DndSignals<K>,
    on_start: F,
) -> impl Fn(DragEvent) + Clone + 'static
where
    K: Copy + PartialEq + Send + Sync + 'static,
    F: Fn() + Clone + 'static,
{
    move |ev: DragEvent| {
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_effect_allowed("move");
            let _ = transfer.set_data(DRAG_FORMAT, "");
        }
        dnd.active_write.set(true);
        on_start();
    }
}

/// Create dragover handler for a drop target. Cancelling the event is what
/// marks the element as a valid drop target.
pub fn make_on_dragover<K>(dnd: DndSignals<K>, target: K) -> impl Fn(DragEvent) + Copy + 'static
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_drop_effect("move");
        }
        if dnd.over_read.get_untracked() != Some(target) {
            dnd.over_write.set(Some(target));
        }
    }
}

/// Create dragleave handler for a drop target
pub fn make_on_dragleave<K>(dnd: DndSignals<K>, target: K) -> impl Fn(DragEvent) + Copy + 'static
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    move |_ev: DragEvent| {
        if dnd.over_read.get_untracked() == Some(target) {
            dnd.over_write.set(None);
        }
    }
}

/// Create drop handler for a drop target
pub fn make_on_drop<K, F>(
    dnd: DndSignals<K>,
    target: K,
    on_drop: F,
) -> impl Fn(DragEvent) + Clone + 'static
where
    K: Copy + PartialEq + Send + Sync + 'static,
    F: Fn(K) + Clone + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        end_drag(&dnd);
        on_drop(target);
    }
}

/// Create dragend handler for draggable elements. Fires after a drop, and
/// also when the drag is released outside every drop target.
pub fn make_on_dragend<K, F>(dnd: DndSignals<K>, on_end: F) -> impl Fn(DragEvent) + Clone + 'static
where
    K: Copy + PartialEq + Send + Sync + 'static,
    F: Fn() + Clone + 'static,
{
    move |_ev: DragEvent| {
        end_drag(&dnd);
        on_end();
    }
}
