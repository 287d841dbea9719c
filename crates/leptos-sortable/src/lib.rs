//! Leptos Sortable Utilities
//!
//! Flat-list drag-and-drop reordering for Leptos using native drag events.
//! Items advertise `draggable="true"`; hovering another item makes it the
//! drop target, and dropping moves the dragged item to that position.

use leptos::prelude::*;
use web_sys::DragEvent;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct SortSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    /// Item currently hovered as drop target
    pub over_id_read: ReadSignal<Option<u32>>,
    pub over_id_write: WriteSignal<Option<u32>>,
}

pub fn create_sort_signals() -> SortSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (over_id_read, over_id_write) = signal(None::<u32>);
    SortSignals {
        dragging_id_read,
        dragging_id_write,
        over_id_read,
        over_id_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &SortSignals) {
    dnd.dragging_id_write.set(None);
    dnd.over_id_write.set(None);
}

/// Create dragstart handler for a sortable item
pub fn make_on_dragstart(dnd: SortSignals, item_id: u32) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        if let Some(dt) = ev.data_transfer() {
            dt.set_effect_allowed("move");
            let _ = dt.set_data("text/plain", &item_id.to_string());
        }
        dnd.dragging_id_write.set(Some(item_id));
    }
}

/// Create dragover handler - marks the hovered item as drop target.
/// `prevent_default` is required for the browser to allow a drop here.
pub fn make_on_dragover(dnd: SortSignals, item_id: u32) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        let dragging = dnd.dragging_id_read.get_untracked();
        if dragging.is_some() && dragging != Some(item_id) {
            ev.prevent_default();
            dnd.over_id_write.set(Some(item_id));
        }
    }
}

/// Create dragleave handler
pub fn make_on_dragleave(dnd: SortSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.over_id_write.set(None);
        }
    }
}

/// Create dragend handler - fires even when the drop happened elsewhere
pub fn make_on_dragend(dnd: SortSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| end_drag(&dnd)
}

/// Create drop handler. `on_move(dragged, target)` runs when an item was
/// actually dropped on a different item.
pub fn make_on_drop<F>(dnd: SortSignals, on_move: F) -> impl Fn(DragEvent) + Clone + 'static
where
    F: Fn(u32, u32) + Clone + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        let dragged = dnd.dragging_id_read.get_untracked();
        let target = dnd.over_id_read.get_untracked();
        end_drag(&dnd);
        if let (Some(dragged), Some(target)) = (dragged, target) {
            if dragged != target {
                on_move(dragged, target);
            }
        }
    }
}

/// Move `dragged` to the position currently occupied by `target`.
/// Returns `None` when either id is unknown or nothing would change.
pub fn move_to(order: &[u32], dragged: u32, target: u32) -> Option<Vec<u32>> {
    let from = order.iter().position(|&id| id == dragged)?;
    let to = order.iter().position(|&id| id == target)?;
    if from == to {
        return None;
    }
    let mut next = order.to_vec();
    let id = next.remove(from);
    next.insert(to, id);
    Some(next)
}
