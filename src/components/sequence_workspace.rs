//! Sequence Workspace
//!
//! The rearrangeable image gallery. "Rearrange" turns editing mode on,
//! dragging reorders the boxes, "Save" turns editing mode off and persists
//! the new order when it actually changed.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_sortable::{create_sort_signals, move_to};

use crate::api;
use crate::components::{activate_draggables, MediaBox};
use crate::dom;
use crate::editor::{SaveOutcome, SequenceEditor};
use crate::models::{ImageId, ReorderRequest, SequenceImage};

/// What a save click resolved to, before any request goes out
#[derive(Debug, Clone, PartialEq)]
enum SaveAction {
    /// A request is still pending; editing mode stays on so the user can
    /// see the reorder was not taken yet
    StillSaving,
    /// Markers cleared; order matches the baseline, nothing to send
    NothingChanged,
    /// Markers cleared; the current order could not be read
    Unreadable(String),
    /// Markers cleared; persist this order
    Send(ReorderRequest),
}

/// Save-click sequencing. Unless a request is already in flight, editing
/// mode ends first (markers come off whether or not anything gets
/// persisted), then the freshly read order is compared to the baseline.
fn save_click(
    editor: &SequenceEditor,
    saving: bool,
    exit_editing: impl FnOnce(),
    read_order: impl FnOnce() -> Result<Vec<ImageId>, String>,
) -> SaveAction {
    if saving {
        return SaveAction::StillSaving;
    }
    exit_editing();
    match read_order() {
        Err(e) => SaveAction::Unreadable(e),
        Ok(working) => match editor.prepare_save(&working) {
            SaveOutcome::Unchanged => SaveAction::NothingChanged,
            SaveOutcome::Persist(req) => SaveAction::Send(req),
        },
    }
}

#[component]
pub fn SequenceWorkspace(images: Vec<SequenceImage>, reorder_path: String) -> impl IntoView {
    let initial_order: Vec<u32> = images.iter().map(|image| image.id).collect();
    // Last server-acknowledged order; only advanced after a successful PATCH
    let editor = StoredValue::new(SequenceEditor::new(initial_order));
    let reorder_path = StoredValue::new(reorder_path);

    let (boxes, set_boxes) = signal(activate_draggables(images));
    let (editing, set_editing) = signal(false);
    // In-flight guard: a save clicked while a request is pending is dropped
    let (saving, set_saving) = signal(false);

    let dnd = create_sort_signals();
    let container_ref = NodeRef::<leptos::html::Div>::new();

    let on_move = Callback::new(move |(dragged, target): (u32, u32)| {
        set_boxes.update(|boxes| {
            let order: Vec<u32> = boxes.iter().map(|entry| entry.image.id).collect();
            if let Some(next) = move_to(&order, dragged, target) {
                boxes.sort_by_key(|entry| {
                    next.iter()
                        .position(|&id| id == entry.image.id)
                        .unwrap_or(usize::MAX)
                });
            }
        });
    });

    // Re-entering while already editing just re-applies the same markers
    let on_rearrange = move |_| set_editing.set(true);

    let on_save = move |_| {
        let action = editor.with_value(|ed| {
            save_click(
                ed,
                saving.get_untracked(),
                || set_editing.set(false),
                || {
                    let container = container_ref
                        .get_untracked()
                        .ok_or_else(|| "media container missing".to_string())?;
                    dom::read_image_order(&container)
                },
            )
        });

        match action {
            SaveAction::StillSaving => {
                web_sys::console::warn_1(
                    &"[sequence] save already in flight, still editing".into(),
                );
            }
            SaveAction::Unreadable(e) => {
                web_sys::console::error_1(&format!("[sequence] unreadable order: {}", e).into());
            }
            SaveAction::NothingChanged => {}
            SaveAction::Send(req) => {
                set_saving.set(true);
                let path = reorder_path.get_value();
                spawn_local(async move {
                    match api::reorder_images(&path, &req.image_ids).await {
                        Ok(()) => editor.update_value(|ed| ed.commit(&req.image_ids)),
                        Err(e) => {
                            // Baseline stays put; the next differing save retries
                            web_sys::console::error_1(
                                &format!("[sequence] reorder failed: {}", e).into(),
                            );
                        }
                    }
                    set_saving.set(false);
                });
            }
        }
    };

    view! {
        <section id="sortable" class="sequence-workspace" class:editing=editing>
            <div class="block__header">
                <button class="rearrange-button" on:click=on_rearrange>"Rearrange"</button>
                <button class="rearrange-button" on:click=on_save>"Save"</button>
            </div>
            <div
                class="js-resizable-media-container"
                class:drag-container=editing
                node_ref=container_ref
            >
                <For
                    each=move || boxes.get()
                    key=|entry| entry.image.id
                    children=move |entry| {
                        view! {
                            <MediaBox entry=entry dnd=dnd editing=editing on_move=on_move/>
                        }
                    }
                />
            </div>
        </section>
    }
}
