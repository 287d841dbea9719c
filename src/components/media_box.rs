//! Media Box Component
//!
//! A single image card in the sequence gallery. Every box gets its drag
//! capability at setup time; the drag handlers only engage while editing
//! mode is on.

use leptos::prelude::*;
use leptos_sortable::{
    make_on_dragend, make_on_dragleave, make_on_dragover, make_on_dragstart, make_on_drop,
    SortSignals,
};
use web_sys::DragEvent;

use crate::models::SequenceImage;

/// One gallery entry plus its drag capability, fixed at setup time
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryBox {
    pub image: SequenceImage,
    pub draggable: bool,
}

/// Setup step: mark every gallery entry draggable, one capability flag per
/// media box
pub fn activate_draggables(images: Vec<SequenceImage>) -> Vec<GalleryBox> {
    images
        .into_iter()
        .map(|image| GalleryBox {
            image,
            draggable: true,
        })
        .collect()
}

#[component]
pub fn MediaBox(
    entry: GalleryBox,
    dnd: SortSignals,
    /// Whether the workspace is in editing mode
    editing: ReadSignal<bool>,
    /// Callback when a box is dropped on another: (dragged, target)
    on_move: Callback<(u32, u32)>,
) -> impl IntoView {
    let image = entry.image;
    let id = image.id;
    let draggable = if entry.draggable { "true" } else { "false" };

    let dragstart = make_on_dragstart(dnd, id);
    let on_dragstart = move |ev: DragEvent| {
        if !editing.get_untracked() {
            // Outside editing mode the boxes stay inert
            ev.prevent_default();
            return;
        }
        dragstart(ev);
    };
    let on_dragover = make_on_dragover(dnd, id);
    let on_dragleave = make_on_dragleave(dnd);
    let on_dragend = make_on_dragend(dnd);
    let on_drop = make_on_drop(dnd, move |dragged, target| on_move.run((dragged, target)));

    let is_dragging = move || dnd.dragging_id_read.get() == Some(id);
    let is_drop_target = move || dnd.over_id_read.get() == Some(id);

    view! {
        <div
            class="media-box"
            class:dragging=is_dragging
            class:drop-target=is_drop_target
            data-image-id=id.to_string()
            draggable=draggable
            on:dragstart=on_dragstart
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
            on:dragend=on_dragend
        >
            <div class="media-box__header" title=image.name.clone()>{image.name.clone()}</div>
            <div class="media-box__content">
                <img src=image.thumb_url alt=image.name/>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::activate_draggables;
    use crate::models::SequenceImage;

    fn image(id: u32) -> SequenceImage {
        SequenceImage {
            id,
            name: format!("image {}", id),
            thumb_url: format!("/thumbs/{}.png", id),
        }
    }

    #[test]
    fn test_setup_marks_every_box_draggable() {
        let images: Vec<_> = [101, 102, 103].into_iter().map(image).collect();

        let boxes = activate_draggables(images.clone());

        assert_eq!(boxes.len(), images.len());
        assert!(boxes.iter().all(|entry| entry.draggable));
        // Gallery order is preserved by the setup pass
        let ids: Vec<u32> = boxes.iter().map(|entry| entry.image.id).collect();
        assert_eq!(ids, vec![101, 102, 103]);
    }

    #[test]
    fn test_empty_gallery_activates_nothing() {
        assert!(activate_draggables(Vec::new()).is_empty());
    }
}
