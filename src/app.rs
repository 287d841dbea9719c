//! Sequences Frontend App
//!
//! Reads the host page's boot data and mounts the rearrangeable gallery
//! when the feature applies, a static gallery otherwise.

use leptos::prelude::*;

use crate::boot;
use crate::components::SequenceWorkspace;
use crate::models::SequenceImage;

/// Read-only gallery shown when the viewer may not rearrange
#[component]
fn StaticGallery(images: Vec<SequenceImage>) -> impl IntoView {
    view! {
        <div class="js-resizable-media-container">
            <For
                each=move || images.clone()
                key=|image| image.id
                children=|image| {
                    view! {
                        <div class="media-box" data-image-id=image.id.to_string()>
                            <div class="media-box__header" title=image.name.clone()>
                                {image.name.clone()}
                            </div>
                            <div class="media-box__content">
                                <img src=image.thumb_url alt=image.name/>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = boot::page_config();

    view! {
        <main class="sequence-page">
            {match config {
                Some(config) if config.is_applicable() => {
                    let images = config.sequence_images.unwrap_or_default();
                    let reorder_path = config.reorder_path.unwrap_or_default();
                    view! { <SequenceWorkspace images=images reorder_path=reorder_path/> }
                        .into_any()
                }
                Some(config) => {
                    let images = config.sequence_images.unwrap_or_default();
                    view! { <StaticGallery images=images/> }.into_any()
                }
                // No boot data on this page: nothing to show
                None => ().into_any(),
            }}
        </main>
    }
}
