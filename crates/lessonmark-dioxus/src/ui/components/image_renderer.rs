use dioxus::prelude::*;
use lessonmark_engine::{ImagePosition, LessonImage};

#[component]
pub fn ImageRenderer(image: LessonImage, #[props(default)] in_box: bool) -> Element {
    let mut zoomed = use_signal(|| false);
    let zoomable = image.allow_zoom != Some(false);

    let position = if in_box {
        "image-in-box"
    } else {
        match image.position {
            ImagePosition::Left => "image-left",
            ImagePosition::Right => "image-right",
            ImagePosition::Center => "image-center",
        }
    };
    let mut class = format!("lesson-image {position}");
    if image.has_border() {
        class.push_str(" image-bordered");
    }
    if zoomable {
        class.push_str(" image-zoomable");
    }
    if zoomed() {
        class.push_str(" image-zoomed");
    }
    let width = image
        .width
        .as_deref()
        .map(|w| format!("width: {w};"))
        .unwrap_or_default();

    rsx! {
        figure {
            class: "{class}",
            style: "{width}",
            onclick: move |_| {
                if zoomable {
                    zoomed.toggle();
                }
            },
            img { src: "{image.src}", alt: "{image.alt}" }
            if let Some(caption) = &image.caption {
                figcaption { "{caption}" }
            }
        }
    }
}
