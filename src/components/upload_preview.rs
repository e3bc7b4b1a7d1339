//! Design upload area: file input plus preview image or placeholder.

use leptos::*;

/// Preview image once a design has been decoded, placeholder text otherwise.
/// The parent owns the change handler and the preview signal; this component
/// holds no state of its own.
#[component]
pub fn UploadPreview<F>(preview_src: ReadSignal<Option<String>>, on_change: F) -> impl IntoView
where
    F: Fn(web_sys::Event) + 'static,
{
    view! {
        <div class="design-preview">
            {move || match preview_src.get() {
                Some(src) => view! {
                    <img class="preview-image" src=src alt="Design preview" />
                }
                .into_view(),
                None => view! {
                    <p class="placeholder">"Your design preview will appear here."</p>
                }
                .into_view(),
            }}
        </div>
        <label class="upload-label">
            "Upload your design"
            <input type="file" accept="image/*" on:change=on_change />
        </label>
    }
}
