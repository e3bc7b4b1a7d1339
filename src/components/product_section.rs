//! One product's customization form: preview, size, save, and purchase.

use gloo::dialogs::alert;
use gloo::file::futures::read_as_data_url;
use leptos::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;

use crate::components::UploadPreview;
use crate::models::{ProductConfig, PurchaseInfo};
use crate::pricing;
use crate::utils::{log, navigate_to, storage};

const CHECKOUT_PAGE: &str = "checkout.html";

/// Form for one catalog entry. Instances share no state; each captures its
/// own signals, so the two sections on the page stay independent.
#[component]
pub fn ProductSection(config: ProductConfig) -> impl IntoView {
    let product_name = config.display_name();

    // Resolved once at construction. A bad catalog entry falls back to a
    // zero price instead of letting NaN reach pricing and the stored total.
    let base_price = pricing::parse_base_price(config.base_price).unwrap_or_else(|| {
        log::warn(
            "catalog",
            &format!(
                "non-numeric base price {:?} for {}, defaulting to 0",
                config.base_price, config.id
            ),
        );
        0.0
    });

    let (preview_src, set_preview_src) = create_signal(None::<String>);
    let (has_file, set_has_file) = create_signal(false);
    let (size, set_size) = create_signal(String::new());
    let (promo_code, set_promo_code) = create_signal(String::new());
    let (message, set_message) = create_signal(String::new());

    // Decode the selected file into a data URL for the preview. The decode
    // resolves on a later turn of the event loop; a selection cleared in the
    // meantime is simply overwritten by the last decode to land.
    let on_file_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        match input.files().and_then(|files| files.get(0)) {
            Some(file) => {
                set_has_file.set(true);
                let file = gloo::file::File::from(file);
                spawn_local(async move {
                    match read_as_data_url(&file).await {
                        Ok(data_url) => set_preview_src.set(Some(data_url)),
                        Err(err) => {
                            log::error("upload", &format!("reading design image failed: {err}"));
                        }
                    }
                });
            }
            None => {
                // Selection cleared: drop the preview, restore the placeholder.
                set_has_file.set(false);
                set_preview_src.set(None);
            }
        }
    };

    let save_name = product_name.clone();
    let on_save = move |_| {
        let size = size.get();
        if size.is_empty() {
            alert("Please select a size before saving your design.");
            return;
        }
        if !has_file.get() {
            alert("Please upload an image for your design.");
            return;
        }
        set_message.set(pricing::saved_message(&save_name, &size));
    };

    let purchase_name = product_name.clone();
    let on_purchase = move |_| {
        let size = size.get();
        if size.is_empty() {
            alert("Please select a size before purchasing your design.");
            return;
        }
        if !has_file.get() {
            alert("Please upload an image for your design.");
            return;
        }

        let total = pricing::discounted_total(base_price, &promo_code.get());
        set_message.set(pricing::purchase_message(&purchase_name, total));

        let info = PurchaseInfo {
            product: purchase_name.clone(),
            size,
            total,
            image_data: preview_src.get().unwrap_or_default(),
        };
        // The record is best-effort: checkout proceeds either way.
        match storage::save_purchase_info(&info) {
            Ok(()) => log::info(
                "purchase",
                &format!("stored purchase for {} (total {total})", info.product),
            ),
            Err(err) => log::error("purchase", &format!("saving purchase info failed: {err}")),
        }
        navigate_to(CHECKOUT_PAGE);
    };

    view! {
        <section class="product-section" id=config.id>
            <h2>{config.title}</h2>

            <UploadPreview preview_src=preview_src on_change=on_file_change />

            <select
                prop:value=move || size.get()
                on:change=move |ev| set_size.set(event_target_value(&ev))
            >
                <option value="">"Select a size"</option>
                {config
                    .sizes
                    .iter()
                    .map(|s| view! { <option value=*s>{*s}</option> })
                    .collect_view()}
            </select>

            <button class="submit-button" on:click=on_save>"Save Design"</button>

            {config.purchasable.then(|| view! {
                <div class="purchase-area">
                    <p class="price" data-price=config.base_price>
                        {format!("${}", config.base_price)}
                    </p>
                    <input
                        type="text"
                        class="promo-code"
                        placeholder="Promo code"
                        prop:value=move || promo_code.get()
                        on:input=move |ev| set_promo_code.set(event_target_value(&ev))
                    />
                    <button class="purchase-button" on:click=on_purchase>"Buy Now"</button>
                </div>
            })}

            <p class="message">{move || message.get()}</p>
        </section>
    }
}
