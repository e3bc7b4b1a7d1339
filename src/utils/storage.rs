//! Purchase hand-off to the checkout page via LocalStorage.

use crate::models::PurchaseInfo;

/// Fixed key the checkout page reads. One record at a time; every purchase
/// overwrites the previous one.
pub const PURCHASE_INFO_KEY: &str = "purchaseInfo";

/// Serialize and store the purchase record. Storage may be unavailable
/// (private browsing, quota) so the caller decides how to degrade.
pub fn save_purchase_info(info: &PurchaseInfo) -> Result<(), String> {
    let window = web_sys::window().ok_or("window is not available")?;
    let storage = window
        .local_storage()
        .map_err(|e| format!("LocalStorage access failed: {e:?}"))?
        .ok_or("LocalStorage is not available")?;
    let json = serde_json::to_string(info)
        .map_err(|e| format!("serializing purchase info failed: {e}"))?;
    storage
        .set_item(PURCHASE_INFO_KEY, &json)
        .map_err(|e| format!("writing purchase info failed: {e:?}"))?;
    Ok(())
}
