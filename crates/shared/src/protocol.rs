use serde::{Deserialize, Serialize};

use crate::domain::{Item, ItemId};

/// Body of the location-assignment POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitLocationRequest {
    pub item_id: ItemId,
    pub location: String,
}

/// Confirmation payload encoded into the scannable QR image after a
/// successful submission. Field names match the wire format consumed by
/// the confirmation scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrPayload {
    #[serde(rename = "selectedItem")]
    pub selected_item: Item,
    pub location: String,
}
