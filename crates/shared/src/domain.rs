use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(ItemId);

/// A catalog entry: a stock-keeping unit with its unit of measure and
/// the destination locations it may legally be moved to. Immutable for
/// the session once fetched from the remote catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub item_name: String,
    pub unit: String,
    pub allowed_locations: BTreeSet<String>,
}

impl Item {
    pub fn allows_location(&self, location: &str) -> bool {
        self.allowed_locations.contains(location)
    }
}

/// Operator-entered quantity. Non-numeric input is kept as an explicit
/// not-a-number value rather than being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    #[default]
    Unset,
    Count(u64),
    NotANumber,
}
