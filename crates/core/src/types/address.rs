//! Delivery address draft captured during checkout.

use serde::{Deserialize, Serialize};

/// Where the order goes. Plain strings, no validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryAddress {
    pub street: String,
    pub city: String,
    pub zip: String,
    /// Free-text instructions for the courier.
    pub notes: String,
}

impl DeliveryAddress {
    /// Merge a partial update. Fields left as `None` keep their value.
    pub fn apply(&mut self, patch: AddressPatch) {
        let AddressPatch {
            street,
            city,
            zip,
            notes,
        } = patch;
        if let Some(street) = street {
            self.street = street;
        }
        if let Some(city) = city {
            self.city = city;
        }
        if let Some(zip) = zip {
            self.zip = zip;
        }
        if let Some(notes) = notes {
            self.notes = notes;
        }
    }
}

/// Partial update to a [`DeliveryAddress`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressPatch {
    pub street: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    pub notes: Option<String>,
}

impl AddressPatch {
    /// Whether the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.street.is_none() && self.city.is_none() && self.zip.is_none() && self.notes.is_none()
    }
}

/// When the shopper wants the order delivered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryWindow {
    /// As soon as the vendor can deliver.
    #[default]
    Asap,
    /// Scheduled for later.
    Later,
}

impl DeliveryWindow {
    /// Form value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asap => "asap",
            Self::Later => "later",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_merges_only_present_fields() {
        let mut address = DeliveryAddress {
            street: "123 Main St".to_owned(),
            city: "New York".to_owned(),
            zip: "10001".to_owned(),
            notes: String::new(),
        };

        address.apply(AddressPatch {
            city: Some("Brooklyn".to_owned()),
            notes: Some("Ring twice".to_owned()),
            ..AddressPatch::default()
        });

        assert_eq!(address.street, "123 Main St");
        assert_eq!(address.city, "Brooklyn");
        assert_eq!(address.zip, "10001");
        assert_eq!(address.notes, "Ring twice");
    }

    #[test]
    fn test_apply_can_clear_a_field() {
        let mut address = DeliveryAddress {
            zip: "10001".to_owned(),
            ..DeliveryAddress::default()
        };
        address.apply(AddressPatch {
            zip: Some(String::new()),
            ..AddressPatch::default()
        });
        assert!(address.zip.is_empty());
    }

    #[test]
    fn test_empty_patch() {
        assert!(AddressPatch::default().is_empty());
    }
}
