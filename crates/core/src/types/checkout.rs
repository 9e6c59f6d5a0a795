//! Checkout step state machine.
//!
//! ```text
//! Cart(0) ──advance──▶ Address(1) ──advance──▶ Confirmation(2)
//!    ▲                                               │
//!    └──────────── reset (cart panel closed) ────────┘
//! ```
//!
//! Transitions are forward-only; `Confirmation` is terminal until a reset.

use serde::{Deserialize, Serialize};

/// Current stage of the post-cart purchase flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    /// Reviewing cart contents.
    #[default]
    Cart,
    /// Entering the delivery address.
    Address,
    /// Order placed (presentation only).
    Confirmation,
}

impl CheckoutStep {
    /// The following step. `Confirmation` stays where it is.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Cart => Self::Address,
            Self::Address | Self::Confirmation => Self::Confirmation,
        }
    }

    /// Whether there is no further step.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Confirmation)
    }

    /// Numeric index (0, 1, 2).
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Cart => 0,
            Self::Address => 1,
            Self::Confirmation => 2,
        }
    }

    /// Heading shown on the cart panel.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Cart => "Your Cart",
            Self::Address => "Delivery Information",
            Self::Confirmation => "Order Confirmation",
        }
    }
}
