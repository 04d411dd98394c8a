use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::marketplace::domain::Role;

/// One-time activation fee, in centavos (R$ 150,00).
pub const ACTIVATION_FEE_CENTS: u32 = 15_000;

/// How the user chose to settle the activation fee. Cosmetic metadata on the
/// receipt; both methods behave identically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Pix,
    Card,
}

impl PaymentMethod {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pix => "Pix",
            Self::Card => "Cartão de Crédito",
        }
    }
}

/// Durations of the simulated payment: a processing window followed by the
/// confirmation screen shown before the dashboard redirect. Neither window is
/// cancellable.
#[derive(Debug, Clone, Copy)]
pub struct PaymentTiming {
    pub processing: Duration,
    pub confirmation: Duration,
}

impl PaymentTiming {
    /// Zero-delay timing for tests and the CLI demo.
    pub const fn instant() -> Self {
        Self {
            processing: Duration::ZERO,
            confirmation: Duration::ZERO,
        }
    }
}

impl Default for PaymentTiming {
    fn default() -> Self {
        Self {
            processing: Duration::from_millis(2_500),
            confirmation: Duration::from_millis(2_000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaymentReceipt {
    pub role: Role,
    pub method: PaymentMethod,
    pub amount_cents: u32,
}

/// Timer-backed payment simulator. Always approves; there is no declined path
/// and no way to abort mid-payment.
#[derive(Debug, Clone, Default)]
pub struct PaymentSimulator {
    timing: PaymentTiming,
}

impl PaymentSimulator {
    pub fn new(timing: PaymentTiming) -> Self {
        Self { timing }
    }

    /// Suspends for both configured windows, then reports success.
    pub async fn charge(&self, role: Role, method: PaymentMethod) -> PaymentReceipt {
        tokio::time::sleep(self.timing.processing).await;
        tokio::time::sleep(self.timing.confirmation).await;
        PaymentReceipt {
            role,
            method,
            amount_cents: ACTIVATION_FEE_CENTS,
        }
    }
}
