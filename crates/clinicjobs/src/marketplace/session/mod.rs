mod payment;

pub use payment::{
    PaymentMethod, PaymentReceipt, PaymentSimulator, PaymentTiming, ACTIVATION_FEE_CENTS,
};

use serde::Serialize;

use super::domain::{PaymentStatus, Role};

/// Session snapshot exposed to the navigation surface while a user is logged
/// in. There is exactly one session at a time; it is never persisted, so a
/// process restart always comes back logged out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Session {
    pub role: Role,
    pub payment_status: PaymentStatus,
}

/// Gate states: logged out, holding a pending activation, or activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    LoggedOut,
    AwaitingPayment(Role),
    Active(Role),
}

/// Route being requested from the navigation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRequest {
    Landing,
    Activation,
    Dashboard(Role),
}

/// What the navigation surface should render for a route request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ResolvedView {
    Landing,
    Payment { role: Role },
    Dashboard { role: Role },
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no active session")]
    NotLoggedIn,
    #[error("a session already exists; log out before switching roles")]
    AlreadyLoggedIn,
    #[error("activation payment is not pending")]
    PaymentNotPending,
}

/// The access gate state machine controlling navigation across the app.
///
/// Transitions: `LoggedOut --login--> AwaitingPayment --confirm_payment-->
/// Active`; `logout` is available from any state holding a session.
#[derive(Debug, Clone, Copy)]
pub struct AccessGate {
    state: GateState,
}

impl Default for AccessGate {
    fn default() -> Self {
        Self {
            state: GateState::LoggedOut,
        }
    }
}

impl AccessGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn session(&self) -> Option<Session> {
        match self.state {
            GateState::LoggedOut => None,
            GateState::AwaitingPayment(role) => Some(Session {
                role,
                payment_status: PaymentStatus::Pending,
            }),
            GateState::Active(role) => Some(Session {
                role,
                payment_status: PaymentStatus::Paid,
            }),
        }
    }

    /// Creates the session with a pending activation payment.
    pub fn login(&mut self, role: Role) -> Result<Session, SessionError> {
        match self.state {
            GateState::LoggedOut => {
                self.state = GateState::AwaitingPayment(role);
                Ok(Session {
                    role,
                    payment_status: PaymentStatus::Pending,
                })
            }
            GateState::AwaitingPayment(_) | GateState::Active(_) => {
                Err(SessionError::AlreadyLoggedIn)
            }
        }
    }

    /// Marks the session paid and unlocks the role's dashboard.
    pub fn confirm_payment(&mut self) -> Result<Session, SessionError> {
        match self.state {
            GateState::AwaitingPayment(role) => {
                self.state = GateState::Active(role);
                Ok(Session {
                    role,
                    payment_status: PaymentStatus::Paid,
                })
            }
            GateState::LoggedOut => Err(SessionError::NotLoggedIn),
            GateState::Active(_) => Err(SessionError::PaymentNotPending),
        }
    }

    /// Destroys the session. Available from any state holding one.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        match self.state {
            GateState::LoggedOut => Err(SessionError::NotLoggedIn),
            GateState::AwaitingPayment(_) | GateState::Active(_) => {
                self.state = GateState::LoggedOut;
                Ok(())
            }
        }
    }

    pub fn resolve(&self, route: RouteRequest) -> ResolvedView {
        resolve_view(self.state, route)
    }
}

/// Pure view resolution, independent of the router mechanics.
///
/// The landing route always renders the landing view. The activation route
/// renders the payment view whenever a session exists, regardless of payment
/// status. A dashboard route renders only for a paid session of the matching
/// role; a pending session of the matching role sees its payment view, and
/// every mismatch falls back to the landing view.
pub fn resolve_view(state: GateState, route: RouteRequest) -> ResolvedView {
    match (state, route) {
        (_, RouteRequest::Landing) => ResolvedView::Landing,
        (GateState::LoggedOut, _) => ResolvedView::Landing,
        (GateState::AwaitingPayment(role), RouteRequest::Activation)
        | (GateState::Active(role), RouteRequest::Activation) => ResolvedView::Payment { role },
        (GateState::AwaitingPayment(role), RouteRequest::Dashboard(requested)) => {
            if role == requested {
                ResolvedView::Payment { role }
            } else {
                ResolvedView::Landing
            }
        }
        (GateState::Active(role), RouteRequest::Dashboard(requested)) => {
            if role == requested {
                ResolvedView::Dashboard { role }
            } else {
                ResolvedView::Landing
            }
        }
    }
}
