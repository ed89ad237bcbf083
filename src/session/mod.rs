//! Form session: event handling and the submission state machine

mod controller;
mod events;
mod form_session;
mod guard;

pub use controller::{resolve, PaymentController};
pub use events::FormEvent;
pub use form_session::FormSession;
pub use guard::PendingGuard;

#[cfg(test)]
pub use form_session::{SUBMITTED_MESSAGE, UNREACHABLE_MESSAGE};
#[cfg(test)]
pub use guard::INTERRUPTED_MESSAGE;
