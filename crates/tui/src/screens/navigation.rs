//! Uniform delivery of child-screen results to whichever party waits.

use crate::screens::outcome::ScreenReply;

/// A screen able to receive child-screen results.
pub trait ResultSink {
    fn on_result(&mut self, reply: ScreenReply);
}

/// No receiver was available for a finished child screen.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    #[error("no screen is waiting for this result")]
    NoReceiver,
}

/// Delivers `reply` to the waiting sub-screen when one launched the child,
/// otherwise to the owning screen's result handler.
///
/// Fails fast when neither receiver exists; a finished child screen whose
/// result has nowhere to go is a wiring bug, not a recoverable state.
pub fn deliver(
    reply: ScreenReply,
    waiting_child: Option<&mut dyn ResultSink>,
    owner: Option<&mut dyn ResultSink>,
) -> Result<(), RoutingError> {
    match (waiting_child, owner) {
        (Some(child), _) => {
            child.on_result(reply);
            Ok(())
        }
        (None, Some(owner)) => {
            owner.on_result(reply);
            Ok(())
        }
        (None, None) => Err(RoutingError::NoReceiver),
    }
}
