//! Game state and rules
//!
//! [`RoundState`] is the value the presentation layer renders, [`Validator`]
//! applies the submission rules to it, and [`GameSession`] owns the lifecycle
//! of rounds.

mod round;
mod session;
mod validator;

pub use round::{RoundState, RoundStateError};
pub use session::{GameConfig, GamePhase, GameSession, SessionError, SubmitError};
pub use validator::{Submission, Validator};
