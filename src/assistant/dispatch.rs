//! Pure dispatch function
//!
//! Given the same session, text and random stream, `dispatch` always produces
//! the same reply and next session. It performs no I/O.

use super::templates::{self, TradeAlert, ADDRESS_LEN};
use super::{Action, Reply, Session};
use rand::Rng;

/// Result of dispatching one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub reply: Reply,
    pub session: Session,
}

impl Transition {
    fn new(reply: Reply, session: Session) -> Self {
        Self { reply, session }
    }
}

/// Syntactic address check: `0x` prefix and exactly 42 characters
pub fn is_withdrawal_address(candidate: &str) -> bool {
    candidate.starts_with("0x") && candidate.chars().count() == ADDRESS_LEN
}

/// Strip surrounding whitespace, including the ASCII separators U+001C..=U+001F
/// that `char::is_whitespace` does not cover
fn trim_address(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

pub fn dispatch<R: Rng + ?Sized>(session: Session, text: &str, rng: &mut R) -> Transition {
    let mut next = session;

    // Awaiting an address short-circuits button handling
    if session.awaiting_withdrawal {
        let address = trim_address(text);
        if is_withdrawal_address(address) {
            next.awaiting_withdrawal = false;
            return Transition::new(
                Reply::with_keyboard(templates::withdrawal_confirmed(address)),
                next,
            );
        }
        return Transition::new(Reply::with_keyboard(templates::INVALID_ADDRESS), next);
    }

    let reply = match Action::from_text(text) {
        Action::Deposit => {
            Reply::with_keyboard(templates::deposit(&templates::random_address(rng)))
        }
        Action::Trade => Reply::with_keyboard(templates::trade_alert(&TradeAlert::random(rng))),
        Action::ToggleTrading => {
            next.trading_active = !session.trading_active;
            if session.trading_active {
                Reply::with_keyboard(templates::TRADING_STOPPED)
            } else {
                Reply::with_keyboard(templates::TRADING_STARTED)
            }
        }
        Action::Withdraw => {
            next.awaiting_withdrawal = true;
            Reply::plain(templates::WITHDRAW_PROMPT)
        }
        Action::Help => Reply::with_keyboard(templates::WELCOME),
        Action::Unrecognized => Reply::with_keyboard(templates::FALLBACK),
    };

    Transition::new(reply, next)
}
