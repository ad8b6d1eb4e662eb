//! Property-based tests for the dispatcher
//!
//! These tests verify key invariants hold across all possible inputs.

use super::action::{DEPOSIT_LABEL, TRADE_LABEL};
use super::templates::{self, TradeAlert, ENTRY_PRICE_MAX, ENTRY_PRICE_MIN, LEVERAGES};
use super::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_session() -> impl Strategy<Value = Session> {
    (any::<bool>(), any::<bool>()).prop_map(|(trading_active, awaiting_withdrawal)| Session {
        trading_active,
        awaiting_withdrawal,
    })
}

fn arb_button() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Deposit),
        Just(Action::Trade),
        Just(Action::ToggleTrading),
        Just(Action::Withdraw),
        Just(Action::Help),
    ]
}

/// Free text that can never collide with a button label
fn arb_free_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{1,60}"
}

/// Strings shaped around the address rule: right or wrong prefix, lengths near 42
fn arb_address_attempt() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("0x"), Just("0X"), Just("1x"), Just("")],
        "[0-9a-fA-F]{0,44}",
        prop_oneof![Just(""), Just(" "), Just("\n"), Just("\t ")],
    )
        .prop_map(|(prefix, body, pad)| format!("{pad}{prefix}{body}{pad}"))
}

fn entry_price_of(text: &str) -> &str {
    let start = text.find("Entry Price:</b> $").expect("no entry price") + "Entry Price:</b> $".len();
    let end = text[start..].find('\n').expect("unterminated entry price");
    &text[start..start + end]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // Awaiting state: success iff trimmed input has the 0x prefix and 42 chars
    #[test]
    fn prop_withdrawal_accepts_exactly_valid_shapes(
        attempt in arb_address_attempt(),
        trading_active in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let session = Session { trading_active, awaiting_withdrawal: true };
        let result = dispatch(session, &attempt, &mut StdRng::seed_from_u64(seed));

        let trimmed = attempt.trim();
        let valid = trimmed.starts_with("0x") && trimmed.chars().count() == 42;

        prop_assert_eq!(result.session.awaiting_withdrawal, !valid);
        prop_assert_eq!(result.session.trading_active, trading_active);
        if valid {
            prop_assert!(result.reply.text.contains(trimmed));
        } else {
            prop_assert_eq!(result.reply.text.as_str(), templates::INVALID_ADDRESS);
        }
    }

    // Unrecognized text never changes the session
    #[test]
    fn prop_unrecognized_text_is_a_no_op(text in arb_free_text(), seed in any::<u64>()) {
        let session = Session { trading_active: seed % 2 == 0, awaiting_withdrawal: false };
        let result = dispatch(session, &text, &mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(result.session, session);
        prop_assert_eq!(result.reply.text.as_str(), templates::FALLBACK);
    }

    // Only the toggle and withdraw buttons touch session flags
    #[test]
    fn prop_buttons_change_only_their_flag(action in arb_button(), seed in any::<u64>()) {
        let session = Session { trading_active: seed % 3 == 0, awaiting_withdrawal: false };
        let label = action.label().expect("buttons have labels");
        let result = dispatch(session, label, &mut StdRng::seed_from_u64(seed));

        let expected = match action {
            Action::ToggleTrading => Session { trading_active: !session.trading_active, ..session },
            Action::Withdraw => Session { awaiting_withdrawal: true, ..session },
            _ => session,
        };
        prop_assert_eq!(result.session, expected);
    }

    // Any walk through the buttons and free text leaves a well-formed session
    #[test]
    fn prop_random_walks_never_panic(
        start in arb_session(),
        inputs in proptest::collection::vec(
            prop_oneof![
                arb_button().prop_map(|a| a.label().unwrap_or_default().to_string()),
                arb_free_text(),
                arb_address_attempt(),
            ],
            0..30,
        ),
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = start;
        for input in inputs {
            let result = dispatch(session, &input, &mut rng);
            prop_assert!(!result.reply.text.is_empty());
            session = result.session;
        }
    }

    // Trade values stay inside their advertised domains
    #[test]
    fn prop_trade_alert_values_in_range(seed in any::<u64>()) {
        let alert = TradeAlert::random(&mut StdRng::seed_from_u64(seed));

        prop_assert!(LEVERAGES.contains(&alert.leverage));
        prop_assert!(templates::POSITION_SIDES.contains(&alert.side));
        prop_assert!(templates::ASSETS.contains(&alert.asset));
        prop_assert!((ENTRY_PRICE_MIN..=ENTRY_PRICE_MAX).contains(&alert.entry_price));
    }

    // Rendered entry price always carries exactly two decimals
    #[test]
    fn prop_trade_reply_price_has_two_decimals(seed in any::<u64>()) {
        let result = dispatch(Session::default(), TRADE_LABEL, &mut StdRng::seed_from_u64(seed));
        let price = entry_price_of(&result.reply.text);

        let (whole, cents) = price.split_once('.').expect("price has a decimal point");
        prop_assert_eq!(cents.len(), 2);
        prop_assert!(whole.chars().all(|c| c.is_ascii_digit()));

        let value: f64 = price.parse().expect("price parses");
        prop_assert!((ENTRY_PRICE_MIN..=ENTRY_PRICE_MAX).contains(&value));
    }
}

#[test]
fn test_thousand_deposit_addresses_are_well_formed() {
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..1000 {
        let result = dispatch(Session::default(), DEPOSIT_LABEL, &mut rng);
        let text = &result.reply.text;

        let start = text.find("<code>").expect("code span") + "<code>".len();
        let address = &text[start..start + 42];
        assert!(address.starts_with("0x"));
        assert!(address[2..].chars().all(|c| c.is_ascii_hexdigit()));
        assert!(text[start + 42..].starts_with("</code>"));
    }
}
