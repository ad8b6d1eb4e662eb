//! Button actions recognized by the dispatcher

/// Reply keyboard labels. Text must match one of these exactly.
pub const DEPOSIT_LABEL: &str = "💰 Deposit";
pub const TRADE_LABEL: &str = "📊 Trade";
pub const TOGGLE_TRADING_LABEL: &str = "🚀 Start/Stop Trading";
pub const WITHDRAW_LABEL: &str = "💸 Withdraw";
pub const HELP_LABEL: &str = "\u{2139}\u{fe0f} Help";

/// An incoming text message resolved against the reply keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Deposit,
    Trade,
    ToggleTrading,
    Withdraw,
    Help,
    /// Anything that is not a button label
    Unrecognized,
}

impl Action {
    pub fn from_text(text: &str) -> Self {
        match text {
            DEPOSIT_LABEL => Action::Deposit,
            TRADE_LABEL => Action::Trade,
            TOGGLE_TRADING_LABEL => Action::ToggleTrading,
            WITHDRAW_LABEL => Action::Withdraw,
            HELP_LABEL => Action::Help,
            _ => Action::Unrecognized,
        }
    }

    /// Button label for this action, `None` for [`Action::Unrecognized`]
    pub fn label(self) -> Option<&'static str> {
        match self {
            Action::Deposit => Some(DEPOSIT_LABEL),
            Action::Trade => Some(TRADE_LABEL),
            Action::ToggleTrading => Some(TOGGLE_TRADING_LABEL),
            Action::Withdraw => Some(WITHDRAW_LABEL),
            Action::Help => Some(HELP_LABEL),
            Action::Unrecognized => None,
        }
    }

    /// Short name used in log fields
    pub fn name(self) -> &'static str {
        match self {
            Action::Deposit => "deposit",
            Action::Trade => "trade",
            Action::ToggleTrading => "toggle_trading",
            Action::Withdraw => "withdraw",
            Action::Help => "help",
            Action::Unrecognized => "unrecognized",
        }
    }
}
