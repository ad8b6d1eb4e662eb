//! Reply templates and the randomized demo values embedded in them
//!
//! All text is Telegram HTML. Nothing here touches real funds: addresses are
//! random and every figure is cosmetic.

use rand::seq::SliceRandom;
use rand::Rng;
use teloxide::utils::html;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

pub const POSITION_SIDES: [&str; 2] = ["LONG", "SHORT"];
pub const ASSETS: [&str; 3] = ["ETH/USDT", "BTC/USDT", "SOL/USDT"];
pub const LEVERAGES: [u32; 4] = [5, 10, 20, 50];
pub const ENTRY_PRICE_MIN: f64 = 2500.0;
pub const ENTRY_PRICE_MAX: f64 = 3500.0;

/// Length of an address: `0x` plus 40 hex digits
pub const ADDRESS_LEN: usize = 42;

/// Random Ethereum-style address, lowercase hex
pub fn random_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut address = String::with_capacity(ADDRESS_LEN);
    address.push_str("0x");
    for _ in 0..ADDRESS_LEN - 2 {
        address.push(char::from(*HEX_DIGITS.choose(rng).unwrap_or(&b'0')));
    }
    address
}

/// Values for one simulated trade alert
#[derive(Debug, Clone, PartialEq)]
pub struct TradeAlert {
    pub side: &'static str,
    pub asset: &'static str,
    /// Already rounded to cents
    pub entry_price: f64,
    pub leverage: u32,
}

impl TradeAlert {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let raw: f64 = rng.gen_range(ENTRY_PRICE_MIN..=ENTRY_PRICE_MAX);
        Self {
            side: POSITION_SIDES.choose(rng).unwrap_or(&"LONG"),
            asset: ASSETS.choose(rng).unwrap_or(&"ETH/USDT"),
            entry_price: (raw * 100.0).round() / 100.0,
            leverage: *LEVERAGES.choose(rng).unwrap_or(&10),
        }
    }

    pub fn entry_price_display(&self) -> String {
        format!("{:.2}", self.entry_price)
    }
}

/// Shown by `/start`, `/help` and the Help button
pub const WELCOME: &str = "🤖 <b>Welcome to Demo Trading Bot!</b>\n\n\
    ⚠️ <b>DISCLAIMER:</b> This is a DEMO bot only. \
    No real funds, trading, or blockchain interactions occur.\n\n\
    Use the buttons below to interact with the demo features:";

pub const FALLBACK: &str = "Please use the buttons below to interact with the bot!";

pub const INVALID_ADDRESS: &str =
    "⚠️ Please enter a valid Ethereum address (starting with 0x, 42 characters)";

pub const WITHDRAW_PROMPT: &str = "💸 <b>Withdrawal Request</b>\n\n\
    📤 <b>Available balance:</b> 15.5 ETH (demo)\n\
    💰 <b>Profit to withdraw:</b> 10 ETH\n\n\
    🔗 <b>Please enter your Ethereum address:</b>\n\
    (Format: 0x followed by 40 characters)\n\n\
    Example: <code>0x742d35Cc6634C0532925a3b844Bc9e90F1f04e5a</code>";

pub const TRADING_STARTED: &str = "✅ <b>Trading Started Successfully!</b>\n\n\
    🤖 <b>Auto-trading is now ACTIVE</b>\n\
    📊 <b>Strategy:</b> Grid Trading\n\
    💰 <b>Capital allocated:</b> $10,000 (demo)\n\
    🎯 <b>Daily target:</b> 2-5%\n\
    🔄 <b>Pairs trading:</b> 3 pairs\n\n\
    📈 Bot will now simulate trades automatically.";

pub const TRADING_STOPPED: &str = "🛑 <b>Trading Stopped</b>\n\n\
    ✅ All positions closed (simulated)\n\
    📊 <b>Final P&amp;L:</b> +$423.15 (demo)\n\
    📈 <b>Win rate:</b> 72.5%\n\
    💰 <b>Total trades:</b> 18\n\n\
    Ready to restart when you are!";

pub fn deposit(address: &str) -> String {
    format!(
        "💎 <b>Deposit Instructions</b>\n\n\
         🔗 <b>Demo Wallet Address:</b>\n\
         <code>{address}</code>\n\n\
         📝 <b>Network:</b> Ethereum (ERC-20)\n\
         💡 <b>Minimum:</b> 0.01 ETH (demo)\n\n\
         ⚠️ <b>IMPORTANT DEMO NOTE:</b>\n\
         This is a test address. DO NOT send real funds!\n\
         Your 'balance' will update automatically in this demo."
    )
}

pub fn trade_alert(alert: &TradeAlert) -> String {
    format!(
        "🚨 <b>TRADE ALERT!</b>\n\n\
         ⚡ <b>Action:</b> Entering market\n\
         📈 <b>Position:</b> {side}\n\
         💰 <b>Asset:</b> {asset}\n\
         🎯 <b>Entry Price:</b> ${price}\n\
         📊 <b>Leverage:</b> {leverage}x\n\
         ⏰ <b>Timeframe:</b> 15m chart\n\
         🎯 <b>Target:</b> +5% profit\n\
         🛑 <b>Stop Loss:</b> -2%\n\n\
         💡 <b>Demo Note:</b> This is simulated trading only!",
        side = alert.side,
        asset = alert.asset,
        price = alert.entry_price_display(),
        leverage = alert.leverage,
    )
}

/// `address` is user input; it is escaped before embedding
pub fn withdrawal_confirmed(address: &str) -> String {
    format!(
        "✅ <b>Withdrawal Confirmed!</b>\n\n\
         🎉 Congratulations! 10 ETH profit is on its way to:\n\
         <code>{}</code>\n\n\
         ⏰ <b>Estimated arrival:</b> 2-5 minutes (demo)\n\
         💼 <b>Transaction fee:</b> 0.001 ETH (simulated)\n\
         📊 <b>Total sent:</b> 9.999 ETH\n\n\
         ⚠️ Remember: This is a demo. No real transaction occurred.",
        html::escape(address)
    )
}
