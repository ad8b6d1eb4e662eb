//! Telegram transport
//!
//! Long-polls updates, routes `/start` and `/help` to the reset flow and plain
//! text to the dispatcher, then renders replies as HTML with the reply keyboard.

use crate::assistant::{dispatch, templates, Action, KeyboardRequest, Reply, SessionStore};
use rand::Rng;
use std::sync::Arc;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::{ChatId, KeyboardButton, KeyboardMarkup, ParseMode, UserId};
use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Demo trading bot commands:")]
pub enum Command {
    #[command(description = "show the welcome message and buttons")]
    Start,
    #[command(description = "same as /start")]
    Help,
}

/// Fixed five-button reply keyboard
pub fn main_keyboard() -> KeyboardMarkup {
    let row = |actions: &[Action]| -> Vec<KeyboardButton> {
        actions
            .iter()
            .filter_map(|action| action.label())
            .map(KeyboardButton::new)
            .collect()
    };

    KeyboardMarkup::new(vec![
        row(&[Action::Deposit, Action::Trade]),
        row(&[Action::ToggleTrading, Action::Withdraw]),
        row(&[Action::Help]),
    ])
    .resize_keyboard()
}

fn schema() -> UpdateHandler<teloxide::RequestError> {
    Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(Message::filter_text().endpoint(handle_text))
}

/// Run the polling loop until Ctrl-C
pub async fn run(bot: Bot, store: Arc<SessionStore>) {
    if let Err(err) = bot.set_my_commands(Command::bot_commands()).await {
        tracing::warn!(error = %err, "Failed to register bot commands");
    }

    tracing::info!("Bot polling started");

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![store.clone()])
        .default_handler(|update| async move {
            tracing::debug!(update_id = ?update.id, "Ignoring unsupported update");
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "Error while handling update",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    tracing::info!(sessions = store.len(), "Bot polling stopped");
}

async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    store: Arc<SessionStore>,
) -> ResponseResult<()> {
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };

    match cmd {
        Command::Start | Command::Help => {
            store.reset(user.id);
        }
    }
    tracing::info!(user_id = user.id.0, command = ?cmd, "Session reset");

    send_reply(&bot, msg.chat.id, &Reply::with_keyboard(templates::WELCOME)).await
}

async fn handle_text(
    bot: Bot,
    msg: Message,
    text: String,
    store: Arc<SessionStore>,
) -> ResponseResult<()> {
    // Commands other than /start and /help are not answered
    if text.starts_with('/') {
        tracing::debug!(command = %text, "Ignoring unknown command");
        return Ok(());
    }
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };

    let reply = answer(&store, user.id, &text, &mut rand::thread_rng());
    send_reply(&bot, msg.chat.id, &reply).await
}

/// Dispatch `text` against the user's session and commit the result
///
/// The store lock is held for the whole dispatch, so two messages from the
/// same user can never interleave their read-modify-write.
fn answer<R: Rng + ?Sized>(
    store: &SessionStore,
    user_id: UserId,
    text: &str,
    rng: &mut R,
) -> Reply {
    let (reply, was_awaiting, session) = store.update(user_id, |session| {
        let was_awaiting = session.awaiting_withdrawal;
        let transition = dispatch(*session, text, rng);
        *session = transition.session;
        (transition.reply, was_awaiting, transition.session)
    });

    let action = if was_awaiting {
        "withdrawal_address"
    } else {
        Action::from_text(text).name()
    };
    tracing::info!(
        user_id = user_id.0,
        action,
        trading_active = session.trading_active,
        awaiting_withdrawal = session.awaiting_withdrawal,
        "Handled message"
    );
    reply
}

async fn send_reply(bot: &Bot, chat_id: ChatId, reply: &Reply) -> ResponseResult<()> {
    let request = bot
        .send_message(chat_id, reply.text.clone())
        .parse_mode(ParseMode::Html);

    match reply.keyboard {
        KeyboardRequest::Show => request.reply_markup(main_keyboard()).await?,
        KeyboardRequest::Keep => request.await?,
    };
    Ok(())
}
