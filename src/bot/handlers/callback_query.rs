use anyhow::{Context, Result};
use teloxide::dispatching::DpHandlerDescription;
use teloxide::dptree::case;
use teloxide::prelude::*;
use tracing::info;

use crate::bot::utils::{CallbackData, RateLimiter};
use crate::bot::Bot;
use crate::database::UserEntity;

pub fn callback_query_handler() -> Handler<'static, DependencyMap, Result<()>, DpHandlerDescription>
{
    dptree::entry()
        .branch(case![CallbackData::RegisterConfirm].endpoint(callback_register_confirm))
        .branch(case![CallbackData::RegisterCancel].endpoint(callback_register_cancel))
}

async fn callback_register_confirm(
    bot: Bot,
    query: CallbackQuery,
    limiter: RateLimiter,
) -> Result<()> {
    if let Some(d) = limiter.insert(query.from.id) {
        bot.answer_callback_query(query.id)
            .text(format!("Too many requests, try again in {} seconds", d.as_secs()))
            .show_alert(true)
            .await?;
        return Ok(());
    }

    let message = query.message.context("message is too old")?;
    info!("{}: <- register yes", query.from.id);

    UserEntity::create(
        message.chat.id.0,
        &query.from.first_name,
        query.from.last_name.as_deref(),
        query.from.username.as_deref(),
    )
    .await?;

    bot.answer_callback_query(query.id).await?;
    bot.edit_message_text(message.chat.id, message.id, "You are registered. 😊").await?;
    Ok(())
}

async fn callback_register_cancel(
    bot: Bot,
    query: CallbackQuery,
    limiter: RateLimiter,
) -> Result<()> {
    if let Some(d) = limiter.insert(query.from.id) {
        bot.answer_callback_query(query.id)
            .text(format!("Too many requests, try again in {} seconds", d.as_secs()))
            .show_alert(true)
            .await?;
        return Ok(());
    }

    let message = query.message.context("message is too old")?;
    info!("{}: <- register no", query.from.id);

    bot.answer_callback_query(query.id).await?;
    bot.edit_message_text(message.chat.id, message.id, "Registration cancelled.").await?;
    Ok(())
}
