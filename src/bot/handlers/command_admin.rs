use anyhow::Result;
use teloxide::dispatching::DpHandlerDescription;
use teloxide::dptree::case;
use teloxide::prelude::*;
use tracing::info;

use crate::bot::command::AdminCommand;
use crate::bot::filter::filter_owner_msg;
use crate::bot::Bot;
use crate::broadcast::AdBroadcaster;
use crate::database::AdEntity;
use crate::reply_to;

pub fn admin_command_handler() -> Handler<'static, DependencyMap, Result<()>, DpHandlerDescription>
{
    teloxide::filter_command::<AdminCommand, _>()
        .chain(filter_owner_msg())
        .branch(case![AdminCommand::Send(text)].endpoint(cmd_send))
        .branch(case![AdminCommand::Ad(text)].endpoint(cmd_ad))
}

async fn cmd_send(bot: Bot, msg: Message, broadcaster: AdBroadcaster, text: String) -> Result<()> {
    info!("{}: /send", msg.chat.id);
    if text.trim().is_empty() {
        reply_to!(bot, msg, "Usage: /send <text>").await?;
        return Ok(());
    }
    let delivered = broadcaster.broadcast_text(text.trim()).await?;
    reply_to!(bot, msg, format!("Message delivered to {delivered} users")).await?;
    Ok(())
}

async fn cmd_ad(bot: Bot, msg: Message, text: String) -> Result<()> {
    info!("{}: /ad", msg.chat.id);
    if text.trim().is_empty() {
        reply_to!(bot, msg, "Usage: /ad <text>").await?;
        return Ok(());
    }
    AdEntity::create(text.trim()).await?;
    reply_to!(bot, msg, "Advertisement saved").await?;
    Ok(())
}
