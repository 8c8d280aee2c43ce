use anyhow::{anyhow, Result};
use teloxide::dispatching::DpHandlerDescription;
use teloxide::dptree::case;
use teloxide::prelude::*;
use tracing::info;

use crate::bot::command::PublicCommand;
use crate::bot::handlers::{cmd_mydata_text, cmd_register_keyboard, cmd_start_keyboard, cmd_start_text};
use crate::bot::Bot;
use crate::database::UserEntity;
use crate::reply_to;

const HELP_TEXT: &str = "This bot stores registered users and periodically sends them advertisements.

You can execute commands from the menu or by typing them:

/start - see a welcome message and register
/register - confirm your registration
/mydata - see data stored about yourself
/deletedata - delete data stored about yourself
/help - show this message";

pub fn public_command_handler() -> Handler<'static, DependencyMap, Result<()>, DpHandlerDescription>
{
    teloxide::filter_command::<PublicCommand, _>().chain(public_command_tree())
}

/// 命令分发树，命令解析和快捷按钮两个入口共用
pub fn public_command_tree() -> Handler<'static, DependencyMap, Result<()>, DpHandlerDescription> {
    dptree::entry()
        .branch(case![PublicCommand::Start].endpoint(cmd_start))
        .branch(case![PublicCommand::Register].endpoint(cmd_register))
        .branch(case![PublicCommand::MyData].endpoint(cmd_mydata))
        .branch(case![PublicCommand::DeleteData].endpoint(cmd_deletedata))
        .branch(case![PublicCommand::Help].endpoint(cmd_help))
}

async fn cmd_start(bot: Bot, msg: Message) -> Result<()> {
    let user = msg.from().ok_or_else(|| anyhow!("message without sender"))?;
    info!("{}: /start", user.id);
    UserEntity::create(
        msg.chat.id.0,
        &user.first_name,
        user.last_name.as_deref(),
        user.username.as_deref(),
    )
    .await?;
    reply_to!(bot, msg, cmd_start_text(&user.first_name))
        .reply_markup(cmd_start_keyboard())
        .await?;
    Ok(())
}

async fn cmd_register(bot: Bot, msg: Message) -> Result<()> {
    info!("{}: /register", msg.chat.id);
    bot.send_message(msg.chat.id, "Do you really want to register?")
        .reply_markup(cmd_register_keyboard())
        .await?;
    Ok(())
}

async fn cmd_mydata(bot: Bot, msg: Message) -> Result<()> {
    info!("{}: /mydata", msg.chat.id);
    match UserEntity::get(msg.chat.id.0).await? {
        Some(user) => reply_to!(bot, msg, cmd_mydata_text(&user)).await?,
        None => reply_to!(bot, msg, "No data is stored about you yet. Type /start first.").await?,
    };
    Ok(())
}

async fn cmd_deletedata(bot: Bot, msg: Message) -> Result<()> {
    info!("{}: /deletedata", msg.chat.id);
    UserEntity::delete(msg.chat.id.0).await?;
    reply_to!(bot, msg, "Your data has been deleted.").await?;
    Ok(())
}

async fn cmd_help(bot: Bot, msg: Message) -> Result<()> {
    info!("{}: /help", msg.chat.id);
    reply_to!(bot, msg, HELP_TEXT).await?;
    Ok(())
}

pub async fn cmd_unknown(bot: Bot, msg: Message) -> Result<()> {
    if msg.text().is_some() {
        reply_to!(bot, msg, "Sorry, command was not recognised").await?;
    }
    Ok(())
}
