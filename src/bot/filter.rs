use teloxide::dispatching::DpHandlerDescription;
use teloxide::prelude::*;
use teloxide::types::ChatKind;

use super::command::PublicCommand;
use super::utils::CallbackData;
use crate::config::Config;

/// 只放行配置中管理员会话发来的消息
pub fn filter_owner_msg<Output>() -> Handler<'static, DependencyMap, Output, DpHandlerDescription>
where
    Output: Send + Sync + 'static,
{
    dptree::filter(|message: Message, cfg: Config| cfg.telegram.owner_id == message.chat.id)
}

pub fn filter_callbackdata<Output>() -> Handler<'static, DependencyMap, Output, DpHandlerDescription>
where
    Output: Send + Sync + 'static,
{
    dptree::filter_map(|callback: CallbackQuery| {
        callback.data.and_then(|s| CallbackData::unpack(&s))
    })
}

/// 把回复键盘上的快捷按钮文本映射为对应的命令
pub fn filter_keyboard_shortcut<Output>(
) -> Handler<'static, DependencyMap, Output, DpHandlerDescription>
where
    Output: Send + Sync + 'static,
{
    dptree::filter_map(|message: Message| match message.text() {
        Some("register") => Some(PublicCommand::Register),
        Some("check my data") => Some(PublicCommand::MyData),
        Some("delete my data") => Some(PublicCommand::DeleteData),
        Some("help") => Some(PublicCommand::Help),
        _ => None,
    })
}

pub fn filter_private_chat<Output>() -> Handler<'static, DependencyMap, Output, DpHandlerDescription>
where
    Output: Send + Sync + 'static,
{
    dptree::filter(|message: Message| matches!(message.chat.kind, ChatKind::Private(_)))
}
