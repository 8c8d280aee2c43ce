use std::time::Duration;

use teloxide::prelude::*;

use super::filter::{filter_callbackdata, filter_keyboard_shortcut, filter_private_chat};
use super::handlers::*;
use super::utils::RateLimiter;
use super::Bot;
use crate::broadcast::AdBroadcaster;
use crate::config::Config;

pub async fn start_dispatcher(config: Config, broadcaster: AdBroadcaster, bot: Bot) {
    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .branch(admin_command_handler())
                .branch(public_command_handler())
                .branch(filter_keyboard_shortcut().chain(public_command_tree()))
                // 未识别的私聊消息统一回复一句提示，群聊消息直接忽略
                .branch(filter_private_chat().endpoint(cmd_unknown)),
        )
        .branch(
            Update::filter_callback_query()
                .chain(filter_callbackdata())
                .chain(callback_query_handler()),
        );

    // 限制每 60 秒只能进行 10 次操作
    let rate_limiter = RateLimiter::new(Duration::from_secs(60), 10);

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![config, broadcaster, rate_limiter])
        // NOTE: 默认情况下，同一个分组内的消息是串行处理，不同分组内的消息是并行处理
        // 此处使用空的分组函数，这样所有消息都会串行处理
        .distribution_function(|_| None::<()>)
        .build()
        .dispatch()
        .await;
}
