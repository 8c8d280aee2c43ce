pub mod bot;
pub mod broadcast;
pub mod config;
pub mod database;

#[macro_export]
macro_rules! reply_to {
    ($bot:expr, $msg:expr, $text:expr) => {
        $bot.send_message($msg.chat.id, $text).reply_to_message_id($msg.id)
    };
}
