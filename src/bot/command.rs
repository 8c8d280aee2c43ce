use teloxide::utils::command::BotCommands;

// NOTE: 此处必须实现 Clone，否则不满足 dptree 的 Injectable 约束
#[derive(BotCommands, Clone, PartialEq, Debug)]
#[command(rename_rule = "lowercase")]
pub enum AdminCommand {
    #[command(description = "立即向所有注册用户群发一条消息")]
    Send(String),
    #[command(description = "保存一条广告，按计划推送")]
    Ad(String),
}

#[derive(BotCommands, Clone, PartialEq, Debug)]
#[command(rename_rule = "lowercase")]
pub enum PublicCommand {
    #[command(description = "get greeting message")]
    Start,
    #[command(description = "register in telegram bot")]
    Register,
    #[command(description = "get your data stored")]
    MyData,
    #[command(description = "delete my data")]
    DeleteData,
    #[command(description = "info how use this bot")]
    Help,
}
