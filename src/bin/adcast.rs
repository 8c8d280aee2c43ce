use std::env;

use adcast::bot::{start_dispatcher, PublicCommand};
use adcast::broadcast::AdBroadcaster;
use adcast::config::Config;
use anyhow::Result;
use teloxide::adaptors::throttle::Limits;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::new("./config.toml")?;

    tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.log_level))
        .try_init()
        .unwrap();

    // NOTE: 全局数据库连接需要用这个变量初始化
    env::set_var("DATABASE_URL", &config.database_url);

    let bot = teloxide::Bot::new(&config.telegram.token).cache_me().throttle(Limits::default());
    bot.set_my_commands(PublicCommand::bot_commands()).await?;

    let broadcaster = AdBroadcaster::new(bot.clone(), config.clone());
    let broadcaster2 = broadcaster.clone();

    let t1 = tokio::spawn(async move { broadcaster2.start().await });
    let t2 = tokio::spawn(async move { start_dispatcher(config, broadcaster, bot).await });

    tokio::try_join!(t1, t2)?;

    Ok(())
}
