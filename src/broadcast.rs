use anyhow::Result;
use teloxide::prelude::*;
use tracing::{error, info, warn};

use crate::bot::Bot;
use crate::config::Config;
use crate::database::{AdEntity, UserEntity};

#[derive(Debug, Clone)]
pub struct AdBroadcaster {
    bot: Bot,
    config: Config,
}

impl AdBroadcaster {
    pub fn new(bot: Bot, config: Config) -> Self {
        Self { bot, config }
    }

    /// 每隔 broadcast_interval 推送一次所有广告
    pub async fn start(&self) {
        loop {
            tokio::time::sleep(self.config.broadcast_interval).await;
            if let Err(e) = self.send_ads().await {
                error!("broadcast loop error: {:?}", e);
            }
        }
    }

    /// 把所有已保存的广告发送给所有注册用户
    #[tracing::instrument(skip(self))]
    async fn send_ads(&self) -> Result<()> {
        let ads = AdEntity::all().await?;
        if ads.is_empty() {
            return Ok(());
        }
        let users = UserEntity::all().await?;
        info!("broadcasting {} ads to {} users", ads.len(), users.len());
        for user in &users {
            for ad in &ads {
                // 单个用户发送失败（比如对方停用了 bot）不应中断整轮推送
                if let Err(e) = self.bot.send_message(ChatId(user.chat_id), &ad.ad).await {
                    warn!("failed to deliver ad to {}: {}", user.chat_id, e);
                }
            }
        }
        Ok(())
    }

    /// 立即把一条消息发送给所有注册用户，返回成功送达的人数
    #[tracing::instrument(skip(self))]
    pub async fn broadcast_text(&self, text: &str) -> Result<usize> {
        let users = UserEntity::all().await?;
        let mut delivered = 0;
        for user in &users {
            match self.bot.send_message(ChatId(user.chat_id), text).await {
                Ok(_) => delivered += 1,
                Err(e) => warn!("failed to deliver message to {}: {}", user.chat_id, e),
            }
        }
        Ok(delivered)
    }
}
