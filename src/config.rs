use std::time::Duration;

use anyhow::Result;
use duration_str::deserialize_duration;
use serde::Deserialize;
use teloxide::types::ChatId;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// 日志等级
    pub log_level: String,
    /// 广告推送间隔
    #[serde(deserialize_with = "deserialize_duration")]
    pub broadcast_interval: Duration,
    /// Sqlite 数据库位置
    pub database_url: String,
    pub telegram: Telegram,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Telegram {
    /// bot token
    pub token: String,
    /// 管理员 ID，只有该会话可以使用 /send 和 /ad
    pub owner_id: ChatId,
}

impl Config {
    pub fn new(path: &str) -> Result<Self> {
        let s = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&s)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test() {
        let config: Config = toml::from_str(
            r#"
            log_level = "info"
            broadcast_interval = "4h"
            database_url = "./adcast.db"

            [telegram]
            token = "123456:ABCDEF"
            owner_id = 42
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.broadcast_interval, Duration::from_secs(4 * 3600));
        assert_eq!(config.telegram.owner_id, ChatId(42));
    }
}
