use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;

use dashmap::DashMap;
use teloxide::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum CallbackData {
    /// 确认注册
    RegisterConfirm,
    /// 取消注册
    RegisterCancel,
}

impl CallbackData {
    pub fn pack(&self) -> String {
        match self {
            Self::RegisterConfirm => "register yes".to_string(),
            Self::RegisterCancel => "register no".to_string(),
        }
    }

    pub fn unpack(s: &str) -> Option<Self> {
        let (cmd, data) = s.split_once(' ')?;
        match (cmd, data) {
            ("register", "yes") => Some(Self::RegisterConfirm),
            ("register", "no") => Some(Self::RegisterCancel),
            _ => None,
        }
    }
}

/// 一个用于限制请求频率的数据结构
#[derive(Debug, Clone)]
pub struct RateLimiter(Arc<RateLimiterInner>);

#[derive(Debug)]
struct RateLimiterInner {
    interval: std::time::Duration,
    limit: usize,
    data: DashMap<UserId, VecDeque<Instant>>,
}

impl RateLimiter {
    pub fn new(interval: std::time::Duration, limit: usize) -> Self {
        assert_ne!(limit, 0);
        Self(Arc::new(RateLimiterInner { interval, limit, data: Default::default() }))
    }

    /// 插入数据，正常情况下返回 None，如果达到了限制则返回需要等待的时间
    pub fn insert(&self, key: UserId) -> Option<std::time::Duration> {
        let mut entry = self.0.data.entry(key).or_default();
        let entry = entry.value_mut();
        // 插入时，先去掉已经过期的元素
        while let Some(first) = entry.front() {
            if first.elapsed() > self.0.interval {
                entry.pop_front();
            } else {
                break;
            }
        }
        if entry.len() == self.0.limit {
            // 最早的记录可能恰好在上面的清理之后过期，此时等待时间按 0 计
            return entry
                .front()
                .map(|d| self.0.interval.checked_sub(d.elapsed()).unwrap_or_default());
        }
        entry.push_back(Instant::now());
        None
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_callbackdata() {
        assert_eq!(CallbackData::RegisterConfirm.pack(), "register yes");
        assert_eq!(CallbackData::unpack("register yes"), Some(CallbackData::RegisterConfirm));
        assert_eq!(CallbackData::unpack("register no"), Some(CallbackData::RegisterCancel));
        assert_eq!(CallbackData::unpack("register maybe"), None);
        assert_eq!(CallbackData::unpack("vote 1 2"), None);
        assert_eq!(CallbackData::unpack(""), None);
    }

    #[test]
    fn test_rate_limiter() {
        let limiter = RateLimiter::new(Duration::from_secs(60), 2);
        let user = UserId(1);
        // 同一个限制器作用于该用户的所有操作
        assert_eq!(limiter.insert(user), None);
        assert_eq!(limiter.insert(user), None);
        assert!(limiter.insert(user).is_some());
        // 不同用户互不影响
        assert_eq!(limiter.insert(UserId(2)), None);
    }

    #[test]
    fn test_rate_limiter_wait_time() {
        let interval = Duration::from_millis(50);
        let limiter = RateLimiter::new(interval, 1);
        let user = UserId(1);
        assert_eq!(limiter.insert(user), None);
        // 即使最早的记录在检查时恰好过期，等待时间也不应超过间隔（更不应 panic）
        let wait = limiter.insert(user).unwrap();
        assert!(wait <= interval);
        std::thread::sleep(interval + Duration::from_millis(10));
        assert_eq!(limiter.insert(user), None);
    }
}
