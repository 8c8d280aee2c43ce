mod command;
mod dispatcher;
mod filter;
mod handlers;
mod utils;

pub use command::PublicCommand;
pub use dispatcher::start_dispatcher;
use teloxide::adaptors::{CacheMe, Throttle};

pub type Bot = Throttle<CacheMe<teloxide::Bot>>;
