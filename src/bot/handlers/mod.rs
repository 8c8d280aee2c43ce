mod callback_query;
mod command_admin;
mod command_public;
mod utils;

pub use callback_query::*;
pub use command_admin::*;
pub use command_public::*;
pub use utils::*;
