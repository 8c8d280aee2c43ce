mod ad;
mod db;
mod user;

pub use ad::*;
pub use user::*;
