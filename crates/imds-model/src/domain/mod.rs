mod kv;
pub use kv::KeyValue;

mod env;
pub use env::Env;

mod flag;
pub use flag::{Flag, parse_bool};

mod constants;
pub use constants::{config_keys, metadata, paths, token};
