// Services provide stateless helpers and persisted configuration.

pub mod settings_engine;
pub mod url_resolver;
