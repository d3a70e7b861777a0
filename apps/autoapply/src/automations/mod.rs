// Automation definitions: loading from the config file and the HTTP handlers
// that expose them in serve mode.

pub mod handlers;
pub mod loader;
