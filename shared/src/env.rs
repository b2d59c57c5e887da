use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

/// Decides the running environment from the `ENV` variable.
/// Anything other than "production" is treated as development.
pub fn which() -> Environment {
    #[cfg(debug_assertions)]
    let default_env = "development";
    #[cfg(not(debug_assertions))]
    let default_env = "production";

    match env::var("ENV") {
        Err(_) => default_env.into(),
        Ok(v) => v.into(),
    }
}

impl From<String> for Environment {
    fn from(value: String) -> Self {
        value.as_str().into()
    }
}

impl From<&str> for Environment {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" => Environment::Production,
            _ => Environment::Development,
        }
    }
}
