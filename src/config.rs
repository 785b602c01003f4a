use std::env;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub static_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "9999".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "./public".to_string()),
        }
    }
}
