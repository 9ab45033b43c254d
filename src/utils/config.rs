/// Runtime configuration read from the environment. Provider credentials are
/// optional on purpose: a missing key fails the requests that need it with a
/// 500, it must not take the whole process down.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub gnews_api_key: Option<String>,
    pub hf_api_key: Option<String>,
    pub imgflip_user: Option<String>,
    pub imgflip_pass: Option<String>,
    pub bind_addr: String,
}

impl Config {
    pub fn init() -> Self {
        Config {
            gnews_api_key: env_opt("GNEWS_API_KEY"),
            hf_api_key: env_opt("HUGGINGFACE_API_KEY"),
            imgflip_user: env_opt("IMGFLIP_USER"),
            imgflip_pass: env_opt("IMGFLIP_PASS"),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string()),
        }
    }
}

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
