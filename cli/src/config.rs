use engine::config::Validate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "tic_tac_toe.yaml";

const DEFAULT_BOT_MOVE_DELAY_MS: u64 = 500;
const MAX_BOT_MOVE_DELAY_MS: u64 = 10_000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub bot_move_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot_move_delay_ms: DEFAULT_BOT_MOVE_DELAY_MS,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.bot_move_delay_ms > MAX_BOT_MOVE_DELAY_MS {
            return Err(format!(
                "bot_move_delay_ms must be at most {}, got {}",
                MAX_BOT_MOVE_DELAY_MS, self.bot_move_delay_ms
            ));
        }
        Ok(())
    }
}
