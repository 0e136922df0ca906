use crate::backoff::BackoffSchedule;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub max_failed_attempts: u32,
    pub backoff: BackoffSchedule,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_failed_attempts: 10,
            backoff: BackoffSchedule::default(),
        }
    }
}

pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn max_failed_attempts(mut self, attempts: u32) -> Self {
        self.config.max_failed_attempts = attempts;
        self
    }

    pub fn backoff(mut self, schedule: BackoffSchedule) -> Self {
        self.config.backoff = schedule;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
