pub mod atm;
pub mod io;
pub mod output;
pub mod pet_shop;
pub mod test_mode;

pub use atm::{ActionCode, AtmSession};
pub use io::{Console, ScriptConsole, TerminalConsole};
pub use pet_shop::PetShopSession;

use crate::config::{Config, ConfigManager};
use crate::core::datasets::{account_dataset, pet_dataset};
use crate::core::{Atm, PetShop};
use crate::errors::CliError;

const SCRIPT_ENV: &str = "CHALLENGE_CORE_CLI_SCRIPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

impl CliMode {
    pub fn from_env() -> Self {
        if std::env::var_os(SCRIPT_ENV).is_some() {
            CliMode::Script
        } else {
            CliMode::Interactive
        }
    }
}

/// Seeds an ATM from the sample accounts and serves one customer.
pub fn run_atm_cli() -> Result<(), CliError> {
    let atm = Atm::from_account_dataset(&account_dataset());
    tracing::debug!(accounts = atm.len(), "atm ready");
    match CliMode::from_env() {
        CliMode::Interactive => {
            let console = TerminalConsole::new(&load_config())?;
            AtmSession::new(atm, console).menu()
        }
        CliMode::Script => AtmSession::new(atm, ScriptConsole::from_stdio()).menu(),
    }
}

/// Stocks a shop from the sample pets and replays the demonstration.
pub fn run_pet_shop_cli() -> Result<(), CliError> {
    let shop = PetShop::from_pet_dataset(&pet_dataset());
    tracing::debug!(pets = shop.len(), "pet shop ready");
    match CliMode::from_env() {
        CliMode::Interactive => {
            let console = TerminalConsole::new(&load_config())?;
            PetShopSession::new(shop, console).run_demonstration()
        }
        CliMode::Script => {
            PetShopSession::new(shop, ScriptConsole::from_stdio()).run_demonstration()
        }
    }
}

fn load_config() -> Config {
    let manager = ConfigManager::from_env();
    match manager.load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                path = %manager.config_path().display(),
                error = %err,
                "falling back to default config"
            );
            Config::default()
        }
    }
}
