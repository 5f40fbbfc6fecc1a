//! Configuration commands.

use std::error::Error;

use clap::Subcommand;
use estuda_core::Config;

use crate::common;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the whole configuration
    Show,
    /// Print one value
    Get { key: String },
    /// Set a value and persist it
    Set { key: String, value: String },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn Error>> {
    match action {
        ConfigAction::Show => {
            common::print_json(&Config::load_or_default())?;
        }
        ConfigAction::Get { key } => {
            let cfg = Config::load_or_default();
            let value = cfg
                .get(&key)
                .ok_or_else(|| format!("unknown key: {key}"))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let mut cfg = Config::load_or_default();
            cfg.set(&key, &value)?;
            println!("{key} = {value}");
        }
    }
    Ok(())
}
