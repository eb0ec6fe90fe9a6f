//! Errors raised by the calculator and aggregator.

use thiserror::Error;
use ttr_settings::SettingsError;

#[derive(Debug, Error)]
pub enum TtrError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("cannot aggregate group '{group_id}': no results given")]
    EmptyAggregate { group_id: String },
}
