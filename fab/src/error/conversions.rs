//! Conversions from external error types into `FabError`.

use super::FabError;

impl From<figment::Error> for FabError {
    fn from(source: figment::Error) -> Self {
        Self::config(source)
    }
}
