use std::sync::Arc;

use storefront_catalog::ProductCatalog;

/// Environment-driven settings.
pub mod settings;

pub use settings::{Settings, SettingsError};

/// Shared application context passed into input handlers.
///
/// Cheap to clone because it only stores reference-counted shared state.
#[derive(Clone, Debug)]
pub struct Context {
    pub catalog: Arc<ProductCatalog>,
    pub settings: Arc<Settings>,
}

impl Context {
    /// Create a new application context.
    pub fn new(catalog: ProductCatalog, settings: Settings) -> Self {
        Self {
            catalog: Arc::new(catalog),
            settings: Arc::new(settings),
        }
    }
}
