use crate::config::cors::CorsConfig;
use crate::config::server::ServerConfig;
use crate::config::store::StoreConfig;
use crate::store::Store;
use crate::utils::password::PasswordHasher;

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: Store,
    pub hasher: PasswordHasher,
    pub cors_config: CorsConfig,
}

pub fn init_app_state(server_config: &ServerConfig) -> AppState {
    let store = StoreConfig::from_env()
        .open()
        .expect("Failed to open document store");

    AppState {
        store,
        hasher: PasswordHasher::with_cost(server_config.bcrypt_cost),
        cors_config: CorsConfig::from_env(),
    }
}
