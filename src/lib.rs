pub mod commands;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod services;
pub mod state;

use config::AppConfig;
use state::AppState;

/// Opens (and migrates) the settings database described by `config`.
pub fn init_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let conn = data::open_connection(config)?;
    Ok(AppState::new(conn, config.db_path.clone()))
}

#[cfg(feature = "desktop")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use commands::explorer_commands::desktop;
    use tauri::Manager;

    init_tracing();

    tauri::Builder::default()
        .setup(|app| {
            let config = AppConfig::from_env()?;
            let state = init_state(&config)?;
            app.manage(state);
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            desktop::get_explorer_layout,
            desktop::set_column_visibility,
            desktop::resize_column,
            desktop::reset_explorer_layout,
            desktop::close_explorer_view,
            desktop::build_explorer_table,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
