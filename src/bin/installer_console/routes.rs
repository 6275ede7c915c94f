//! HTTP route registration for the installer console.

use super::*;

pub(super) fn console_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/osgi-installer", get(installer_report))
        .route("/osgi-installer/configprinter", get(installer_printer))
        .route(
            "/osgi-installer-config-printer",
            get(config_printer_get).post(config_printer_post),
        )
}
