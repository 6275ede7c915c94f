use super::*;

#[derive(Debug, serde::Deserialize)]
pub(super) struct PrinterQuery {
    #[serde(default)]
    mode: Option<String>,
}

pub(super) async fn installer_report(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, Response> {
    let snapshot = state
        .installer
        .installation_state()
        .context("read installation state")
        .map_err(internal_error)?;

    let mut body = String::new();
    report::render_html(&snapshot, &mut body)
        .context("render installer report")
        .map_err(internal_error)?;

    tracing::debug!(bytes = body.len(), "rendered installer report");
    Ok(console_page("OSGi Installer", &body))
}

pub(super) async fn installer_printer(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PrinterQuery>,
) -> Result<Response, Response> {
    let mode = query.mode.unwrap_or_default();
    if report::PrinterMode::parse(&mode).is_none() {
        tracing::debug!(mode = %mode, "ignoring unsupported printer mode");
        return Ok(plain_text(String::new()));
    }

    let snapshot = state
        .installer
        .installation_state()
        .context("read installation state")
        .map_err(internal_error)?;

    let mut body = String::new();
    report::print_configuration(&snapshot, &mode, &mut body)
        .context("render installer text report")
        .map_err(internal_error)?;
    Ok(plain_text(body))
}
