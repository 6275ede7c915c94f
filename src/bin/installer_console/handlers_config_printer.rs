use super::*;

const PAGE_TITLE: &str = "OSGi Installer Configuration Printer";

pub(super) async fn config_printer_get(
    State(state): State<Arc<AppState>>,
    Query(request): Query<PrintRequest>,
) -> Result<Html<String>, Response> {
    print_config(&state, &request)
}

pub(super) async fn config_printer_post(
    State(state): State<Arc<AppState>>,
    Form(request): Form<PrintRequest>,
) -> Result<Html<String>, Response> {
    print_config(&state, &request)
}

fn print_config(state: &AppState, request: &PrintRequest) -> Result<Html<String>, Response> {
    let mut body = String::new();
    config_printer::render(request, state.config_admin.as_ref(), &mut body)
        .map_err(internal_error)?;

    tracing::debug!(pid = request.pid.as_deref().unwrap_or(""), "rendered configuration printer");
    Ok(console_page(PAGE_TITLE, &body))
}
