use super::*;

/// Wraps a console fragment into a standalone document.
pub(super) fn console_page(title: &str, body: &str) -> Html<String> {
    let title = installer_console::html::escape_xml(title);
    Html(format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset='utf-8'>\n<title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        title, body
    ))
}

pub(super) fn plain_text(body: String) -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}
