use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use std::fs;
use std::path::Path;

/// Serve a file under static/ for a request path like "/static/main.css".
pub fn static_response(req_path: &str) -> ResultResp {
    let rel = req_path.trim_start_matches("/static/");

    // Keep requests inside the static directory.
    if rel.is_empty() || rel.contains("..") {
        return Err(ServerError::NotFound);
    }

    let path = Path::new("static").join(rel);
    let bytes = fs::read(&path).map_err(|_| ServerError::NotFound)?;

    let content_type = match path.extension().and_then(|e| e.to_str()) {
        Some("css") => mime::TEXT_CSS_UTF_8.as_ref(),
        Some("js") => mime::TEXT_JAVASCRIPT.as_ref(),
        Some("svg") => mime::IMAGE_SVG.as_ref(),
        Some("png") => mime::IMAGE_PNG.as_ref(),
        Some("jpg") | Some("jpeg") => mime::IMAGE_JPEG.as_ref(),
        _ => mime::APPLICATION_OCTET_STREAM.as_ref(),
    };

    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .body(Body::from(bytes))
        .map_err(|_| ServerError::InternalError)?;

    Ok(resp)
}
