use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, web};
use log::debug;
use std::path::{Component, Path, PathBuf};

const DEFAULT_DOCUMENT: &str = "index.html";
const NOT_FOUND_BODY: &str = "File not found";

/// Directory the page bundle is served from.
pub struct StaticRoot(pub PathBuf);

pub fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        _ => "text/plain",
    }
}

/// Maps a request path onto the root. `None` for paths leaving the root.
pub fn resolve(root: &Path, request_path: &str) -> Option<PathBuf> {
    let relative = match request_path.trim_start_matches('/') {
        "" => DEFAULT_DOCUMENT,
        relative => relative,
    };
    let relative = Path::new(relative);
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        return None;
    }
    Some(root.join(relative))
}

pub async fn serve_file(req: HttpRequest, root: web::Data<StaticRoot>) -> HttpResponse {
    let Some(path) = resolve(&root.0, req.path()) else {
        debug!("serve_file | rejected path: {}", req.path());
        return not_found();
    };

    let read_path = path.clone();
    // every failure, including reading a directory, is a 404
    match web::block(move || std::fs::read(read_path)).await {
        Ok(Ok(content)) => HttpResponse::Ok()
            .content_type(content_type(&path))
            .body(content),
        Ok(Err(e)) => {
            debug!("serve_file | path: {} | {}", path.display(), e);
            not_found()
        }
        Err(e) => {
            debug!("serve_file | path: {} | {}", path.display(), e);
            not_found()
        }
    }
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type(ContentType::plaintext())
        .body(NOT_FOUND_BODY)
}
