//! Local preview server.
//!
//! Builds the site, then serves the output directory over HTTP until
//! Ctrl+C. The configured `base_url` prefix is cleared during preview
//! (unless `serve.respect_prefix` is set), so pages are reachable at `/`.

use anyhow::{Context, Result};
use std::fs;
use std::net::SocketAddr;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;
use tiny_http::{Header, Response, Server};

use crate::cli::build::build_site;
use crate::config::SiteConfig;
use crate::core::{UrlPath, is_shutdown};
use crate::utils::path::extension_lower;
use crate::{debug, log};

const RECV_TIMEOUT: Duration = Duration::from_millis(500);

/// Build the site and serve it until shutdown.
pub fn serve_site(config: &SiteConfig) -> Result<()> {
    build_site(config)?;

    let addr = SocketAddr::new(config.serve.interface, config.serve.port);
    let server = Server::http(addr)
        .map_err(|e| anyhow::anyhow!("Failed to bind {addr}: {e}"))?;

    log!("serve"; "http://{addr}/ (Ctrl+C to stop)");

    let output_dir = config.paths().output_dir();
    loop {
        if is_shutdown() {
            log!("serve"; "shutting down");
            return Ok(());
        }

        let Some(request) = server
            .recv_timeout(RECV_TIMEOUT)
            .context("Failed to receive HTTP request")?
        else {
            continue;
        };

        let url = UrlPath::from_browser(request.url());
        // a file that vanished between lookup and read is just a 404
        let found = lookup(&output_dir, url.as_str())
            .and_then(|file| fs::read(&file).ok().map(|data| (file, data)));
        match found {
            Some((file, data)) => {
                debug!("serve"; "200 {}", url);
                let response = Response::from_data(data).with_header(content_type_for(&file));
                request.respond(response).ok();
            }
            None => {
                debug!("serve"; "404 {}", url);
                let response = Response::from_string(NOT_FOUND_PAGE)
                    .with_status_code(404)
                    .with_header(html_content_type());
                request.respond(response).ok();
            }
        }
    }
}

const NOT_FOUND_PAGE: &str =
    "<!DOCTYPE html><html lang=\"es\"><body><h1>404</h1><p>Página no encontrada.</p></body></html>";

/// Map a request path to a file in the output directory.
///
/// Directory-style URLs resolve to their `index.html`; traversal segments
/// are rejected.
fn lookup(output_dir: &Path, url_path: &str) -> Option<PathBuf> {
    let rel = url_path.trim_start_matches('/');
    let rel_path = Path::new(rel);
    if rel_path
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_) | Component::RootDir))
    {
        return None;
    }

    let candidate = output_dir.join(rel_path);
    if candidate.is_file() {
        return Some(candidate);
    }

    let index = candidate.join("index.html");
    index.is_file().then_some(index)
}

fn html_content_type() -> Header {
    Header::from_bytes(&b"Content-Type"[..], &b"text/html; charset=utf-8"[..])
        .expect("static header is valid")
}

/// Content-Type header for a file, by extension.
fn content_type_for(path: &Path) -> Header {
    let mime = match extension_lower(path).as_deref() {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("xml") => "application/xml",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    };
    Header::from_bytes(&b"Content-Type"[..], mime.as_bytes()).expect("static header is valid")
}
