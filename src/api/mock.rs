// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

//! An in-process registry answering canned documents

use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use axum::extract::State;
use axum::http::header::{HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::sync::oneshot;

#[derive(Clone, Debug)]
pub struct Manifest {
    /// Repository name as it appears, encoded, in the request path
    pub name: String,
    pub tag: String,
    pub v2: String,
    pub digest: Option<String>,
    pub v1: Option<String>,
}

/// Anything not configured answers 404, except the catalog which answers 500
#[derive(Clone, Debug)]
pub struct Mock {
    probe: u16,
    catalog: Option<String>,
    tags: Vec<(String, String)>,
    manifests: Vec<Manifest>,
    requests: Arc<Mutex<Vec<(String, String)>>>,
}

impl Default for Mock {
    fn default() -> Self {
        Self {
            probe: 200,
            catalog: None,
            tags: Vec::new(),
            manifests: Vec::new(),
            requests: Default::default(),
        }
    }
}

fn json(body: &str) -> Response {
    ([(CONTENT_TYPE, "application/json")], body.to_string()).into_response()
}

impl Mock {
    pub fn probe(mut self, status: u16) -> Self {
        self.probe = status;
        self
    }

    pub fn catalog(mut self, body: &str) -> Self {
        self.catalog = Some(body.into());
        self
    }

    pub fn tags(mut self, name: &str, body: &str) -> Self {
        self.tags.push((name.into(), body.into()));
        self
    }

    pub fn manifest(mut self, manifest: Manifest) -> Self {
        self.manifests.push(manifest);
        self
    }

    fn respond(&self, path: &str, accept: &str) -> Response {
        self.requests
            .lock()
            .unwrap()
            .push((path.into(), accept.into()));

        let rest = match path.strip_prefix("/v2") {
            Some(rest) => rest,
            None => return StatusCode::NOT_FOUND.into_response(),
        };

        match rest {
            "/" => return (StatusCode::from_u16(self.probe).unwrap(), "{}").into_response(),
            "/_catalog" => {
                return match &self.catalog {
                    Some(body) => json(body),
                    None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
                }
            }
            _ => (),
        }

        let segments: Vec<&str> = rest.trim_start_matches('/').split('/').collect();
        match segments.as_slice() {
            [name, "tags", "list"] => match self.tags.iter().find(|(n, ..)| n == name) {
                Some((_, body)) => json(body),
                None => StatusCode::NOT_FOUND.into_response(),
            },

            [name, "manifests", tag] => {
                let m = match self.manifests.iter().find(|m| m.name == *name && m.tag == *tag) {
                    Some(m) => m,
                    None => return StatusCode::NOT_FOUND.into_response(),
                };

                if accept.contains("manifest.v1+json") {
                    return match &m.v1 {
                        Some(body) => json(body),
                        None => StatusCode::NOT_FOUND.into_response(),
                    };
                }

                let mut rep = json(&m.v2);
                if let Some(digest) = &m.digest {
                    rep.headers_mut().insert(
                        HeaderName::from_static("docker-content-digest"),
                        HeaderValue::from_str(digest).unwrap(),
                    );
                }
                rep
            }

            _ => StatusCode::NOT_FOUND.into_response(),
        }
    }

    /// Starts serving on an ephemeral local port
    pub fn serve(self) -> Served {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let addr = listener.local_addr().unwrap();

        let requests = self.requests.clone();
        let (stop, stopped) = oneshot::channel::<()>();

        let app = Router::new()
            .fallback(handle)
            .with_state(Arc::new(self));

        let thread = std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();

            rt.block_on(async move {
                let server = axum::Server::from_tcp(listener)
                    .unwrap()
                    .serve(app.into_make_service());

                tokio::select! {
                    _ = server => (),
                    _ = stopped => (),
                }
            });
        });

        Served {
            url: format!("http://{}/v2", addr),
            addr,
            requests,
            stop: Some(stop),
            thread: Some(thread),
        }
    }
}

async fn handle(State(mock): State<Arc<Mock>>, uri: Uri, headers: HeaderMap) -> Response {
    let accept = headers
        .get(ACCEPT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    mock.respond(uri.path(), accept)
}

/// A running mock; shut down and joined on drop
pub struct Served {
    pub url: String,
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<(String, String)>>>,
    stop: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl Served {
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Every request received so far, as `(path, accept)`
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for Served {
    fn drop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }

        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
