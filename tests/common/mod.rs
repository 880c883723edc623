use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread;

/// Minimal recording HTTP stub on an ephemeral port.
pub struct Stub {
    pub base_url: String,
    hits: Arc<Mutex<Vec<(String, String)>>>,
}

impl Stub {
    pub fn start<F>(respond: F) -> Self
    where
        F: Fn(&str, &str) -> (u16, String) + Send + 'static,
    {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let port = server.server_addr().to_ip().unwrap().port();
        let hits = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&hits);

        thread::spawn(move || {
            for mut request in server.incoming_requests() {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);
                let path = request.url().to_string();
                let (status, payload) = respond(&path, &body);
                recorded.lock().unwrap().push((path, body));
                let _ = request.respond(tiny_http::Response::from_string(payload).with_status_code(status));
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{}", port),
            hits,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn bodies_for(&self, path: &str) -> Vec<String> {
        self.hits
            .lock()
            .unwrap()
            .iter()
            .filter(|(p, _)| p == path)
            .map(|(_, body)| body.clone())
            .collect()
    }
}
