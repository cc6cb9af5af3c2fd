pub mod connection;

use crate::config::models::Config;
use crate::error::ServerError;
use crate::handlers;
use crate::http::request::HttpRequest;
use crate::http::response::Response;
use crate::server::connection::{Connection, ConnectionState};
use crate::store::AppState;

use mio::net::TcpListener;
use mio::{Events, Interest, Poll, Token};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::io::{self, Read, Write};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

const LISTENER: Token = Token(0);

pub struct Server {
    poll: Poll,
    listener: Option<TcpListener>,
    connections: HashMap<Token, Connection>,
    config: Config,
    state: Mutex<AppState>,
    next_token: usize,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            poll: Poll::new().expect("failed to create mio poll"),
            listener: None,
            connections: HashMap::new(),
            config,
            state: Mutex::new(AppState::new()),
            next_token: 1,
        }
    }

    pub fn bind(&mut self) -> Result<(), ServerError> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let addr = addr
            .parse()
            .map_err(|_| ServerError::Address(addr.clone()))?;

        let mut listener = TcpListener::bind(addr)?;
        self.poll
            .registry()
            .register(&mut listener, LISTENER, Interest::READABLE)?;
        self.listener = Some(listener);

        info!("listening on http://{addr}");
        Ok(())
    }

    pub fn run(&mut self) {
        let mut events = Events::with_capacity(1024);

        loop {
            if let Err(e) = self
                .poll
                .poll(&mut events, Some(Duration::from_millis(1000)))
            {
                error!("poll error: {e}");
                continue;
            }

            for event in events.iter() {
                let token = event.token();
                if token == LISTENER {
                    self.accept_connections();
                } else {
                    if event.is_readable() {
                        self.read_from_client(token);
                    }
                    if event.is_writable() {
                        self.write_to_client(token);
                    }
                    if event.is_read_closed() || event.is_write_closed() {
                        self.close_connection(token);
                    }
                }
            }
            self.check_timeouts();
        }
    }

    fn accept_connections(&mut self) {
        let Some(listener) = self.listener.as_mut() else {
            return;
        };
        loop {
            match listener.accept() {
                Ok((mut stream, peer)) => {
                    let token = Token(self.next_token);
                    self.next_token += 1;

                    if let Err(e) =
                        self.poll
                            .registry()
                            .register(&mut stream, token, Interest::READABLE)
                    {
                        warn!("failed to register {peer}: {e}");
                        continue;
                    }
                    self.connections.insert(token, Connection::new(stream));
                    debug!("accepted {peer} as {token:?}");
                }
                Err(ref e) if e.kind() == io::ErrorKind::WouldBlock => break,
                Err(_) => break,
            }
        }
    }

    fn read_from_client(&mut self, token: Token) {
        let conn = match self.connections.get_mut(&token) {
            Some(c) if c.state == ConnectionState::ReadRequest => c,
            _ => return,
        };

        let mut buf = [0u8; 4096];
        let mut request_complete = false;
        loop {
            match conn.stream.read(&mut buf) {
                Ok(0) => {
                    self.close_connection(token);
                    return;
                }
                Ok(n) => {
                    conn.read_buffer.extend_from_slice(&buf[..n]);
                    conn.last_activity = Instant::now();

                    if conn.read_buffer.len() > self.config.max_request_size {
                        warn!("request exceeds {} bytes, rejecting", self.config.max_request_size);
                        self.finalize_response(token, Response::bad_request().into_bytes());
                        return;
                    }
                    if HttpRequest::is_complete(&conn.read_buffer) {
                        request_complete = true;
                        break;
                    }
                }
                Err(ref e) if e.kind() == io::ErrorKind::WouldBlock => break,
                Err(_) => {
                    self.close_connection(token);
                    return;
                }
            }
        }

        if request_complete {
            self.process_request(token);
        }
    }

    fn process_request(&mut self, token: Token) {
        let response = {
            let conn = match self.connections.get(&token) {
                Some(c) => c,
                None => return,
            };
            match HttpRequest::parse(&conn.read_buffer) {
                Some(req) => {
                    debug!(method = %req.method, path = %req.path, "dispatch");
                    let mut state = self.state.lock();
                    handlers::dispatch(&req, &mut state)
                }
                None => {
                    warn!("malformed request from {token:?}");
                    Response::bad_request()
                }
            }
        };
        self.finalize_response(token, response.into_bytes());
    }

    /// Hand the serialized response to the connection and flip its interest
    /// from read to write.
    fn finalize_response(&mut self, token: Token, response_bytes: Vec<u8>) {
        if let Some(conn) = self.connections.get_mut(&token) {
            conn.write_buffer = response_bytes;
            conn.state = ConnectionState::WriteResponse;
            conn.last_activity = Instant::now();

            if let Err(e) =
                self.poll
                    .registry()
                    .reregister(&mut conn.stream, token, Interest::WRITABLE)
            {
                error!("failed to reregister {token:?}: {e}");
                self.close_connection(token);
            }
        }
    }

    fn write_to_client(&mut self, token: Token) {
        let conn = match self.connections.get_mut(&token) {
            Some(c) if c.state == ConnectionState::WriteResponse => c,
            _ => return,
        };

        while conn.bytes_written < conn.write_buffer.len() {
            let remaining = &conn.write_buffer[conn.bytes_written..];
            match conn.stream.write(remaining) {
                Ok(n) => {
                    conn.bytes_written += n;
                    conn.last_activity = Instant::now();
                }
                Err(ref e) if e.kind() == io::ErrorKind::WouldBlock => return,
                Err(_) => {
                    self.close_connection(token);
                    return;
                }
            }
        }

        debug!("response sent to {token:?}");
        self.close_connection(token);
    }

    fn check_timeouts(&mut self) {
        let now = Instant::now();
        let timeout = Duration::from_secs(self.config.timeout_seconds);
        let stale: Vec<Token> = self
            .connections
            .iter()
            .filter(|(_, conn)| now.duration_since(conn.last_activity) > timeout)
            .map(|(&t, _)| t)
            .collect();

        for token in stale {
            debug!("closing idle connection {token:?}");
            self.close_connection(token);
        }
    }

    fn close_connection(&mut self, token: Token) {
        if let Some(mut conn) = self.connections.remove(&token) {
            let _ = self.poll.registry().deregister(&mut conn.stream);
        }
    }
}
