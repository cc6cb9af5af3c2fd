use mio::net::TcpStream;
use std::time::Instant;

#[derive(Debug, PartialEq)]
pub enum ConnectionState {
    ReadRequest,
    WriteResponse,
}

/// One client connection: the accumulating request bytes on the way in, the
/// serialized response on the way out. Connections never outlive a single
/// request (no keep-alive).
pub struct Connection {
    pub stream: TcpStream,
    pub state: ConnectionState,
    pub read_buffer: Vec<u8>,
    pub write_buffer: Vec<u8>,
    pub bytes_written: usize,
    pub last_activity: Instant,
}

impl Connection {
    pub fn new(stream: TcpStream) -> Self {
        Self {
            stream,
            state: ConnectionState::ReadRequest,
            read_buffer: Vec::with_capacity(8192),
            write_buffer: Vec::new(),
            bytes_written: 0,
            last_activity: Instant::now(),
        }
    }
}
