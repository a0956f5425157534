use log::{error, info, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::handler::AdminFileHandler;
use crate::protocol::{CommandStatus, handle_command, parse_command};

pub struct Server {
    listener: TcpListener,
    handler: Arc<AdminFileHandler>,
    config: Arc<ServerConfig>,
}

impl Server {
    pub async fn new(config: ServerConfig) -> Result<Self, ServerError> {
        let addr = config.socket_addr();
        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            error!("Failed to bind to {}: {}", addr, e);
            ServerError::Io(e)
        })?;
        info!("Server bound to {}", addr);

        // Handler state is fully built before the first connection is
        // accepted; it is read-only from here on
        let handler = Arc::new(AdminFileHandler::new(&config));

        Ok(Self {
            listener,
            handler,
            config: Arc::new(config),
        })
    }

    pub async fn start(&self) {
        info!(
            "Starting admin file server on {}",
            self.config.socket_addr()
        );

        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    let handler = Arc::clone(&self.handler);
                    let config = Arc::clone(&self.config);

                    // Spawn a task per connection so the accept loop doesn't block
                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(stream, addr, handler, config).await {
                            warn!("Failed to handle client {}: {}", addr, e);
                        }
                    });
                }
                Err(e) => {
                    error!("Error accepting connection: {}", e);
                }
            }
        }
    }
}

/// Handles one admin session: greets, then serves line-oriented commands
/// until the client quits or disconnects.
async fn handle_connection(
    stream: TcpStream,
    client_addr: SocketAddr,
    handler: Arc<AdminFileHandler>,
    config: Arc<ServerConfig>,
) -> Result<(), std::io::Error> {
    let (read_half, mut write_half) = stream.into_split();
    let mut reader = BufReader::new(read_half);
    let mut line = String::new();

    write_half.write_all(b"200 Admin file service ready\r\n").await?;
    write_half.flush().await?;

    loop {
        line.clear();
        let n = reader.read_line(&mut line).await?;
        if n == 0 {
            info!("Connection closed by client {}", client_addr);
            break;
        }

        if line.len() > config.max_command_length {
            write_half.write_all(b"400 Command too long\r\n").await?;
            continue;
        }

        let command = parse_command(line.trim_end_matches("\r\n"));
        info!("Received from {}: {:?}", client_addr, command);

        let result = handle_command(&handler, &command);
        if let Some(msg) = result.message {
            write_half.write_all(msg.as_bytes()).await?;
        }

        if matches!(result.status, CommandStatus::CloseConnection) {
            info!("Client {} requested to quit", client_addr);
            break;
        }
    }

    info!("Client {} disconnected", client_addr);
    Ok(())
}
