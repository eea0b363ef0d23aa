//! Peer-to-peer networked Battleship over a length-prefixed TCP channel.
//!
//! One process hosts, one joins; both place a five-ship fleet on a 10x10
//! grid, then alternate attacks until a fleet is sunk. The [`Session`]
//! state machine drives the exchange over a [`Transport`], fed by a
//! [`Player`] (the input side) and rendered by [`ui`].

mod board;
mod common;
mod config;
mod logging;
pub mod player;
pub mod protocol;
mod session;
mod ship;
pub mod transport;
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use logging::init_logging;
pub use player::{CliPlayer, Player};
pub use protocol::*;
pub use session::*;
pub use ship::*;
pub use transport::in_memory::InMemoryTransport;
pub use transport::tcp::TcpTransport;
pub use transport::{Transport, TransportError};
