use broadside::{
    init_logging, CliPlayer, GameStatus, Role, Session, TcpTransport, TransportError,
    DEFAULT_PORT,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Host a match and wait for a peer to connect.
    Host {
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Join a match hosted by a peer.
    Join {
        /// Host address as ADDRESS:PORT, e.g. 192.168.1.20:5598.
        address: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    println!("----- Broadside -----");

    let (role, transport) = match cli.command {
        Commands::Host { port } => {
            println!();
            println!("Awaiting connection over port {}...", port);
            println!();
            println!("You must share your public IP address if playing over the internet,");
            println!("and forward the port in your router. On a shared network, use your");
            println!("private IP address instead.");
            let (transport, peer) = TcpTransport::host(port).await?;
            println!("Peer connected from {}", peer);
            (Role::Host, transport)
        }
        Commands::Join { address } => {
            println!("Connecting to {}...", address);
            let transport = TcpTransport::connect(address.as_str()).await?;
            println!("Connected!");
            (Role::Join, transport)
        }
    };

    let mut session = Session::new(role, Box::new(CliPlayer::new()), Box::new(transport));
    match session.run().await {
        Ok(GameStatus::Won) => println!("\nYou won! You have defeated your peer!"),
        Ok(GameStatus::Lost) => println!("\nYou have been defeated! Your peer won!"),
        Err(err) => {
            if matches!(
                err.downcast_ref::<TransportError>(),
                Some(TransportError::PeerDisconnected)
            ) {
                eprintln!("\nThe other player has disconnected. Ending game...");
            } else {
                eprintln!("\nGame ended with an error: {}", err);
            }
            std::process::exit(1);
        }
    }
    Ok(())
}
