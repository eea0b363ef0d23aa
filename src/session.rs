//! Session state machine: placement, the ready exchange, and the
//! alternating attack loop.

use anyhow::{anyhow, bail};

use crate::board::Board;
use crate::common::{AttackResult, Coordinate};
use crate::player::Player;
use crate::protocol::{decode_attack, Message};
use crate::transport::Transport;

/// Which side of the connection this process took. Fixed for the whole
/// session; decides the ready-exchange order and who fires first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Host,
    Join,
}

impl Role {
    /// The joiner always takes the first turn. The rule reuses the role
    /// established during connection setup instead of negotiating again.
    pub fn has_first_turn(self) -> bool {
        matches!(self, Role::Join)
    }
}

/// Terminal result from this side's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Won,
    Lost,
}

/// Monotonic session phase. `MyTurn` and `PeerTurn` alternate until one
/// fleet is sunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Placement,
    AwaitingPeer,
    MyTurn,
    PeerTurn,
    Finished(GameStatus),
}

/// One participant's session: the own board, the local mirror of the enemy
/// board, and the channel to the peer. All cross-peer coordination flows
/// through the channel; the mirror is built solely from outcome reports and
/// never sees ship positions.
pub struct Session {
    role: Role,
    own: Board,
    enemy: Board,
    player: Box<dyn Player>,
    transport: Box<dyn Transport>,
    phase: Phase,
}

impl Session {
    pub fn new(role: Role, player: Box<dyn Player>, transport: Box<dyn Transport>) -> Self {
        Self {
            role,
            own: Board::new(),
            enemy: Board::new(),
            player,
            transport,
            phase: Phase::Placement,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn own_board(&self) -> &Board {
        &self.own
    }

    pub fn enemy_board(&self) -> &Board {
        &self.enemy
    }

    /// Drive the session to completion. Channel failures and protocol
    /// violations abort with the underlying error; no recovery is attempted.
    pub async fn run(&mut self) -> anyhow::Result<GameStatus> {
        self.player.place_ships(&mut self.own)?;
        if !self.own.all_placed() {
            bail!("placement finished with ships missing from the board");
        }

        self.phase = Phase::AwaitingPeer;
        self.player
            .status_update(&self.enemy, &self.own, "Waiting for peer to place ships...");
        self.exchange_ready().await?;
        log::debug!("ready exchange complete as {:?}", self.role);

        self.phase = if self.role.has_first_turn() {
            Phase::MyTurn
        } else {
            Phase::PeerTurn
        };
        let status = loop {
            match self.phase {
                Phase::MyTurn => self.my_turn().await?,
                Phase::PeerTurn => self.peer_turn().await?,
                Phase::Finished(status) => break status,
                // run() owns the phase; the setup states never recur.
                Phase::Placement | Phase::AwaitingPeer => unreachable!(),
            }
        };
        let message = match status {
            GameStatus::Won => "You won! You have defeated your peer!",
            GameStatus::Lost => "You have been defeated! Your peer won!",
        };
        self.player.status_update(&self.enemy, &self.own, message);
        Ok(status)
    }

    /// Ready exchange, asymmetric by design: the joiner announces readiness
    /// and waits for the host's start signal; the host waits for the
    /// announcement, then starts the game.
    async fn exchange_ready(&mut self) -> anyhow::Result<()> {
        match self.role {
            Role::Join => {
                self.transport.send(Message::AllPlaced).await?;
                match self.transport.recv().await? {
                    Message::StartGame => Ok(()),
                    other => bail!("expected StartGame, peer sent {:?}", other),
                }
            }
            Role::Host => {
                match self.transport.recv().await? {
                    Message::AllPlaced => {}
                    other => bail!("expected AllPlaced, peer sent {:?}", other),
                }
                self.transport.send(Message::StartGame).await
            }
        }
    }

    async fn my_turn(&mut self) -> anyhow::Result<()> {
        let coord = self.player.select_target(&self.enemy, &self.own);
        self.transport.send(Message::attack(coord)).await?;
        let outcome = match self.transport.recv().await? {
            Message::Outcome(outcome) => outcome,
            other => bail!("expected Outcome, peer sent {:?}", other),
        };
        match outcome {
            AttackResult::Miss => self.enemy.record_miss(coord)?,
            AttackResult::Hit => self.enemy.record_hit(coord)?,
            AttackResult::HitAndSunk(kind) => {
                self.enemy.record_hit(coord)?;
                self.enemy.mark_sunk(kind);
            }
        }
        self.player.attack_resolved(coord, outcome);
        self.advance(Phase::PeerTurn);
        Ok(())
    }

    async fn peer_turn(&mut self) -> anyhow::Result<()> {
        self.player.status_update(
            &self.enemy,
            &self.own,
            "Peer's turn, waiting for their attack...",
        );
        let coord = match self.transport.recv().await? {
            Message::Attack { row, col } => decode_attack(row, col)
                .ok_or_else(|| anyhow!("peer sent out-of-bounds attack ({}, {})", row, col))?,
            other => bail!("expected Attack, peer sent {:?}", other),
        };
        // A duplicate coordinate from the peer is a protocol violation, not
        // something to retry.
        let outcome = self.own.attack(coord)?;
        self.transport.send(Message::Outcome(outcome)).await?;
        self.player.attack_received(coord, outcome);
        self.advance(Phase::MyTurn);
        Ok(())
    }

    /// Win evaluation runs after every turn, on both boards.
    fn advance(&mut self, next: Phase) {
        self.phase = if self.own.all_sunk() {
            Phase::Finished(GameStatus::Lost)
        } else if self.enemy.all_sunk() {
            Phase::Finished(GameStatus::Won)
        } else {
            next
        };
        log::debug!("phase -> {:?}", self.phase);
    }
}

/// A session needs a coordinate the mirror has not seen yet; the player
/// contract guarantees it. Exposed for input collaborators that want the
/// same check the CLI uses.
pub fn is_fresh_target(enemy: &Board, coord: Coordinate) -> bool {
    coord.in_bounds() && !enemy.is_attacked(coord)
}
