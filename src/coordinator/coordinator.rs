/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::info;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::coordinator::Dispatcher;
use crate::shared::{Direction, DispatchError, ElevatorStatus};

/***************************************/
/*               Enums                 */
/***************************************/
pub enum Command {
    ExternalRequest {
        floor: i32,
        direction: Direction,
        reply: cbc::Sender<Result<usize, DispatchError>>,
    },
    InternalRequest {
        elevator_id: usize,
        floor: i32,
        reply: cbc::Sender<Result<(), DispatchError>>,
    },
    Advance {
        reply: cbc::Sender<()>,
    },
    Status {
        reply: cbc::Sender<Vec<ElevatorStatus>>,
    },
}

enum Event {
    CommandReceived(Command),
    Terminate,
}

/**
 * Owns the `Dispatcher` on a dedicated thread.
 *
 * Every caller goes through the command channel, so commands are applied one
 * at a time in arrival order and scoring always sees the result of the
 * previous command.
 *
 * # Fields
 * - `dispatcher`:      The fleet and its assignment logic.
 * - `command_rx`:      Receives commands from `DispatchHandle`s.
 * - `terminate_rx`:    Stops the loop when signalled.
 */
pub struct DispatchServer {
    dispatcher: Dispatcher,
    command_rx: cbc::Receiver<Command>,
    terminate_rx: cbc::Receiver<()>,
}

impl DispatchServer {
    pub fn new(
        dispatcher: Dispatcher,
        command_rx: cbc::Receiver<Command>,
        terminate_rx: cbc::Receiver<()>,
    ) -> DispatchServer {
        DispatchServer {
            dispatcher,
            command_rx,
            terminate_rx,
        }
    }

    /// Serves commands until terminated or every handle is dropped, then hands the fleet back.
    pub fn run(mut self) -> Dispatcher {
        info!("Dispatcher started with {} elevators", self.dispatcher.elevators().len());
        loop {
            match self.wait_for_event() {
                Event::CommandReceived(command) => self.handle_command(command),
                Event::Terminate => break,
            }
        }
        info!("Dispatcher terminated");
        self.dispatcher
    }

    fn handle_command(&mut self, command: Command) {
        // A caller that stopped waiting for its reply is not an error here
        match command {
            Command::ExternalRequest { floor, direction, reply } => {
                let _ = reply.send(self.dispatcher.submit_external_request(floor, direction));
            }
            Command::InternalRequest { elevator_id, floor, reply } => {
                let _ = reply.send(self.dispatcher.submit_internal_request(elevator_id, floor));
            }
            Command::Advance { reply } => {
                self.dispatcher.advance_all();
                let _ = reply.send(());
            }
            Command::Status { reply } => {
                let _ = reply.send(self.dispatcher.statuses());
            }
        }
    }

    fn wait_for_event(&self) -> Event {
        cbc::select! {
            recv(self.command_rx) -> command => {
                match command {
                    Ok(command) => Event::CommandReceived(command),
                    Err(_) => Event::Terminate,
                }
            },

            recv(self.terminate_rx) -> _ => {
                Event::Terminate
            }
        }
    }
}

/// Cloneable client side of a running `DispatchServer`.
#[derive(Clone)]
pub struct DispatchHandle {
    command_tx: cbc::Sender<Command>,
}

impl DispatchHandle {
    pub fn new(command_tx: cbc::Sender<Command>) -> DispatchHandle {
        DispatchHandle { command_tx }
    }

    pub fn submit_external_request(&self, floor: i32, direction: Direction) -> Result<usize, DispatchError> {
        let (reply, reply_rx) = cbc::bounded(1);
        self.send(Command::ExternalRequest { floor, direction, reply })?;
        reply_rx.recv().map_err(|_| DispatchError::Disconnected)?
    }

    pub fn submit_internal_request(&self, elevator_id: usize, floor: i32) -> Result<(), DispatchError> {
        let (reply, reply_rx) = cbc::bounded(1);
        self.send(Command::InternalRequest { elevator_id, floor, reply })?;
        reply_rx.recv().map_err(|_| DispatchError::Disconnected)?
    }

    pub fn advance_all(&self) -> Result<(), DispatchError> {
        let (reply, reply_rx) = cbc::bounded(1);
        self.send(Command::Advance { reply })?;
        reply_rx.recv().map_err(|_| DispatchError::Disconnected)
    }

    pub fn statuses(&self) -> Result<Vec<ElevatorStatus>, DispatchError> {
        let (reply, reply_rx) = cbc::bounded(1);
        self.send(Command::Status { reply })?;
        reply_rx.recv().map_err(|_| DispatchError::Disconnected)
    }

    fn send(&self, command: Command) -> Result<(), DispatchError> {
        self.command_tx.send(command).map_err(|_| DispatchError::Disconnected)
    }
}
