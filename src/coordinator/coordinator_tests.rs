/*
 * Unit tests for the dispatch thread
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 *  - test_server_init
 *  - test_server_routes_requests
 *  - test_server_reports_errors
 *  - test_server_serializes_concurrent_callers
 *  - test_server_stops_when_handles_dropped
 *  - test_handle_after_terminate
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod coordinator_tests {
    use crate::config::SimulationConfig;
    use crate::coordinator::{Command, DispatchHandle, DispatchServer, Dispatcher};
    use crate::shared::Direction::{Down, Up};
    use crate::shared::{Direction, DispatchError};
    use crossbeam_channel::unbounded;
    use crossbeam_channel::Sender;
    use std::thread::{Builder, JoinHandle};

    fn setup_server(n_elevators: usize) -> (
        DispatchHandle,
        Sender<()>,                 // terminate_tx
        JoinHandle<Dispatcher>) {

        // Arrange mock channels
        let (command_tx, command_rx) = unbounded::<Command>();
        let (terminate_tx, terminate_rx) = unbounded::<()>();

        // Default configuration
        let config = SimulationConfig { n_elevators, ..Default::default() };
        let dispatcher = Dispatcher::from_config(&config).unwrap();

        let server = DispatchServer::new(dispatcher, command_rx, terminate_rx);
        let server_thread = Builder::new()
            .name("dispatcher".into())
            .spawn(move || server.run())
            .unwrap();

        (DispatchHandle::new(command_tx), terminate_tx, server_thread)
    }

    #[test]
    fn test_server_init() {
        // Arrange
        let (handle, terminate_tx, server_thread) = setup_server(2);

        // Act
        let statuses = handle.statuses().unwrap();

        // Assert
        assert_eq!(statuses.len(), 2);
        assert!(statuses.iter().all(|s| s.floor == 1 && s.direction == Direction::None));

        // Cleanup
        terminate_tx.send(()).unwrap();
        server_thread.join().unwrap();
    }

    #[test]
    fn test_server_routes_requests() {
        // Arrange
        let (handle, terminate_tx, server_thread) = setup_server(2);

        // Act
        assert_eq!(handle.submit_external_request(5, Up), Ok(1));
        assert_eq!(handle.submit_external_request(2, Up), Ok(2));
        handle.advance_all().unwrap();
        handle.submit_internal_request(2, 7).unwrap();

        // Assert
        let statuses = handle.statuses().unwrap();
        assert_eq!(statuses[0].floor, 2);
        assert_eq!(statuses[0].up_stops, vec![5]);
        assert_eq!(statuses[1].floor, 2);
        assert_eq!(statuses[1].up_stops, vec![2, 7]);

        // Cleanup: the fleet comes back in the state the thread left it
        terminate_tx.send(()).unwrap();
        let dispatcher = server_thread.join().unwrap();
        assert_eq!(dispatcher.statuses(), statuses);
    }

    #[test]
    fn test_server_reports_errors() {
        // Arrange
        let (handle, terminate_tx, server_thread) = setup_server(2);

        // Act / Assert
        assert_eq!(handle.submit_internal_request(9, 3), Err(DispatchError::UnknownElevator(9)));
        assert_eq!(
            handle.submit_external_request(3, Direction::None),
            Err(DispatchError::MissingDirection(3))
        );

        // The thread keeps serving after a failed command
        assert_eq!(handle.submit_external_request(3, Down), Ok(1));

        // Cleanup
        terminate_tx.send(()).unwrap();
        server_thread.join().unwrap();
    }

    #[test]
    fn test_server_serializes_concurrent_callers() {
        // Arrange
        let (handle, terminate_tx, server_thread) = setup_server(2);

        // Act: four callers each press a cab button on every floor of one car
        let callers: Vec<_> = (0..4)
            .map(|caller| {
                let handle = handle.clone();
                Builder::new()
                    .name(format!("caller_{}", caller))
                    .spawn(move || {
                        for floor in 2..=10 {
                            handle.submit_internal_request(1, floor).unwrap();
                        }
                    })
                    .unwrap()
            })
            .collect();
        for caller in callers {
            caller.join().unwrap();
        }

        // Assert: duplicates collapse, nothing is lost
        let statuses = handle.statuses().unwrap();
        assert_eq!(statuses[0].up_stops, (2..=10).collect::<Vec<i32>>());
        assert_eq!(statuses[0].direction, Up);

        // Cleanup
        terminate_tx.send(()).unwrap();
        server_thread.join().unwrap();
    }

    #[test]
    fn test_server_stops_when_handles_dropped() {
        // Arrange
        let (handle, _terminate_tx, server_thread) = setup_server(1);
        handle.submit_internal_request(1, 4).unwrap();

        // Act
        drop(handle);

        // Assert
        let dispatcher = server_thread.join().unwrap();
        assert_eq!(dispatcher.statuses()[0].up_stops, vec![4]);
    }

    #[test]
    fn test_handle_after_terminate() {
        // Arrange
        let (handle, terminate_tx, server_thread) = setup_server(1);

        // Act
        terminate_tx.send(()).unwrap();
        server_thread.join().unwrap();

        // Assert
        assert_eq!(handle.advance_all(), Err(DispatchError::Disconnected));
        assert_eq!(handle.statuses(), Err(DispatchError::Disconnected));
    }
}
