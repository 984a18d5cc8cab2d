/*
 * Unit tests for the elevator state machine and its door
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_door_initial_state
 * - test_door_open_close_idempotent
 * - test_elevator_valid_bounds
 * - test_elevator_invalid_bounds
 * - test_elevator_parse_rejects_non_integer_bounds
 * - test_elevator_is_free
 * - test_elevator_target_ground_floor_is_not_free
 * - test_elevator_cannot_go_above_highest_floor
 * - test_elevator_cannot_go_below_lowest_floor
 * - test_elevator_cannot_move_with_door_open
 * - test_elevator_direction
 * - test_elevator_move_to_out_of_bounds
 * - test_elevator_stops_and_stop_queue
 * - test_elevator_stop_queue_first_stop_here
 * - test_elevator_people_leaving
 * - test_elevator_unload_leaving
 * - test_elevator_unload_nobody_keeps_door_closed
 * - test_elevator_step_moves_towards_destination
 * - test_elevator_step_follows_last_stop
 * - test_elevator_step_idle
 * - test_elevator_display
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod fsm_tests {
    use crate::elevator::{Door, Elevator, Passenger};
    use crate::shared::Direction::{Down, Nowhere, Up};
    use crate::shared::{ElevatorId, FloorInput, PassengerId, SimError};

    fn setup_elevator(lowest: i32, highest: i32) -> Elevator {
        Elevator::new(ElevatorId(1), lowest, highest).unwrap()
    }

    fn passenger(id: u32, origin: i32, destination: i32) -> Passenger {
        Passenger::new(PassengerId(id), &format!("P{}", id), origin, destination)
    }

    #[test]
    fn test_door_initial_state() {
        // Purpose: A new door is closed unless told otherwise

        // Arrange, Act
        let door = Door::default();
        let open_door = Door::new(true);

        // Assert
        assert!(!door.is_open());
        assert!(open_door.is_open());
    }

    #[test]
    fn test_door_open_close_idempotent() {
        // Purpose: Opening an open door or closing a closed door changes nothing

        // Arrange
        let mut door = Door::default();

        // Act, Assert
        door.close();
        assert!(!door.is_open());
        door.open();
        door.open();
        assert!(door.is_open());
        door.close();
        door.close();
        assert!(!door.is_open());
    }

    #[test]
    fn test_elevator_valid_bounds() {
        // Purpose: Every valid bound pair builds an elevator resting at ground level

        for (lowest, highest) in [(0, 1), (-1, 4), (-3, 5), (-10, 1), (0, 100)] {
            // Act
            let elevator = Elevator::new(ElevatorId(1), lowest, highest).unwrap();

            // Assert
            assert_eq!(elevator.current_floor(), 0);
            assert_eq!(elevator.lowest_floor(), lowest);
            assert_eq!(elevator.highest_floor(), highest);
            assert!(!elevator.door().is_open());
            assert!(elevator.is_free());
        }
    }

    #[test]
    fn test_elevator_invalid_bounds() {
        // Purpose: Malformed bounds fail construction

        for (lowest, highest) in [(1, 1), (2, 1), (-3, -2), (1, 2), (0, 0), (-1, 0)] {
            // Act
            let result = Elevator::new(ElevatorId(1), lowest, highest);

            // Assert
            assert!(
                matches!(result, Err(SimError::InvalidElevatorConfig { .. })),
                "({}, {}) should be rejected",
                lowest,
                highest
            );
        }
    }

    #[test]
    fn test_elevator_parse_rejects_non_integer_bounds() {
        // Purpose: Bounds must be integers, numeric strings included are refused

        // Act
        let ground = Elevator::parse(ElevatorId(1), &"ground".into(), &"first".into());
        let fractional = Elevator::parse(ElevatorId(1), &FloorInput::Float(-1.2), &FloorInput::Integer(1));
        let numeric = Elevator::parse(ElevatorId(1), &"-1".into(), &" 4 ".into());
        let integers = Elevator::parse(ElevatorId(1), &FloorInput::Integer(-1), &FloorInput::Integer(4));

        // Assert
        assert!(matches!(ground, Err(SimError::InvalidElevatorConfig { .. })));
        assert!(matches!(fractional, Err(SimError::InvalidElevatorConfig { .. })));
        assert!(matches!(numeric, Err(SimError::InvalidElevatorConfig { .. })));
        let integers = integers.unwrap();
        assert_eq!(integers.lowest_floor(), -1);
        assert_eq!(integers.highest_floor(), 4);
    }

    #[test]
    fn test_elevator_is_free() {
        // Arrange
        let mut elevator = setup_elevator(0, 1);
        assert!(elevator.is_free());

        // Act
        elevator.move_to(1).unwrap();

        // Assert
        assert!(!elevator.is_free());
    }

    #[test]
    fn test_elevator_target_ground_floor_is_not_free() {
        // Purpose: A car heading for floor 0 is busy, 0 is a real target

        // Arrange
        let mut elevator = setup_elevator(-2, 2);
        elevator.down_one().unwrap();

        // Act
        elevator.move_to(0).unwrap();

        // Assert
        assert!(!elevator.is_free());
        assert_eq!(elevator.direction(), Up);
        elevator.step().unwrap();
        assert_eq!(elevator.current_floor(), 0);
    }

    #[test]
    fn test_elevator_cannot_go_above_highest_floor() {
        // Arrange
        let mut elevator = setup_elevator(0, 1);
        elevator.up_one().unwrap();

        // Act
        let result = elevator.up_one();

        // Assert
        assert_eq!(
            result,
            Err(SimError::FloorBound { elevator: ElevatorId(1), floor: 2, lowest: 0, highest: 1 })
        );
        assert_eq!(elevator.current_floor(), 1);
    }

    #[test]
    fn test_elevator_cannot_go_below_lowest_floor() {
        // Arrange
        let mut elevator = setup_elevator(0, 1);

        // Act
        let result = elevator.down_one();

        // Assert
        assert!(matches!(result, Err(SimError::FloorBound { floor: -1, .. })));
        assert_eq!(elevator.current_floor(), 0);
    }

    #[test]
    fn test_elevator_cannot_move_with_door_open() {
        // Purpose: Any floor step with an open door fails and leaves the floor untouched

        // Arrange
        let mut elevator = setup_elevator(-2, 2);
        elevator.down_one().unwrap();
        elevator.up_one().unwrap();
        elevator.open_door();

        // Act, Assert
        assert_eq!(elevator.down_one(), Err(SimError::DoorObstruction { elevator: ElevatorId(1) }));
        assert_eq!(elevator.up_one(), Err(SimError::DoorObstruction { elevator: ElevatorId(1) }));
        assert_eq!(elevator.current_floor(), 0);

        elevator.close_door();
        elevator.down_one().unwrap();
        elevator.up_one().unwrap();
        assert_eq!(elevator.current_floor(), 0);
    }

    #[test]
    fn test_elevator_direction() {
        // Arrange
        let mut elevator = setup_elevator(-3, 3);

        // Act, Assert
        assert_eq!(elevator.direction(), Nowhere);
        elevator.move_to(2).unwrap();
        assert_eq!(elevator.direction(), Up);
        elevator.move_to(-2).unwrap();
        assert_eq!(elevator.direction(), Down);
        elevator.move_to(0).unwrap();
        assert_eq!(elevator.direction(), Nowhere);
    }

    #[test]
    fn test_elevator_move_to_out_of_bounds() {
        // Purpose: A destination outside the bounds is never accepted

        // Arrange
        let mut elevator = setup_elevator(-1, 4);

        // Act
        let result = elevator.move_to(5);

        // Assert
        assert!(matches!(result, Err(SimError::FloorBound { floor: 5, .. })));
        assert!(elevator.is_free());
    }

    #[test]
    fn test_elevator_stops_and_stop_queue() {
        // Purpose: The earliest boarded passenger decides which side of the car is served

        // Arrange
        let mut elevator = setup_elevator(-3, 5);
        assert_eq!(elevator.stop_queue(), None);
        elevator.up_one().unwrap();
        elevator.board(passenger(1, 1, 3));
        elevator.board(passenger(2, 1, -2));
        elevator.board(passenger(3, 1, 5));
        elevator.board(passenger(4, 1, 3));

        // Act
        let stops = elevator.stops();
        let queue = elevator.stop_queue();

        // Assert
        assert_eq!(stops, vec![3, -2, 5, 3]);
        assert_eq!(queue, Some(vec![3, 5, 3]));
    }

    #[test]
    fn test_elevator_stop_queue_first_stop_here() {
        // Purpose: When the earliest stop is the current floor the queue is empty

        // Arrange
        let mut elevator = setup_elevator(-3, 5);
        elevator.board(passenger(1, 0, 0));
        elevator.board(passenger(2, 0, 4));

        // Act, Assert
        assert_eq!(elevator.stop_queue(), Some(vec![]));
    }

    #[test]
    fn test_elevator_people_leaving() {
        // Arrange
        let mut elevator = setup_elevator(-1, 4);
        elevator.board(passenger(1, 0, 1));
        elevator.board(passenger(2, 0, 2));
        elevator.board(passenger(3, 0, 1));
        elevator.close_door();
        elevator.up_one().unwrap();

        // Act
        let leaving: Vec<u32> = elevator.people_leaving().iter().map(|p| p.id().0).collect();

        // Assert
        assert_eq!(leaving, vec![1, 3]);
    }

    #[test]
    fn test_elevator_unload_leaving() {
        // Purpose: Unloading removes exactly the leaving passengers and frees an emptied car

        // Arrange
        let mut elevator = setup_elevator(-1, 4);
        elevator.board(passenger(1, 0, 1));
        elevator.board(passenger(2, 0, 2));
        elevator.step().unwrap();

        // Act
        let first = elevator.unload_leaving();

        // Assert
        assert!(elevator.door().is_open());
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].id(), PassengerId(1));
        assert_eq!(elevator.passengers().len(), 1);
        assert!(!elevator.is_free());

        // Act
        elevator.step().unwrap();
        let second = elevator.unload_leaving();

        // Assert
        assert_eq!(elevator.current_floor(), 2);
        assert_eq!(second.len(), 1);
        assert!(elevator.passengers().is_empty());
        assert!(elevator.is_free());
    }

    #[test]
    fn test_elevator_unload_nobody_keeps_door_closed() {
        // Arrange
        let mut elevator = setup_elevator(-1, 4);

        // Act
        let alighted = elevator.unload_leaving();

        // Assert
        assert!(alighted.is_empty());
        assert!(!elevator.door().is_open());
    }

    #[test]
    fn test_elevator_step_moves_towards_destination() {
        // Arrange
        let mut elevator = setup_elevator(-1, 4);
        elevator.move_to(2).unwrap();
        elevator.open_door();

        // Act
        elevator.step().unwrap();

        // Assert
        assert!(!elevator.door().is_open());
        assert_eq!(elevator.current_floor(), 1);
        assert_eq!(elevator.direction(), Up);

        // Act
        elevator.step().unwrap();
        elevator.step().unwrap();

        // Assert
        assert_eq!(elevator.current_floor(), 2);
        assert!(elevator.is_free());
    }

    #[test]
    fn test_elevator_step_follows_last_stop() {
        // Purpose: The destination becomes the last stop of the queue, not the nearest one

        // Arrange
        let mut elevator = setup_elevator(-1, 6);
        elevator.board(passenger(1, 0, 2));
        elevator.board(passenger(2, 0, 5));
        elevator.board(passenger(3, 0, 3));

        // Act
        elevator.step().unwrap();

        // Assert
        assert_eq!(elevator.destination_floor(), Some(3));
        assert_eq!(elevator.current_floor(), 1);
    }

    #[test]
    fn test_elevator_step_idle() {
        // Arrange
        let mut elevator = setup_elevator(-1, 4);

        // Act
        elevator.step().unwrap();

        // Assert
        assert_eq!(elevator.current_floor(), 0);
        assert!(elevator.is_free());
        assert_eq!(elevator.direction(), Nowhere);
    }

    #[test]
    fn test_elevator_display() {
        let elevator = setup_elevator(0, 1);
        assert_eq!(elevator.to_string(), "Elevator nr.1");
    }
}
