//! Abstract Factory: a maze builder asks a factory for its parts, so swapping
//! the factory swaps the whole family of walls, rooms and doors.
//!
//! Run with: cargo run --bin factory_maze

use pattern_demos::{console, telemetry};
use thiserror::Error;
use tracing::debug;

type RoomNumber = u32;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
enum MazeError {
    #[error("room {0} does not exist")]
    NoSuchRoom(RoomNumber),

    #[error("door #{0} does not exist")]
    NoSuchDoor(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct DoorId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Wall {
    bombed: bool,
}

/// Anything a room side can be. Rooms and doors are referenced by key into
/// the owning [`Maze`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MapSite {
    Room(RoomNumber),
    Wall(Wall),
    Door(DoorId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Room {
    number: RoomNumber,
    sides: [MapSite; 4],
    has_bomb: bool,
}

impl Room {
    fn new(number: RoomNumber) -> Self {
        Self {
            number,
            sides: [MapSite::Wall(Wall::default()); 4],
            has_bomb: false,
        }
    }

    fn side(&self, direction: Direction) -> MapSite {
        self.sides[direction.index()]
    }

    fn set_side(&mut self, direction: Direction, site: MapSite) {
        self.sides[direction.index()] = site;
    }

    fn enter(&self) -> String {
        if self.has_bomb {
            format!("Entered in room {}. Careful, there is a bomb in here!", self.number)
        } else {
            format!("Entered in room {}", self.number)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Door {
    from: RoomNumber,
    to: RoomNumber,
}

impl Door {
    fn new(from: RoomNumber, to: RoomNumber) -> Self {
        Self { from, to }
    }

    /// Returns `None` when `room` is not on either side of this door.
    fn other_side_from(&self, room: RoomNumber) -> Option<RoomNumber> {
        if room == self.from {
            Some(self.to)
        } else if room == self.to {
            Some(self.from)
        } else {
            None
        }
    }

    fn enter(&self) -> String {
        format!("Entering a door from {} to {}", self.from, self.to)
    }
}

impl Wall {
    fn enter(&self) -> String {
        if self.bombed {
            "Boom! This wall was bombed".to_string()
        } else {
            "Oh No!! Hit a wall".to_string()
        }
    }
}

#[derive(Debug, Default)]
struct Maze {
    rooms: Vec<Room>,
    doors: Vec<Door>,
}

impl Maze {
    fn add_room(&mut self, room: Room) {
        self.rooms.push(room);
    }

    fn add_door(&mut self, door: Door) -> DoorId {
        self.doors.push(door);
        DoorId(self.doors.len() - 1)
    }

    fn room(&self, number: RoomNumber) -> Option<&Room> {
        self.rooms.iter().find(|room| room.number == number)
    }

    fn room_mut(&mut self, number: RoomNumber) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|room| room.number == number)
    }

    fn door(&self, id: DoorId) -> Option<&Door> {
        self.doors.get(id.0)
    }

    fn enter(&self, site: MapSite) -> Result<String, MazeError> {
        match site {
            MapSite::Room(number) => self
                .room(number)
                .map(Room::enter)
                .ok_or(MazeError::NoSuchRoom(number)),
            MapSite::Wall(wall) => Ok(wall.enter()),
            MapSite::Door(id) => self
                .door(id)
                .map(Door::enter)
                .ok_or(MazeError::NoSuchDoor(id.0)),
        }
    }

    fn enter_room(&self, number: RoomNumber) -> Result<String, MazeError> {
        self.enter(MapSite::Room(number))
    }

    fn enter_side(&self, number: RoomNumber, direction: Direction) -> Result<String, MazeError> {
        let room = self.room(number).ok_or(MazeError::NoSuchRoom(number))?;
        debug!(room = number, ?direction, "entering side");
        self.enter(room.side(direction))
    }

    /// Room reached by walking through `direction`, if that side is a door.
    fn neighbor(&self, number: RoomNumber, direction: Direction) -> Result<Option<RoomNumber>, MazeError> {
        let room = self.room(number).ok_or(MazeError::NoSuchRoom(number))?;
        match room.side(direction) {
            MapSite::Door(id) => {
                let door = self.door(id).ok_or(MazeError::NoSuchDoor(id.0))?;
                Ok(door.other_side_from(number))
            }
            MapSite::Room(other) => Ok(Some(other)),
            MapSite::Wall(_) => Ok(None),
        }
    }
}

// =============================================================================
// Factories
// =============================================================================

trait MazeFactory {
    fn make_maze(&self) -> Maze {
        Maze::default()
    }

    fn make_wall(&self) -> Wall {
        Wall::default()
    }

    fn make_room(&self, number: RoomNumber) -> Room {
        Room::new(number)
    }

    fn make_door(&self, from: RoomNumber, to: RoomNumber) -> Door {
        Door::new(from, to)
    }
}

struct StandardMazeFactory;

impl MazeFactory for StandardMazeFactory {}

struct BombedMazeFactory;

impl MazeFactory for BombedMazeFactory {
    fn make_wall(&self) -> Wall {
        Wall { bombed: true }
    }

    fn make_room(&self, number: RoomNumber) -> Room {
        Room {
            has_bomb: true,
            ..Room::new(number)
        }
    }
}

struct MazeGame;

impl MazeGame {
    /// Two rooms joined by a door on room 1's east side.
    fn create_maze(&self, factory: &dyn MazeFactory) -> Maze {
        let mut maze = factory.make_maze();
        let mut r1 = factory.make_room(1);
        let mut r2 = factory.make_room(2);
        let door = maze.add_door(factory.make_door(r1.number, r2.number));

        r1.set_side(Direction::North, MapSite::Wall(factory.make_wall()));
        r1.set_side(Direction::East, MapSite::Door(door));
        r1.set_side(Direction::South, MapSite::Wall(factory.make_wall()));
        r1.set_side(Direction::West, MapSite::Wall(factory.make_wall()));

        r2.set_side(Direction::North, MapSite::Wall(factory.make_wall()));
        r2.set_side(Direction::East, MapSite::Wall(factory.make_wall()));
        r2.set_side(Direction::South, MapSite::Wall(factory.make_wall()));
        r2.set_side(Direction::West, MapSite::Door(door));

        maze.add_room(r1);
        maze.add_room(r2);
        maze
    }
}

fn explore(maze: &Maze) -> Result<Vec<String>, MazeError> {
    let mut lines = vec![
        maze.enter_room(1)?,
        maze.enter_side(1, Direction::East)?,
        maze.enter_side(2, Direction::East)?,
    ];
    if let Some(next) = maze.neighbor(1, Direction::East)? {
        lines.push(format!("The east door of room 1 leads to room {next}"));
    }
    Ok(lines)
}

fn main() -> Result<(), MazeError> {
    telemetry::init_logging();
    let game = MazeGame;

    console::section("Standard maze");
    let maze = game.create_maze(&StandardMazeFactory);
    console::print_lines(explore(&maze)?);

    console::next_section("Bombed maze");
    let mut bombed = game.create_maze(&BombedMazeFactory);
    console::print_lines(explore(&bombed)?);

    console::next_section("Missing room");
    if let Err(err) = bombed.enter_side(3, Direction::North) {
        console::report_error(&err);
    }

    // Rooms stay editable after construction.
    if let Some(room) = bombed.room_mut(2) {
        room.has_bomb = false;
    }
    println!("{}", bombed.enter_room(2)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_maze_layout() {
        let maze = MazeGame.create_maze(&StandardMazeFactory);
        assert_eq!(maze.enter_room(1).unwrap(), "Entered in room 1");
        assert_eq!(
            maze.enter_side(1, Direction::East).unwrap(),
            "Entering a door from 1 to 2"
        );
        assert_eq!(maze.enter_side(2, Direction::East).unwrap(), "Oh No!! Hit a wall");
        assert_eq!(
            maze.enter_side(2, Direction::West).unwrap(),
            "Entering a door from 1 to 2"
        );
    }

    #[test]
    fn test_door_joins_both_rooms() {
        let maze = MazeGame.create_maze(&StandardMazeFactory);
        assert_eq!(maze.neighbor(1, Direction::East).unwrap(), Some(2));
        assert_eq!(maze.neighbor(2, Direction::West).unwrap(), Some(1));
        assert_eq!(maze.neighbor(1, Direction::North).unwrap(), None);

        let r1 = maze.room(1).unwrap();
        let r2 = maze.room(2).unwrap();
        assert_eq!(r1.side(Direction::East), r2.side(Direction::West));
    }

    #[test]
    fn test_other_side_from_is_symmetric() {
        let door = Door::new(4, 9);
        assert_eq!(door.other_side_from(4), Some(9));
        assert_eq!(door.other_side_from(9), Some(4));
        assert_eq!(door.other_side_from(5), None);
    }

    #[test]
    fn test_bombed_factory_changes_the_family() {
        let maze = MazeGame.create_maze(&BombedMazeFactory);
        assert_eq!(
            maze.enter_side(2, Direction::East).unwrap(),
            "Boom! This wall was bombed"
        );
        assert!(maze.enter_room(1).unwrap().contains("bomb"));
        assert_eq!(
            maze.enter_side(1, Direction::East).unwrap(),
            "Entering a door from 1 to 2"
        );
    }

    #[test]
    fn test_missing_room_is_an_error() {
        let maze = MazeGame.create_maze(&StandardMazeFactory);
        assert_eq!(maze.enter_room(7), Err(MazeError::NoSuchRoom(7)));
        assert_eq!(
            maze.enter_side(3, Direction::South),
            Err(MazeError::NoSuchRoom(3))
        );
        assert_eq!(maze.enter(MapSite::Door(DoorId(5))), Err(MazeError::NoSuchDoor(5)));
    }

    #[test]
    fn test_new_room_is_walled_in() {
        let room = Room::new(3);
        for direction in [Direction::North, Direction::South, Direction::East, Direction::West] {
            assert_eq!(room.side(direction), MapSite::Wall(Wall::default()));
        }
    }
}
