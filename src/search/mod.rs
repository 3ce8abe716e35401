pub mod coords;

pub use coords::parse_coordinates;
