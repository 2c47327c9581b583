use crate::ship::ShipClass;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;

/// The fixed fleet: one ship of each class, identified in placement files
/// by its one-letter code.
pub const SHIPS: [ShipClass; NUM_SHIPS] = [
    ShipClass::new('A', "Carrier", 5),
    ShipClass::new('B', "Battleship", 4),
    ShipClass::new('D', "Destroyer", 3),
    ShipClass::new('P', "Patrol", 2),
    ShipClass::new('S', "Submarine", 3),
];

pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 2 + 3;

/// Look up a fleet class by its code letter.
pub fn class_for_code(code: char) -> Option<ShipClass> {
    SHIPS.iter().copied().find(|c| c.code() == code)
}
