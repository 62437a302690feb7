//! Descriptor types for simulated mouse input.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest scroll distance (`|rotation * amount|`) a single wheel event may
/// request.
pub const MAX_SCROLL_DISTANCE: u32 = i16::MAX as u32;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Button {
    /// Left mouse button (Button 1).
    Left,
    /// Right mouse button (Button 2).
    Right,
    /// Middle mouse button (Button 3).
    Middle,
    /// Extra button 1 (typically back).
    Button4,
    /// Extra button 2 (typically forward).
    Button5,
}

impl Button {
    /// Get the button number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            Button::Left => 1,
            Button::Right => 2,
            Button::Middle => 3,
            Button::Button4 => 4,
            Button::Button5 => 5,
        }
    }

    /// Create a Button from a number (1-indexed).
    pub fn from_number(n: u8) -> Result<Self> {
        match n {
            1 => Ok(Button::Left),
            2 => Ok(Button::Right),
            3 => Ok(Button::Middle),
            4 => Ok(Button::Button4),
            5 => Ok(Button::Button5),
            _ => Err(Error::InvalidArgument(format!(
                "mouse button {n} is outside 1..=5"
            ))),
        }
    }
}

impl TryFrom<u8> for Button {
    type Error = Error;

    fn try_from(n: u8) -> Result<Self> {
        Button::from_number(n)
    }
}

/// Absolute screen position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    pub x: i16,
    pub y: i16,
}

impl Coordinate {
    pub fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

impl From<(i16, i16)> for Coordinate {
    fn from((x, y): (i16, i16)) -> Self {
        Self { x, y }
    }
}

/// Vertical scroll direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScrollDirection {
    /// Scrolling up (away from user).
    Up,
    /// Scrolling down (toward user).
    Down,
}

/// A wheel rotation at a screen position.
///
/// `rotation` carries the direction (positive is away from the user) and
/// `amount` scales it. The native scroll distance is `rotation * amount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "(i16, i16, u16, i16)", into = "(i16, i16, u16, i16)")
)]
pub struct WheelEvent {
    position: Coordinate,
    amount: u16,
    rotation: i16,
}

impl WheelEvent {
    /// Build a wheel event, rejecting requests that would scroll nowhere or
    /// further than [`MAX_SCROLL_DISTANCE`].
    pub fn new(x: i16, y: i16, amount: u16, rotation: i16) -> Result<Self> {
        if amount == 0 {
            return Err(Error::InvalidArgument("wheel amount must be non-zero".into()));
        }
        if rotation == 0 {
            return Err(Error::InvalidArgument(
                "wheel rotation must be non-zero".into(),
            ));
        }

        let distance = u32::from(rotation.unsigned_abs()) * u32::from(amount);
        if distance > MAX_SCROLL_DISTANCE {
            return Err(Error::InvalidArgument(format!(
                "wheel distance {distance} exceeds {MAX_SCROLL_DISTANCE}"
            )));
        }

        Ok(Self {
            position: Coordinate::new(x, y),
            amount,
            rotation,
        })
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn amount(&self) -> u16 {
        self.amount
    }

    pub fn rotation(&self) -> i16 {
        self.rotation
    }

    pub fn direction(&self) -> ScrollDirection {
        if self.rotation > 0 {
            ScrollDirection::Up
        } else {
            ScrollDirection::Down
        }
    }

    /// Signed scroll distance in wheel steps; positive is away from the user.
    ///
    /// Always fits in an `i16` thanks to the bound checked in [`WheelEvent::new`].
    pub fn distance(&self) -> i32 {
        i32::from(self.rotation) * i32::from(self.amount)
    }
}

impl TryFrom<(i16, i16, u16, i16)> for WheelEvent {
    type Error = Error;

    fn try_from((x, y, amount, rotation): (i16, i16, u16, i16)) -> Result<Self> {
        WheelEvent::new(x, y, amount, rotation)
    }
}

impl From<WheelEvent> for (i16, i16, u16, i16) {
    fn from(wheel: WheelEvent) -> Self {
        (wheel.position.x, wheel.position.y, wheel.amount, wheel.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_numbers() {
        for n in 1..=5 {
            assert_eq!(Button::from_number(n).map(|b| b.number()), Ok(n));
        }
        assert_eq!(Button::try_from(3u8), Ok(Button::Middle));
    }

    #[test]
    fn test_button_out_of_range() {
        assert!(matches!(Button::from_number(0), Err(Error::InvalidArgument(_))));
        assert!(matches!(Button::try_from(6u8), Err(Error::InvalidArgument(_))));
        assert!(matches!(Button::try_from(255u8), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_wheel_direction_and_magnitude() {
        let up = WheelEvent::new(10, 20, 3, 2).unwrap();
        let down = WheelEvent::new(10, 20, 3, -2).unwrap();

        assert_eq!(up.direction(), ScrollDirection::Up);
        assert_eq!(down.direction(), ScrollDirection::Down);
        assert_eq!(up.distance(), 6);
        assert_eq!(down.distance(), -6);
        assert_eq!(up.amount(), down.amount());
        assert_eq!(up.position(), Coordinate::new(10, 20));
    }

    #[test]
    fn test_wheel_rejects_degenerate_values() {
        assert!(matches!(WheelEvent::new(0, 0, 0, 1), Err(Error::InvalidArgument(_))));
        assert!(matches!(WheelEvent::new(0, 0, 1, 0), Err(Error::InvalidArgument(_))));
        assert!(matches!(
            WheelEvent::new(0, 0, u16::MAX, i16::MIN),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_wheel_distance_bound() {
        assert!(WheelEvent::new(0, 0, 1, i16::MAX).is_ok());
        assert!(WheelEvent::new(0, 0, 1, -i16::MAX).is_ok());
        // |i16::MIN| is one past the bound.
        assert!(WheelEvent::new(0, 0, 1, i16::MIN).is_err());
    }

    #[test]
    fn test_negative_coordinates_are_accepted() {
        let wheel = WheelEvent::new(-1920, -5, 1, 1).unwrap();
        assert_eq!(wheel.position(), Coordinate::from((-1920, -5)));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_wheel_json_is_validated() {
        let wheel = WheelEvent::new(5, 6, 2, -1).unwrap();
        let json = serde_json::to_string(&wheel).unwrap();
        assert_eq!(json, "[5,6,2,-1]");
        assert_eq!(serde_json::from_str::<WheelEvent>(&json).unwrap(), wheel);

        assert!(serde_json::from_str::<WheelEvent>("[5,6,0,-1]").is_err());
    }

    #[test]
    fn test_button_json() {
        let json = serde_json::to_string(&Button::Button4).unwrap();
        assert_eq!(serde_json::from_str::<Button>(&json).unwrap(), Button::Button4);
    }
}
