//! The event simulator: argument validation, backend ownership and
//! serialization of native calls.

use crate::backend::Backend;
use crate::error::{Error, Result};
use crate::event::{Button, Coordinate, WheelEvent};
use crate::keycode::Key;
use crate::platform::NativeBackend;
use parking_lot::{Mutex, MutexGuard};
use std::sync::OnceLock;

/// Simulates keyboard and mouse input through a single backend.
///
/// All native calls go through one lock. Concurrent callers queue on it and
/// the lock is handed over fairly, so calls run one at a time in the order
/// they arrived. Results from the backend are returned unchanged.
///
/// # Example
///
/// ```no_run
/// use uiosim::{Button, EventSimulator, Key};
///
/// let simulator = EventSimulator::new()?;
/// simulator.simulate_mouse_movement(200, 150)?;
/// simulator.simulate_mouse_press(Button::Left)?;
/// simulator.simulate_mouse_release(Button::Left)?;
/// simulator.simulate_key_press(Key::KeyA)?;
/// simulator.simulate_key_release(Key::KeyA)?;
/// # Ok::<(), uiosim::Error>(())
/// ```
pub struct EventSimulator<B: Backend = NativeBackend> {
    backend: Mutex<Option<B>>,
}

impl EventSimulator<NativeBackend> {
    /// Create a simulator backed by the native backend for this OS.
    pub fn new() -> Result<Self> {
        let backend = NativeBackend::new()?;
        log::debug!("created {} simulation backend", backend.name());
        Ok(Self::with_backend(backend))
    }
}

impl<B: Backend> EventSimulator<B> {
    /// Create a simulator around an existing backend.
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend: Mutex::new(Some(backend)),
        }
    }

    /// Whether a backend is still attached.
    pub fn is_initialized(&self) -> bool {
        let guard = self.backend.lock();
        let initialized = guard.is_some();
        MutexGuard::unlock_fair(guard);
        initialized
    }

    /// Detach and return the backend, releasing its native resources once the
    /// returned value is dropped.
    ///
    /// Every call made afterwards fails with [`Error::NotInitialized`].
    pub fn shutdown(&self) -> Option<B> {
        let mut guard = self.backend.lock();
        let backend = guard.take();
        MutexGuard::unlock_fair(guard);

        if let Some(backend) = &backend {
            log::debug!("shut down {} simulation backend", backend.name());
        }
        backend
    }

    /// Simulate pressing a key.
    ///
    /// Accepts a [`Key`] or its raw `u16` code.
    pub fn simulate_key_press<K>(&self, key: K) -> Result<()>
    where
        K: TryInto<Key>,
        K::Error: Into<Error>,
    {
        let key = key.try_into().map_err(Into::into)?;
        self.dispatch(|backend| {
            log::trace!("{}: press key {:?}", backend.name(), key);
            backend.press_key(key)
        })
    }

    /// Simulate releasing a key.
    ///
    /// Accepts a [`Key`] or its raw `u16` code.
    pub fn simulate_key_release<K>(&self, key: K) -> Result<()>
    where
        K: TryInto<Key>,
        K::Error: Into<Error>,
    {
        let key = key.try_into().map_err(Into::into)?;
        self.dispatch(|backend| {
            log::trace!("{}: release key {:?}", backend.name(), key);
            backend.release_key(key)
        })
    }

    /// Simulate pressing a mouse button.
    ///
    /// Accepts a [`Button`] or its 1-based `u8` number.
    pub fn simulate_mouse_press<T>(&self, button: T) -> Result<()>
    where
        T: TryInto<Button>,
        T::Error: Into<Error>,
    {
        let button = button.try_into().map_err(Into::into)?;
        self.dispatch(|backend| {
            log::trace!("{}: press button {:?}", backend.name(), button);
            backend.press_button(button)
        })
    }

    /// Simulate releasing a mouse button.
    ///
    /// Accepts a [`Button`] or its 1-based `u8` number.
    pub fn simulate_mouse_release<T>(&self, button: T) -> Result<()>
    where
        T: TryInto<Button>,
        T::Error: Into<Error>,
    {
        let button = button.try_into().map_err(Into::into)?;
        self.dispatch(|backend| {
            log::trace!("{}: release button {:?}", backend.name(), button);
            backend.release_button(button)
        })
    }

    /// Simulate moving the pointer to an absolute screen position.
    ///
    /// Coordinates are passed to the OS as given, including positions
    /// outside every screen.
    pub fn simulate_mouse_movement(&self, x: i16, y: i16) -> Result<()> {
        let to = Coordinate::new(x, y);
        self.dispatch(|backend| {
            log::trace!("{}: move to {:?}", backend.name(), to);
            backend.move_mouse(to)
        })
    }

    /// Simulate scrolling the wheel at a screen position.
    ///
    /// A positive `rotation` scrolls away from the user, a negative one
    /// toward the user; `amount` scales the distance.
    pub fn simulate_mouse_wheel(&self, x: i16, y: i16, amount: u16, rotation: i16) -> Result<()> {
        let wheel = WheelEvent::new(x, y, amount, rotation)?;
        self.dispatch(|backend| {
            log::trace!("{}: scroll {:?}", backend.name(), wheel);
            backend.scroll_wheel(wheel)
        })
    }

    fn dispatch(&self, op: impl FnOnce(&mut B) -> Result<()>) -> Result<()> {
        let mut guard = self.backend.lock();
        let result = match guard.as_mut() {
            Some(backend) => op(backend),
            None => Err(Error::NotInitialized(
                "the simulator has been shut down".into(),
            )),
        };
        MutexGuard::unlock_fair(guard);
        result
    }
}

static GLOBAL: OnceLock<Result<EventSimulator>> = OnceLock::new();

/// The process-wide simulator, created on first use.
///
/// If the native backend could not be created, every call reports the
/// creation error.
pub fn global() -> Result<&'static EventSimulator> {
    GLOBAL
        .get_or_init(EventSimulator::new)
        .as_ref()
        .map_err(Clone::clone)
}

/// Simulate pressing a key on the process-wide simulator.
pub fn simulate_key_press<K>(key: K) -> Result<()>
where
    K: TryInto<Key>,
    K::Error: Into<Error>,
{
    let key = key.try_into().map_err(Into::into)?;
    global()?.simulate_key_press(key)
}

/// Simulate releasing a key on the process-wide simulator.
pub fn simulate_key_release<K>(key: K) -> Result<()>
where
    K: TryInto<Key>,
    K::Error: Into<Error>,
{
    let key = key.try_into().map_err(Into::into)?;
    global()?.simulate_key_release(key)
}

/// Simulate pressing a mouse button on the process-wide simulator.
pub fn simulate_mouse_press<T>(button: T) -> Result<()>
where
    T: TryInto<Button>,
    T::Error: Into<Error>,
{
    let button = button.try_into().map_err(Into::into)?;
    global()?.simulate_mouse_press(button)
}

/// Simulate releasing a mouse button on the process-wide simulator.
pub fn simulate_mouse_release<T>(button: T) -> Result<()>
where
    T: TryInto<Button>,
    T::Error: Into<Error>,
{
    let button = button.try_into().map_err(Into::into)?;
    global()?.simulate_mouse_release(button)
}

/// Simulate moving the pointer on the process-wide simulator.
pub fn simulate_mouse_movement(x: i16, y: i16) -> Result<()> {
    global()?.simulate_mouse_movement(x, y)
}

/// Simulate scrolling the wheel on the process-wide simulator.
pub fn simulate_mouse_wheel(x: i16, y: i16, amount: u16, rotation: i16) -> Result<()> {
    WheelEvent::new(x, y, amount, rotation)?;
    global()?.simulate_mouse_wheel(x, y, amount, rotation)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts everything except keys it pretends have no native mapping.
    struct NullBackend {
        presses: usize,
    }

    impl Backend for NullBackend {
        fn name(&self) -> &'static str {
            "null"
        }

        fn press_key(&mut self, key: Key) -> Result<()> {
            if key == Key::F24 {
                return Err(Error::UnsupportedOnPlatform("F24".into()));
            }
            self.presses += 1;
            Ok(())
        }

        fn release_key(&mut self, _key: Key) -> Result<()> {
            Ok(())
        }

        fn press_button(&mut self, _button: Button) -> Result<()> {
            self.presses += 1;
            Ok(())
        }

        fn release_button(&mut self, _button: Button) -> Result<()> {
            Ok(())
        }

        fn move_mouse(&mut self, _to: Coordinate) -> Result<()> {
            Ok(())
        }

        fn scroll_wheel(&mut self, _wheel: WheelEvent) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_backend_errors_pass_through() {
        let simulator = EventSimulator::with_backend(NullBackend { presses: 0 });
        assert_eq!(
            simulator.simulate_key_press(Key::F24),
            Err(Error::UnsupportedOnPlatform("F24".into()))
        );
        assert!(simulator.simulate_key_press(Key::KeyA).is_ok());
    }

    #[test]
    fn test_raw_codes_are_accepted() {
        let simulator = EventSimulator::with_backend(NullBackend { presses: 0 });
        assert!(simulator.simulate_key_press(Key::Enter.code()).is_ok());
        assert!(simulator.simulate_mouse_press(1u8).is_ok());

        let backend = simulator.shutdown().unwrap();
        assert_eq!(backend.presses, 2);
    }

    #[test]
    fn test_shutdown_reports_not_initialized() {
        let simulator = EventSimulator::with_backend(NullBackend { presses: 0 });
        assert!(simulator.is_initialized());

        assert!(simulator.shutdown().is_some());
        assert!(!simulator.is_initialized());
        assert!(simulator.shutdown().is_none());

        assert!(matches!(
            simulator.simulate_mouse_movement(1, 1),
            Err(Error::NotInitialized(_))
        ));
        assert!(matches!(
            simulator.simulate_key_release(Key::KeyA),
            Err(Error::NotInitialized(_))
        ));
    }

    #[test]
    fn test_invalid_argument_wins_over_shutdown() {
        let simulator = EventSimulator::with_backend(NullBackend { presses: 0 });
        simulator.shutdown();

        assert!(matches!(
            simulator.simulate_mouse_press(9u8),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            simulator.simulate_mouse_wheel(0, 0, 0, 1),
            Err(Error::InvalidArgument(_))
        ));
    }
}
