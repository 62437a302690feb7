//! Simulator behavior checked against a recording backend.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Barrier, Mutex};
use std::thread;
use std::time::Duration;

use uiosim::{
    Backend, Button, Coordinate, Error, EventSimulator, Key, Result, ResultCode, WheelEvent,
};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    PressKey(Key),
    ReleaseKey(Key),
    PressButton(Button),
    ReleaseButton(Button),
    Move(Coordinate),
    Scroll(WheelEvent),
}

/// Shared view of what the backend saw.
#[derive(Default)]
struct Record {
    calls: Mutex<Vec<Call>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

/// Records every call, optionally failing some of them.
struct RecordingBackend {
    record: Arc<Record>,
    unsupported: Vec<Key>,
    failure: Option<Error>,
    delay: Duration,
    /// Blocks the first call until a message arrives.
    gate: Option<Receiver<()>>,
}

impl RecordingBackend {
    fn new(record: Arc<Record>) -> Self {
        Self {
            record,
            unsupported: Vec::new(),
            failure: None,
            delay: Duration::ZERO,
            gate: None,
        }
    }

    fn call(&mut self, call: Call) -> Result<()> {
        let now = self.record.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.record.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(gate) = self.gate.take() {
            let _ = gate.recv();
        }
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        let result = match (&call, &self.failure) {
            (Call::PressKey(k) | Call::ReleaseKey(k), _) if self.unsupported.contains(k) => {
                Err(Error::UnsupportedOnPlatform(format!("{k:?}")))
            }
            (_, Some(err)) => Err(err.clone()),
            _ => Ok(()),
        };

        self.record.calls.lock().unwrap().push(call);
        self.record.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}

impl Backend for RecordingBackend {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn press_key(&mut self, key: Key) -> Result<()> {
        self.call(Call::PressKey(key))
    }

    fn release_key(&mut self, key: Key) -> Result<()> {
        self.call(Call::ReleaseKey(key))
    }

    fn press_button(&mut self, button: Button) -> Result<()> {
        self.call(Call::PressButton(button))
    }

    fn release_button(&mut self, button: Button) -> Result<()> {
        self.call(Call::ReleaseButton(button))
    }

    fn move_mouse(&mut self, to: Coordinate) -> Result<()> {
        self.call(Call::Move(to))
    }

    fn scroll_wheel(&mut self, wheel: WheelEvent) -> Result<()> {
        self.call(Call::Scroll(wheel))
    }
}

fn calls(record: &Record) -> Vec<Call> {
    record.calls.lock().unwrap().clone()
}

#[test]
fn test_each_operation_reaches_backend() {
    let record = Arc::new(Record::default());
    let simulator = EventSimulator::with_backend(RecordingBackend::new(record.clone()));

    simulator.simulate_key_press(Key::KeyA).unwrap();
    simulator.simulate_key_release(Key::KeyA).unwrap();
    simulator.simulate_mouse_press(Button::Right).unwrap();
    simulator.simulate_mouse_release(Button::Right).unwrap();
    simulator.simulate_mouse_movement(-20, 1080).unwrap();
    simulator.simulate_mouse_wheel(5, 6, 3, -1).unwrap();

    assert_eq!(
        calls(&record),
        vec![
            Call::PressKey(Key::KeyA),
            Call::ReleaseKey(Key::KeyA),
            Call::PressButton(Button::Right),
            Call::ReleaseButton(Button::Right),
            Call::Move(Coordinate::new(-20, 1080)),
            Call::Scroll(WheelEvent::new(5, 6, 3, -1).unwrap()),
        ]
    );
}

#[test]
fn test_malformed_input_never_reaches_backend() {
    let record = Arc::new(Record::default());
    let simulator = EventSimulator::with_backend(RecordingBackend::new(record.clone()));

    let results = [
        simulator.simulate_mouse_press(0u8),
        simulator.simulate_mouse_release(6u8),
        simulator.simulate_key_press(0xFFFFu16),
        simulator.simulate_key_release(0u16),
        simulator.simulate_mouse_wheel(0, 0, 0, 1),
        simulator.simulate_mouse_wheel(0, 0, 1, 0),
        simulator.simulate_mouse_wheel(0, 0, u16::MAX, i16::MAX),
    ];

    for result in &results {
        assert_eq!(ResultCode::from(result), ResultCode::InvalidArgument);
    }
    assert!(calls(&record).is_empty());
}

#[test]
fn test_unsupported_key_is_reported_for_press_and_release() {
    let record = Arc::new(Record::default());
    let mut backend = RecordingBackend::new(record.clone());
    backend.unsupported.push(Key::F24);
    let simulator = EventSimulator::with_backend(backend);

    let press = simulator.simulate_key_press(Key::F24);
    let release = simulator.simulate_key_release(Key::F24);

    assert_eq!(ResultCode::from(&press), ResultCode::UnsupportedOnPlatform);
    assert_eq!(ResultCode::from(&release), ResultCode::UnsupportedOnPlatform);
    assert!(simulator.simulate_key_press(Key::F23).is_ok());
}

#[test]
fn test_backend_errors_are_returned_unchanged() {
    let failures = [
        Error::PermissionDenied("accessibility".into()),
        Error::NativeCallFailed("SendInput".into()),
        Error::NotInitialized("display gone".into()),
    ];

    for failure in failures {
        let record = Arc::new(Record::default());
        let mut backend = RecordingBackend::new(record.clone());
        backend.failure = Some(failure.clone());
        let simulator = EventSimulator::with_backend(backend);

        assert_eq!(simulator.simulate_mouse_movement(1, 2), Err(failure.clone()));
        assert_eq!(simulator.simulate_key_release(Key::Escape), Err(failure));
        // One native attempt per call, no retries.
        assert_eq!(calls(&record).len(), 2);
    }
}

#[test]
fn test_release_without_press_is_defined() {
    let record = Arc::new(Record::default());
    let simulator = EventSimulator::with_backend(RecordingBackend::new(record.clone()));

    assert!(simulator.simulate_key_release(Key::ShiftLeft).is_ok());
    assert!(simulator.simulate_mouse_release(Button::Button5).is_ok());
    assert_eq!(calls(&record).len(), 2);
}

#[test]
fn test_concurrent_movements_are_serialized() {
    const THREADS: i16 = 16;

    let record = Arc::new(Record::default());
    let mut backend = RecordingBackend::new(record.clone());
    backend.delay = Duration::from_millis(2);
    let simulator = Arc::new(EventSimulator::with_backend(backend));
    let start = Arc::new(Barrier::new(THREADS as usize));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let simulator = simulator.clone();
            let start = start.clone();
            thread::spawn(move || {
                start.wait();
                simulator.simulate_mouse_movement(i * 10, i * 20)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }

    let calls = calls(&record);
    assert_eq!(calls.len(), THREADS as usize);
    assert_eq!(record.max_in_flight.load(Ordering::SeqCst), 1);

    let mut seen: Vec<Coordinate> = calls
        .into_iter()
        .filter_map(|call| match call {
            Call::Move(to) => Some(to),
            _ => None,
        })
        .collect();
    seen.sort_by_key(|c| c.x);
    let expected: Vec<Coordinate> = (0..THREADS).map(|i| Coordinate::new(i * 10, i * 20)).collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_queued_calls_run_in_arrival_order() {
    const QUEUED: i16 = 8;

    let record = Arc::new(Record::default());
    let (open, gate) = mpsc::channel();
    let mut backend = RecordingBackend::new(record.clone());
    backend.gate = Some(gate);
    let simulator = Arc::new(EventSimulator::with_backend(backend));

    let mut handles = Vec::new();
    let first = simulator.clone();
    handles.push(thread::spawn(move || first.simulate_mouse_movement(0, 0)));
    while record.in_flight.load(Ordering::SeqCst) == 0 {
        thread::sleep(Duration::from_millis(1));
    }

    // The first call holds the lock; the rest queue up one after another.
    for i in 1..=QUEUED {
        let simulator = simulator.clone();
        handles.push(thread::spawn(move || simulator.simulate_mouse_movement(i, i)));
        thread::sleep(Duration::from_millis(25));
        assert!(simulator_is_busy(&record));
    }
    open.send(()).unwrap();

    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }

    let order: Vec<i16> = calls(&record)
        .into_iter()
        .filter_map(|call| match call {
            Call::Move(to) => Some(to.x),
            _ => None,
        })
        .collect();
    assert_eq!(order, (0..=QUEUED).collect::<Vec<_>>());
}

fn simulator_is_busy(record: &Record) -> bool {
    record.in_flight.load(Ordering::SeqCst) == 1 && record.calls.lock().unwrap().is_empty()
}

#[test]
fn test_shutdown_then_calls_fail() {
    let record = Arc::new(Record::default());
    let simulator = EventSimulator::with_backend(RecordingBackend::new(record.clone()));

    simulator.simulate_key_press(Key::Space).unwrap();
    assert!(simulator.shutdown().is_some());

    let result = simulator.simulate_key_release(Key::Space);
    assert_eq!(ResultCode::from(&result), ResultCode::NotInitialized);
    assert_eq!(calls(&record).len(), 1);
}

#[test]
fn test_boxed_backend() {
    let record = Arc::new(Record::default());
    let backend: Box<dyn Backend> = Box::new(RecordingBackend::new(record.clone()));
    let simulator = EventSimulator::with_backend(backend);

    simulator.simulate_mouse_press(Button::Middle).unwrap();
    assert_eq!(calls(&record), vec![Call::PressButton(Button::Middle)]);
}
