//! Infrastructure layer: persistence client, notifications, session gate,
//! configuration, and the controller that wires them to the view model.

pub mod clock;
pub mod config;
pub mod controller;
pub mod demo;
pub mod notify;
pub mod session;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{AppConfig, ConfigError};
pub use controller::{ControllerError, EditSession, FormState, InventoryController};
pub use notify::{Notification, Notifier, NotifyLevel, RecordingNotifier, TracingNotifier};
pub use session::Session;
pub use store::{InMemoryInventoryStore, InventoryStore, StoreError};
