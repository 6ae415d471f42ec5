// Library interface for lunchwheel
// This allows integration tests to access internal modules

pub mod errors;
pub mod history;
pub mod presenter;
pub mod provider;
pub mod settings;
pub mod storage;
pub mod wheel;

// Re-export commonly used types
pub use errors::LunchwheelError;
pub use history::{HistoryEntry, HistoryStore};
pub use presenter::{Notification, NotificationSink, ResultPresenter};
pub use provider::{Restaurant, RestaurantProvider, SearchQuery};
pub use settings::Settings;
pub use storage::{FileBasedStore, InMemoryStore, KeyValueStore};
pub use wheel::{SpinController, SpinOutcome, WheelModel, WheelOption};
