// Formats and reports the outcome of a completed spin

use log::debug;
use rand::Rng;

use crate::errors::LunchwheelError;
use crate::history::{HistoryEntry, HistoryStore};
use crate::storage::KeyValueStore;
use crate::wheel::WheelOption;

/// Congratulatory messages shown with a pick, chosen uniformly at random.
const FLAVOR_MESSAGES: [&str; 7] = [
    "Time to fuel your body with something nutritious! 🍎",
    "Great choice! Enjoy your healthy meal. 🌱",
    "A healthy lunch keeps the energy flowing! 💪",
    "Your body will thank you for this meal. 🥗",
    "Eating healthy today sets you up for success! 🏆",
    "Tasty and healthy? You've got it! 🍽️",
    "Healthy food, happy mood! 😊",
];

/// Payload handed to the notification collaborator.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub link: Option<String>,
}

/// Dialog/toast collaborator. Fire and forget: the presenter never waits on
/// or inspects the outcome of a shown notification.
pub trait NotificationSink {
    fn show(&mut self, notification: &Notification);
}

/// Source of the locale date string recorded with each pick, injectable so
/// tests can pin the date.
pub trait DateStamp {
    fn today(&self) -> String;
}

/// Wall-clock dates in the local timezone.
pub struct LocalDateStamp;

impl DateStamp for LocalDateStamp {
    fn today(&self) -> String {
        chrono::Local::now().format("%x").to_string()
    }
}

pub struct ResultPresenter<N: NotificationSink, D: DateStamp> {
    sink: N,
    dates: D,
}

impl<N: NotificationSink, D: DateStamp> ResultPresenter<N, D> {
    pub fn new(sink: N, dates: D) -> Self {
        Self { sink, dates }
    }

    /// Records the winning option in the history and emits the result
    /// notification. The history append is completed before the
    /// notification goes out.
    pub fn present<S: KeyValueStore>(
        &mut self,
        winner: &WheelOption,
        history: &mut HistoryStore<S>,
        rng: &mut impl Rng,
    ) -> Result<(), LunchwheelError> {
        let message = FLAVOR_MESSAGES[rng.random_range(0..FLAVOR_MESSAGES.len())];
        debug!("presenting pick '{}'", winner.name);

        history.append(HistoryEntry {
            name: winner.name.clone(),
            timestamp: self.dates.today(),
        })?;

        self.sink.show(&Notification {
            title: format!("Selected Option: {}", winner.name),
            body: message.to_string(),
            link: Some(winner.link.clone()),
        });
        Ok(())
    }

    /// Confirmation toast after the history was wiped.
    pub fn confirm_cleared(&mut self) {
        self.sink.show(&Notification {
            title: "History Cleared!".to_string(),
            body: String::new(),
            link: None,
        });
    }
}
