// Integration tests for the full spin flow
//
// This suite drives the engine the way the popup does:
// 1. Prepare candidates and load them onto the wheel
// 2. Run the spin state machine to completion, tick by tick
// 3. Present the result
// 4. Verify the history and the emitted notification agree on the winner

use rand::{SeedableRng, rngs::StdRng};

use lunchwheel::presenter::{DateStamp, Notification, NotificationSink, ResultPresenter};
use lunchwheel::storage::InMemoryStore;
use lunchwheel::wheel::{NullRenderSurface, SpinOutcome};
use lunchwheel::{HistoryStore, SpinController, WheelModel, WheelOption};

// longest possible spin is 5999ms of 30ms ticks
const MAX_TICKS: usize = 201;

struct FixedDate;

impl DateStamp for FixedDate {
    fn today(&self) -> String {
        "1/2/2026".to_string()
    }
}

#[derive(Default)]
struct CollectingSink {
    shown: Vec<Notification>,
}

impl NotificationSink for CollectingSink {
    fn show(&mut self, notification: &Notification) {
        self.shown.push(notification.clone());
    }
}

fn eight_options() -> Vec<WheelOption> {
    [
        "Thai Palace",
        "Burrito Bar",
        "Green Bowl",
        "Pho Corner",
        "Falafel House",
        "Sushi Go",
        "Pasta Lane",
        "Taco Truck",
    ]
    .iter()
    .map(|name| WheelOption::new(*name, format!("https://foursquare.com/v/{name}")))
    .collect()
}

/// Runs one complete spin and returns the winning index.
fn run_spin(
    controller: &mut SpinController<NullRenderSurface>,
    rng: &mut StdRng,
) -> usize {
    controller.spin(rng).expect("spin should start from idle");
    for _ in 0..MAX_TICKS {
        if let SpinOutcome::Finished(index) = controller.tick() {
            return index;
        }
    }
    panic!("spin did not terminate within {MAX_TICKS} ticks");
}

#[test]
fn test_spin_records_winner_in_history() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut controller =
        SpinController::new(WheelModel::new(eight_options()).unwrap(), NullRenderSurface);
    let mut history = HistoryStore::new(InMemoryStore::new());
    let mut presenter = ResultPresenter::new(CollectingSink::default(), FixedDate);

    let index = run_spin(&mut controller, &mut rng);
    let winner = controller.model().options()[index].clone();
    presenter
        .present(&winner, &mut history, &mut rng)
        .expect("presenting should succeed");

    let entries = history.list().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, winner.name);
    assert_eq!(entries[0].timestamp, "1/2/2026");
}

#[test]
fn test_one_presentation_per_completed_spin() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut controller =
        SpinController::new(WheelModel::new(eight_options()).unwrap(), NullRenderSurface);
    let mut history = HistoryStore::new(InMemoryStore::new());
    let mut presenter = ResultPresenter::new(CollectingSink::default(), FixedDate);

    for spin_no in 1..=5 {
        let index = run_spin(&mut controller, &mut rng);
        let winner = controller.model().options()[index].clone();
        presenter.present(&winner, &mut history, &mut rng).unwrap();

        let entries = history.list().unwrap();
        assert_eq!(entries.len(), spin_no);
        assert_eq!(entries[0].name, winner.name);
    }

    let entries = history.list().unwrap();
    assert_eq!(entries.len(), 5);
    // every recorded pick names a real wheel segment
    let names: Vec<String> = eight_options().iter().map(|o| o.name.clone()).collect();
    assert!(entries.iter().all(|e| names.contains(&e.name)));
}

#[test]
fn test_spin_over_file_backed_history() {
    use lunchwheel::FileBasedStore;

    let dir = tempfile::tempdir().unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    let mut controller =
        SpinController::new(WheelModel::new(eight_options()).unwrap(), NullRenderSurface);
    let store = FileBasedStore::new(dir.path().to_path_buf()).unwrap();
    let mut history = HistoryStore::new(store);
    let mut presenter = ResultPresenter::new(CollectingSink::default(), FixedDate);

    let index = run_spin(&mut controller, &mut rng);
    let winner = controller.model().options()[index].clone();
    presenter.present(&winner, &mut history, &mut rng).unwrap();

    // a fresh store over the same directory sees the persisted pick
    let reopened = HistoryStore::new(FileBasedStore::new(dir.path().to_path_buf()).unwrap());
    let entries = reopened.list().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, winner.name);
}
