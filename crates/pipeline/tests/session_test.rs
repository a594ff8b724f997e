//! End-to-end scripted sessions through the controller.
//!
//! Each test drives a full session with a canned console script and a stub
//! restaurant source, then asserts on the transcript and the map calls.

use async_trait::async_trait;
use dataset::{PriceTier, Restaurant, RestaurantSource};
use pipeline::{MapOpener, ScriptedConsole, SessionController};
use std::collections::HashMap;
use std::sync::Mutex;

struct StubSource {
    datasets: HashMap<String, Vec<Restaurant>>,
}

impl StubSource {
    fn with(term: &str, records: Vec<Restaurant>) -> Self {
        let mut datasets = HashMap::new();
        datasets.insert(term.to_string(), records);
        Self { datasets }
    }
}

#[async_trait]
impl RestaurantSource for StubSource {
    async fn fetch(&self, term: &str) -> dataset::Result<Vec<Restaurant>> {
        Ok(self.datasets.get(term).cloned().unwrap_or_default())
    }
}

struct RecordingOpener {
    opened: Mutex<Vec<(f64, f64)>>,
}

impl RecordingOpener {
    fn new() -> Self {
        Self {
            opened: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(f64, f64)> {
        self.opened.lock().unwrap().clone()
    }
}

impl MapOpener for RecordingOpener {
    fn open(&self, latitude: f64, longitude: f64) -> anyhow::Result<()> {
        self.opened.lock().unwrap().push((latitude, longitude));
        Ok(())
    }
}

fn restaurant(name: &str, cuisine: &str, rating: f32, price: &str, lat: f64) -> Restaurant {
    Restaurant {
        name: Some(name.to_string()),
        latitude: Some(lat),
        longitude: Some(-83.0),
        address: Some(format!("{name} Ave")),
        price: PriceTier::from_symbol(price),
        rating,
        cuisine: Some(cuisine.to_string()),
        url: None,
    }
}

fn ann_arbor() -> Vec<Restaurant> {
    vec![
        restaurant("Tony's", "Pizza", 4.5, "$$", 1.0),
        restaurant("Sakana", "Sushi", 4.0, "$$$", 2.0),
        restaurant("Slice House", "Pizza", 4.0, "$", 3.0),
        restaurant("Cart", "Tacos", 3.0, "$", 4.0),
    ]
}

#[tokio::test]
async fn test_full_session_with_index_selection() {
    let source = StubSource::with("Ann Arbor", ann_arbor());
    let opener = RecordingOpener::new();
    let controller = SessionController::new(&source, &opener);

    // Filter to pizza (narrows, previewed), decline rating and price, then
    // ask directions to the second survivor.
    let mut console = ScriptedConsole::new(&[
        "Ann Arbor", "yes", "pizza", "no", "no", "yes", "1",
    ]);
    controller.run(&mut console).await.unwrap();

    assert!(console.saw("Showing the first 4 of 4 results"));
    assert_eq!(console.count("Previewing up to 50 results"), 1);
    assert!(console.saw("Final Results"));
    // Survivor order is Tony's then Slice House; index 1 is Slice House.
    assert_eq!(opener.calls(), vec![(3.0, -83.0)]);
}

#[tokio::test]
async fn test_single_survivor_short_circuits_remaining_stages() {
    let source = StubSource::with("Ann Arbor", ann_arbor());
    let opener = RecordingOpener::new();
    let controller = SessionController::new(&source, &opener);

    // Rating 4.5 leaves only Tony's. The price stage must never be offered:
    // the script holds no further answers beyond the directions prompt, so
    // offering it would exhaust the script and fail the run.
    let mut console = ScriptedConsole::new(&["Ann Arbor", "no", "yes", "4.5", "yes"]);
    controller.run(&mut console).await.unwrap();

    assert!(!console.saw("Do you want to filter the price?"));
    assert!(console.saw("Would you like to get directions to this restaurant?"));
    assert_eq!(opener.calls(), vec![(1.0, -83.0)]);
}

#[tokio::test]
async fn test_empty_stage_result_reruns_same_stage() {
    let source = StubSource::with("Ann Arbor", ann_arbor());
    let opener = RecordingOpener::new();
    let controller = SessionController::new(&source, &opener);

    // "thai" matches nothing, so the cuisine question comes back; answering
    // "no" the second time passes everything through.
    let mut console = ScriptedConsole::new(&[
        "Ann Arbor", "yes", "thai", "no", "no", "no", "no",
    ]);
    controller.run(&mut console).await.unwrap();

    assert!(console.saw("No results found. Please try again."));
    assert_eq!(console.count("Do you want to filter the type of food?"), 2);
    assert!(console.saw("Session Ended"));
}

#[tokio::test]
async fn test_declined_stages_print_no_preview() {
    let source = StubSource::with("Ann Arbor", ann_arbor());
    let opener = RecordingOpener::new();
    let controller = SessionController::new(&source, &opener);

    let mut console = ScriptedConsole::new(&["Ann Arbor", "no", "no", "no", "no"]);
    controller.run(&mut console).await.unwrap();

    assert_eq!(console.count("Previewing up to 50 results"), 0);
    assert!(console.saw("Final Results"));
}

#[tokio::test]
async fn test_unknown_city_reprompts_until_exit() {
    let source = StubSource::with("Ann Arbor", ann_arbor());
    let opener = RecordingOpener::new();
    let controller = SessionController::new(&source, &opener);

    let mut console = ScriptedConsole::new(&["Nowhere", "EXIT"]);
    controller.run(&mut console).await.unwrap();

    assert!(console.saw("No results for that city."));
    assert!(console.saw("Session Ended"));
    assert!(opener.calls().is_empty());
}

#[tokio::test]
async fn test_unknown_city_then_valid_city() {
    let source = StubSource::with("Detroit", ann_arbor());
    let opener = RecordingOpener::new();
    let controller = SessionController::new(&source, &opener);

    let mut console = ScriptedConsole::new(&["Toledo", "Detroit", "no", "no", "no", "no"]);
    controller.run(&mut console).await.unwrap();

    assert_eq!(console.count("Enter a city: "), 2);
    assert!(console.saw("Final Results"));
}

#[tokio::test]
async fn test_price_filter_to_single_record() {
    let source = StubSource::with(
        "Detroit",
        vec![
            restaurant("Cart", "Tacos", 4.0, "$", 1.0),
            restaurant("Tony's", "Pizza", 4.5, "$$", 2.0),
            restaurant("Gilded Fork", "French", 4.8, "$$$$", 3.0),
        ],
    );
    let opener = RecordingOpener::new();
    let controller = SessionController::new(&source, &opener);

    let mut console = ScriptedConsole::new(&["Detroit", "no", "no", "yes", "$$", "no"]);
    controller.run(&mut console).await.unwrap();

    // Exactly the one "$$" record survives into the final listing.
    assert!(console.saw("0. Tony's, Pizza, 4.5, $$"));
    assert!(!console.saw("1. "));
    assert!(console.saw("Session Ended"));
}
