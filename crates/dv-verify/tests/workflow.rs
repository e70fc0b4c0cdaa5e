//! End-to-end runs of the mock verification workflow on page slots.
//!
//! Time is paused so the simulated latency is observable without waiting.

use std::time::Duration;

use dv_core::{Label, PageState, verdict};
use dv_verify::{
    ImagePayload, ImageSlot, Latency, MockAnalyzer, TextInput, TextSlot, ValidationError, Workflow,
};
use pretty_assertions::assert_eq;

const LIMIT: u64 = 5 * 1024 * 1024;

fn workflow(seed: u64) -> Workflow {
    Workflow::new(MockAnalyzer::new(Some(seed)), Latency::default())
}

fn png(len: usize) -> Vec<u8> {
    let mut bytes = b"\x89PNG\r\n\x1a\n".to_vec();
    bytes.resize(len, 0);
    bytes
}

#[tokio::test(start_paused = true)]
async fn fake_keyword_text_resolves_fake() {
    let mut workflow = workflow(1);
    let mut slot = TextSlot::new();
    slot.submit(TextInput::new("Breaking: this is FAKE news")).unwrap();

    let result = workflow.run(&mut slot).await.unwrap().expect("analysis ran");

    assert_eq!(result.label, Label::Fake);
    assert!(result.confidence > 70.0 && result.confidence <= 100.0);
    assert_eq!(result.details, verdict::TEXT_FAKE_DETAILS);
    assert_eq!(slot.state(), PageState::Resolved);
    assert_eq!(slot.result(), Some(&result));
}

#[tokio::test(start_paused = true)]
async fn plain_text_resolves_true() {
    let mut workflow = workflow(2);
    let mut slot = TextSlot::new();
    slot.submit(TextInput::new("Local bakery wins award")).unwrap();

    let result = workflow.run(&mut slot).await.unwrap().expect("analysis ran");

    assert_eq!(result.label, Label::True);
    assert!(result.confidence > 70.0 && result.confidence <= 100.0);
    assert_eq!(result.details, verdict::TEXT_TRUE_DETAILS);
}

#[tokio::test(start_paused = true)]
async fn text_result_arrives_after_two_seconds() {
    let mut workflow = workflow(3);
    let mut slot = TextSlot::new();
    slot.submit(TextInput::new("headline")).unwrap();

    let ticket = slot.begin().unwrap().expect("starts");
    assert_eq!(slot.state(), PageState::Analyzing);

    let early = tokio::time::timeout(Duration::from_millis(1999), workflow.process(&ticket)).await;
    assert!(early.is_err(), "result must not arrive before the delay");

    let start = tokio::time::Instant::now();
    let result = workflow.process(&ticket).await.unwrap();
    assert!(start.elapsed() >= Duration::from_millis(2000));
    assert!(slot.resolve(ticket, result).unwrap());
}

#[tokio::test(start_paused = true)]
async fn image_result_arrives_after_two_and_a_half_seconds() {
    let mut workflow = workflow(4);
    let mut slot = ImageSlot::new();
    slot.submit(ImagePayload::from_bytes(png(128), None, LIMIT).unwrap())
        .unwrap();

    let start = tokio::time::Instant::now();
    let result = workflow.run(&mut slot).await.unwrap().expect("analysis ran");

    assert!(start.elapsed() >= Duration::from_millis(2500));
    assert!(result.confidence > 75.0 && result.confidence <= 100.0);
    let expected = match result.label {
        Label::Fake => verdict::IMAGE_FAKE_DETAILS,
        Label::True => verdict::IMAGE_TRUE_DETAILS,
    };
    assert_eq!(result.details, expected);
}

#[tokio::test(start_paused = true)]
async fn empty_text_never_produces_a_result() {
    let mut workflow = workflow(5);
    let mut slot = TextSlot::new();
    slot.submit(TextInput::new("  \t ")).unwrap();

    let err = workflow.run(&mut slot).await.unwrap_err();

    assert_eq!(err.as_validation(), Some(&ValidationError::EmptyText));
    assert_eq!(slot.state(), PageState::Idle);
    assert!(slot.result().is_none());
}

#[test]
fn oversized_image_never_reaches_the_slot() {
    let err = ImagePayload::from_bytes(png(usize::try_from(LIMIT).unwrap() + 1), None, LIMIT)
        .unwrap_err();
    assert!(matches!(
        err.as_validation(),
        Some(ValidationError::ImageTooLarge { .. })
    ));

    let slot = ImageSlot::new();
    assert_eq!(slot.state(), PageState::Idle);
}

#[tokio::test(start_paused = true)]
async fn retrigger_while_pending_is_noop() {
    let mut workflow = workflow(6);
    let mut slot = TextSlot::new();
    slot.submit(TextInput::new("headline")).unwrap();

    let ticket = slot.begin().unwrap().expect("starts");
    assert!(workflow.run(&mut slot).await.unwrap().is_none());
    assert_eq!(slot.state(), PageState::Analyzing);

    let result = workflow.process(&ticket).await.unwrap();
    slot.resolve(ticket, result).unwrap();
    assert_eq!(slot.state(), PageState::Resolved);
}

#[tokio::test(start_paused = true)]
async fn clearing_image_discards_result_and_late_verdict() {
    let mut workflow = workflow(7);
    let mut slot = ImageSlot::new();
    slot.submit(ImagePayload::from_bytes(png(64), None, LIMIT).unwrap())
        .unwrap();
    workflow.run(&mut slot).await.unwrap().expect("analysis ran");
    assert!(slot.result().is_some());

    slot.clear().unwrap();
    assert_eq!(slot.state(), PageState::Idle);
    assert!(slot.result().is_none());

    slot.submit(ImagePayload::from_bytes(png(64), None, LIMIT).unwrap())
        .unwrap();
    let ticket = slot.begin().unwrap().expect("starts");
    slot.clear().unwrap();
    let late = workflow.process(&ticket).await.unwrap();
    assert!(!slot.resolve(ticket, late).unwrap());
    assert!(slot.result().is_none());
}

#[tokio::test]
async fn zero_latency_runs_immediately() {
    let mut workflow = Workflow::new(MockAnalyzer::new(Some(8)), Latency::NONE);
    let mut slot = TextSlot::new();
    slot.submit(TextInput::new("a false claim")).unwrap();

    let result = workflow.run(&mut slot).await.unwrap().expect("analysis ran");
    assert_eq!(result.label, Label::Fake);
}
