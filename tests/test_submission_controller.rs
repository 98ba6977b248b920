//! Integration tests for the submission controller using an in-memory storage client.

mod mocks;

use contactos_form::error::StorageError;
use contactos_form::{Field, SubmissionController, SubmissionStatus, SubmitOutcome};
use mocks::MockStorageClient;
use std::sync::Arc;

fn controller_with(mock: &MockStorageClient) -> SubmissionController {
    SubmissionController::new(Arc::new(mock.clone()))
}

fn fill_valid(controller: &SubmissionController) {
    controller.set_field(Field::Name, "Ana Gomez");
    controller.set_field(Field::Email, "ana@example.com");
    controller.set_field(Field::Phone, "12345678");
}

#[tokio::test]
async fn test_valid_submission_stores_record_and_clears_form() {
    let mock = MockStorageClient::new();
    let controller = controller_with(&mock);
    fill_valid(&controller);

    let outcome = controller.submit().await;
    assert_eq!(outcome, SubmitOutcome::Saved);

    assert_eq!(mock.call_count(), 1);
    let (table, rows) = &mock.inserts()[0];
    assert_eq!(table, "contactos");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name.as_str(), "Ana Gomez");
    assert_eq!(rows[0].email.as_str(), "ana@example.com");
    assert_eq!(rows[0].phone.as_str(), "12345678");

    let state = controller.snapshot();
    assert_eq!(
        state.status,
        SubmissionStatus::Succeeded("Datos guardados correctamente".to_string())
    );
    assert!(state.values.is_empty());
    assert!(state.errors.is_empty());
}

#[tokio::test]
async fn test_storage_failure_keeps_input() {
    let mock = MockStorageClient::new();
    mock.fail_with(StorageError::Other("network down".to_string()));
    let controller = controller_with(&mock);
    fill_valid(&controller);

    let outcome = controller.submit().await;
    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(mock.call_count(), 1);

    let state = controller.snapshot();
    assert_eq!(
        state.status,
        SubmissionStatus::Failed("Error al guardar datos: network down".to_string())
    );
    assert_eq!(state.values.name, "Ana Gomez");
    assert_eq!(state.values.email, "ana@example.com");
    assert_eq!(state.values.phone, "12345678");
}

#[tokio::test]
async fn test_api_error_message_reaches_banner() {
    let mock = MockStorageClient::new();
    mock.fail_with(StorageError::ApiError {
        status: 409,
        message: "duplicate key value violates unique constraint".to_string(),
    });
    let controller = controller_with(&mock);
    fill_valid(&controller);

    controller.submit().await;

    let banner = controller.view().banner.unwrap();
    assert_eq!(
        banner.message,
        "Error al guardar datos: duplicate key value violates unique constraint"
    );
}

#[tokio::test]
async fn test_invalid_input_makes_no_storage_call() {
    let mock = MockStorageClient::new();
    let controller = controller_with(&mock);
    controller.set_field(Field::Name, "ab");
    controller.set_field(Field::Email, "x");
    controller.set_field(Field::Phone, "123");

    let outcome = controller.submit().await;
    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert_eq!(mock.call_count(), 0);

    let state = controller.snapshot();
    assert_eq!(state.status, SubmissionStatus::None);
    assert_eq!(state.errors.len(), 3);
    assert_eq!(state.values.name, "ab");
}

#[tokio::test]
async fn test_field_errors_replaced_on_each_pass() {
    let mock = MockStorageClient::new();
    let controller = controller_with(&mock);
    controller.set_field(Field::Name, "ab");
    controller.set_field(Field::Email, "x");
    controller.set_field(Field::Phone, "12345678");

    controller.submit().await;
    assert_eq!(controller.snapshot().errors.len(), 2);

    // Fix the name only: its error goes away, the email error stays
    controller.set_field(Field::Name, "Ana Gomez");
    controller.submit().await;
    let errors = controller.snapshot().errors;
    assert!(errors.get(Field::Name).is_none());
    assert!(errors.get(Field::Email).is_some());
    assert_eq!(errors.len(), 1);
}

#[tokio::test]
async fn test_second_submit_while_pending_is_ignored() {
    let mock = MockStorageClient::gated();
    let controller = Arc::new(controller_with(&mock));
    fill_valid(&controller);

    let first = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.submit().await })
    };

    while mock.call_count() == 0 {
        tokio::task::yield_now().await;
    }

    assert_eq!(controller.status(), SubmissionStatus::Pending);
    let view = controller.view();
    assert!(view.submit.disabled);
    assert_eq!(view.submit.label, "Enviando...");

    assert_eq!(controller.submit().await, SubmitOutcome::Ignored);
    assert_eq!(mock.call_count(), 1);

    mock.release();
    assert_eq!(first.await.unwrap(), SubmitOutcome::Saved);
    assert_eq!(mock.call_count(), 1);
    assert_eq!(controller.metrics().submissions_ignored_total(), 1);
}

#[tokio::test]
async fn test_pending_replaces_previous_banner() {
    let mock = MockStorageClient::gated();
    mock.fail_with(StorageError::Other("network down".to_string()));
    let controller = Arc::new(controller_with(&mock));
    fill_valid(&controller);

    mock.release();
    assert_eq!(controller.submit().await, SubmitOutcome::Failed);
    assert!(controller.view().banner.is_some());

    let retry = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.submit().await })
    };
    while mock.call_count() < 2 {
        tokio::task::yield_now().await;
    }
    assert!(controller.view().banner.is_none());

    mock.succeed();
    mock.release();
    assert_eq!(retry.await.unwrap(), SubmitOutcome::Saved);
    assert_eq!(controller.status(), SubmissionStatus::succeeded());
}

#[tokio::test]
async fn test_retry_after_failure_sends_again() {
    let mock = MockStorageClient::new();
    mock.fail_with(StorageError::Timeout);
    let controller = controller_with(&mock);
    fill_valid(&controller);

    assert_eq!(controller.submit().await, SubmitOutcome::Failed);
    assert_eq!(
        controller.status(),
        SubmissionStatus::Failed("Error al guardar datos: Request timeout".to_string())
    );

    mock.succeed();
    assert_eq!(controller.submit().await, SubmitOutcome::Saved);
    assert_eq!(mock.call_count(), 2);
    assert_eq!(mock.inserts()[0].1, mock.inserts()[1].1);
}

#[tokio::test]
async fn test_custom_table() {
    let mock = MockStorageClient::new();
    let controller = controller_with(&mock).with_table("contactos_test");
    fill_valid(&controller);

    controller.submit().await;
    assert_eq!(mock.inserts()[0].0, "contactos_test");
}
