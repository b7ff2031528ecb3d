mod common;

use common::FakeGateway;
use hrdash::controller::{FormController, FormMode};
use hrdash::entity::{Attachment, FieldError, Resource};
use hrdash::error::ApiError;
use hrdash::models::{Candidate, Document, UserAccount};
use hrdash::notify::{Notification, Notifier};

#[test]
fn create_opens_with_the_empty_entity() {
    let form = FormController::<Document>::create();
    assert_eq!(form.mode(), FormMode::Create);
    assert_eq!(form.draft().id(), "");
}

#[test]
fn edit_field_updates_exactly_one_field() {
    let mut form = FormController::<Candidate>::create();
    form.edit_field("nama_kandidat", "Budi").unwrap();
    form.edit_field("tanggal_interview", "2024-06-10").unwrap();

    let draft = form.draft();
    assert_eq!(draft.nama_kandidat, "Budi");
    assert_eq!(draft.tanggal_interview.unwrap().to_string(), "2024-06-10");
    assert_eq!(draft.posisi_yang_dilamar, "");
    assert_eq!(draft.summary, "");
}

#[test]
fn typed_parsing_rejects_bad_input() {
    let mut form = FormController::<Candidate>::create();
    assert!(matches!(
        form.edit_field("tanggal_interview", "June 10th"),
        Err(FieldError::InvalidDate { .. })
    ));
    assert!(matches!(
        form.edit_field("hasil_interview", "Maybe"),
        Err(FieldError::InvalidOption { .. })
    ));
    assert!(matches!(
        form.edit_field("no_such_field", "x"),
        Err(FieldError::UnknownField(_))
    ));
}

#[test]
fn attaching_a_file_replaces_the_stored_url() {
    let mut existing = common::doc("e1", "Kontrak A");
    existing.lampiran = Attachment::Stored("https://files/old.pdf".to_string());

    let mut form = FormController::edit(&existing);
    form.attach_file("lampiran", "new.pdf", "application/pdf", vec![7, 7])
        .unwrap();

    assert!(form.draft().lampiran.is_pending());
    assert!(form.draft().has_pending_attachment());
}

#[test]
fn attach_on_a_text_field_is_rejected() {
    let mut form = FormController::<Document>::create();
    assert!(matches!(
        form.attach_file("nama_dokumen", "x.pdf", "application/pdf", vec![]),
        Err(FieldError::KindMismatch { .. })
    ));
}

#[tokio::test]
async fn read_only_save_is_a_no_op() {
    let gateway = FakeGateway::<Document>::empty();
    let mut form = FormController::read_only(&common::doc("e1", "Kontrak A"));

    let result = form.save(&common::authed_session(), &gateway).await.unwrap();

    assert!(result.is_none());
    assert_eq!(gateway.call_count(), 0);
}

#[tokio::test]
async fn save_without_token_redirects_without_calling_the_gateway() {
    let gateway = FakeGateway::<Document>::empty();
    let mut form = FormController::create();
    form.edit_field("nama_dokumen", "Kontrak A").unwrap();

    let err = form
        .save(&common::anonymous_session(), &gateway)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Unauthenticated));
    assert!(err.requires_login());
    assert_eq!(gateway.call_count(), 0);
}

#[tokio::test]
async fn successful_save_returns_the_canonical_entity_and_resets_the_draft() {
    let gateway = FakeGateway::assigning_id("e9");
    let mut form = FormController::<Document>::create();
    form.edit_field("nama_dokumen", "Kontrak B").unwrap();

    let saved = form
        .save(&common::authed_session(), &gateway)
        .await
        .unwrap()
        .expect("create must return the saved entity");

    assert_eq!(saved.ess_id, "e9");
    assert_eq!(saved.nama_dokumen, "Kontrak B");
    // The draft is cleared for the next open.
    assert_eq!(form.draft().nama_dokumen, "");
}

#[tokio::test]
async fn dropped_in_flight_save_does_not_wedge_the_form() {
    let hanging = FakeGateway::<Document>::hanging_save();
    let mut form = FormController::create();
    form.edit_field("nama_dokumen", "Kontrak A").unwrap();

    // Abandon a save mid-flight, the way a navigation or timeout wrapper
    // drops the future.
    let attempt = tokio::time::timeout(
        std::time::Duration::from_millis(20),
        form.save(&common::authed_session(), &hanging),
    )
    .await;
    assert!(attempt.is_err(), "hanging save must time out");
    assert_eq!(hanging.call_count(), 1);

    // The in-flight flag is released and the draft survives.
    assert!(!form.is_saving());
    assert_eq!(form.draft().nama_dokumen, "Kontrak A");

    // The next submit reaches the gateway instead of being swallowed.
    let healthy = FakeGateway::assigning_id("e1");
    let saved = form
        .save(&common::authed_session(), &healthy)
        .await
        .unwrap()
        .expect("save after an abandoned attempt must go through");
    assert_eq!(saved.ess_id, "e1");
    assert_eq!(healthy.call_count(), 1);
}

#[tokio::test]
async fn validation_failure_keeps_the_draft_and_surfaces_the_message() {
    // Duplicate-key rejection from the users endpoint: the message is
    // shown verbatim and the attempted input is not lost.
    let gateway = FakeGateway::failing_save("E11000 duplicate key error");
    let mut form = FormController::<UserAccount>::create();
    form.edit_field("username", "budi").unwrap();
    form.edit_field("email", "budi@example.com").unwrap();
    form.edit_field("role", "User").unwrap();

    let mut notifier = Notifier::new();
    let err = form
        .save(&common::authed_session(), &gateway)
        .await
        .unwrap_err();
    notifier.error(err.to_string());

    assert_eq!(
        notifier.current(),
        Some(&Notification::Error("E11000 duplicate key error".to_string()))
    );
    assert_eq!(form.draft().username, "budi");
    assert_eq!(form.draft().email, "budi@example.com");
    assert_eq!(form.draft().role.role_name, "User");
}
