use std::sync::Arc;

use super::common::*;
use crate::marketplace::domain::Role;
use crate::marketplace::service::{ClinicProfileUpdate, DentistProfileUpdate, MarketplaceError};
use crate::marketplace::suggestions::{prompts, SuggestionError, SuggestionService};

#[tokio::test]
async fn bio_prompt_carries_the_current_bio_and_specialty_focus() {
    let gateway = CapturingGateway::default();
    let calls = gateway.calls.clone();
    let service = activated(Role::Dentist, gateway).await;

    service
        .update_dentist_profile(DentistProfileUpdate {
            bio: Some("Atendo há dez anos em consultório próprio.".to_string()),
            ..Default::default()
        })
        .expect("profile update");

    let suggestion = service.improve_bio("Implantodontia").await.expect("suggestion");
    assert_eq!(suggestion, "texto gerado");

    let calls = calls.lock().expect("call mutex poisoned");
    assert_eq!(calls.len(), 1);
    let (prompt, temperature) = &calls[0];
    assert!(prompt.contains("Implantodontia"));
    assert!(prompt.contains("Atendo há dez anos em consultório próprio."));
    assert_eq!(*temperature, prompts::BIO_TEMPERATURE);
}

#[tokio::test]
async fn empty_bio_is_seeded_with_the_placeholder() {
    let gateway = CapturingGateway::default();
    let calls = gateway.calls.clone();
    let service = activated(Role::Dentist, gateway).await;

    service.improve_bio("Ortodontia").await.expect("suggestion");

    let calls = calls.lock().expect("call mutex poisoned");
    assert!(calls[0].0.contains(prompts::DEFAULT_BIO_SEED));
}

#[tokio::test]
async fn job_description_prompt_uses_the_clinic_description_as_context() {
    let gateway = CapturingGateway::default();
    let calls = gateway.calls.clone();
    let service = activated(Role::Clinic, gateway).await;

    service
        .update_clinic_profile(ClinicProfileUpdate {
            description: Some("Clínica com scanner intraoral e microscópio.".to_string()),
            ..Default::default()
        })
        .expect("profile update");

    service
        .draft_job_description("Endodontista")
        .await
        .expect("suggestion");

    let calls = calls.lock().expect("call mutex poisoned");
    let (prompt, temperature) = &calls[0];
    assert!(prompt.contains("Endodontista"));
    assert!(prompt.contains("scanner intraoral"));
    assert_eq!(*temperature, prompts::JOB_TEMPERATURE);
}

#[tokio::test]
async fn gateway_failure_is_surfaced_and_leaves_the_profile_untouched() {
    let service = activated(Role::Dentist, FailingGateway).await;
    let original = "Biografia original com mais de trinta caracteres escritos.".to_string();
    service
        .update_dentist_profile(DentistProfileUpdate {
            bio: Some(original),
            ..Default::default()
        })
        .expect("profile update");

    match service.improve_bio("Ortodontia").await {
        Err(MarketplaceError::Suggestion(SuggestionError::Api { status, .. })) => {
            assert_eq!(status, 503);
        }
        other => panic!("expected API failure, got {other:?}"),
    }

    // The original field value is retained; the bio check still passes.
    let report = service
        .update_dentist_profile(DentistProfileUpdate::default())
        .expect("report");
    assert!(report
        .checks
        .iter()
        .any(|check| check.requirement
            == crate::marketplace::profile::completion::Requirement::Bio
            && check.satisfied));

    match service.improve_bio("Ortodontia").await {
        Err(MarketplaceError::Suggestion(SuggestionError::Api { .. })) => {}
        other => panic!("slot should be free for a manual retry, got {other:?}"),
    }
}

#[tokio::test]
async fn concurrent_requests_for_the_same_field_are_rejected() {
    let gateway = HoldingGateway::new();
    let release = gateway.release.clone();
    let service = Arc::new(activated(Role::Dentist, gateway).await);

    let background = {
        let service = service.clone();
        tokio::spawn(async move { service.improve_bio("Ortodontia").await })
    };
    // Let the first call park inside the gateway while holding its slot.
    tokio::task::yield_now().await;

    match service.improve_bio("Endodontia").await {
        Err(MarketplaceError::Suggestion(SuggestionError::InFlight)) => {}
        other => panic!("expected in-flight rejection, got {other:?}"),
    }

    release.add_permits(1);
    let first = background.await.expect("task joins");
    assert!(first.is_ok());

    // Once the call resolved, the slot is free again.
    release.add_permits(1);
    assert!(service.improve_bio("Ortodontia").await.is_ok());
}

#[tokio::test]
async fn different_fields_may_be_in_flight_at_once() {
    let gateway = HoldingGateway::new();
    let release = gateway.release.clone();
    let service = SuggestionService::new(gateway);

    let bio = service.improve_bio("bio atual", "Ortodontia");
    let job = service.draft_job_description("Endodontista", "clínica moderna");

    release.add_permits(2);
    let (bio, job) = tokio::join!(bio, job);
    assert!(bio.is_ok());
    assert!(job.is_ok());
}

#[tokio::test]
async fn suggestions_are_gated_by_role() {
    let service = activated(Role::Clinic, StaticGateway).await;
    assert!(matches!(
        service.improve_bio("Ortodontia").await,
        Err(MarketplaceError::AccessDenied { .. })
    ));
    assert!(service.draft_job_description("Ortodontista").await.is_ok());
}
