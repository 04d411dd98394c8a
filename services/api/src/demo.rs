use crate::infra::{InMemoryFilterStore, OfflineSuggestionGateway};
use clap::Args;
use std::sync::Arc;

use clinicjobs::error::AppError;
use clinicjobs::marketplace::catalog::{JobFilter, MarketplaceCatalog, SalaryBand};
use clinicjobs::marketplace::domain::Role;
use clinicjobs::marketplace::profile::completion::{CompletionEvaluator, CompletionReport};
use clinicjobs::marketplace::session::{PaymentMethod, PaymentSimulator, PaymentTiming};
use clinicjobs::marketplace::{
    ClinicProfileUpdate, DentistProfileUpdate, JobDraft, MarketplaceError, MarketplaceService,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the AI suggestion portion of the demo.
    #[arg(long)]
    pub(crate) skip_suggestions: bool,
    /// Only run the journey for one side of the marketplace.
    #[arg(long, value_parser = parse_role)]
    pub(crate) role: Option<Role>,
}

fn parse_role(raw: &str) -> Result<Role, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "dentist" | "dentista" => Ok(Role::Dentist),
        "clinic" | "clinica" | "clínica" => Ok(Role::Clinic),
        other => Err(format!("unknown role '{other}' (expected dentist or clinic)")),
    }
}

type DemoService = MarketplaceService<InMemoryFilterStore, OfflineSuggestionGateway>;

fn build_demo_service() -> Result<DemoService, AppError> {
    Ok(MarketplaceService::new(
        MarketplaceCatalog::seeded()?,
        Arc::new(InMemoryFilterStore::default()),
        OfflineSuggestionGateway,
        CompletionEvaluator::default(),
        PaymentSimulator::new(PaymentTiming::instant()),
    ))
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let run_dentist = args.role != Some(Role::Clinic);
    let run_clinic = args.role != Some(Role::Dentist);

    if run_dentist {
        dentist_journey(args.skip_suggestions).await?;
    }
    if run_clinic {
        clinic_journey(args.skip_suggestions).await?;
    }

    println!("== Demo concluída ==");
    Ok(())
}

fn print_completion(report: &CompletionReport) {
    println!(
        "  perfil {}% completo ({})",
        report.percentage,
        if report.is_complete {
            "pronto"
        } else {
            "em andamento"
        }
    );
    for check in &report.checks {
        let mark = if check.satisfied { "x" } else { " " };
        println!("    [{mark}] {}", check.requirement.label());
    }
}

async fn dentist_journey(skip_suggestions: bool) -> Result<(), AppError> {
    println!("== Jornada do dentista ==");
    let service = build_demo_service()?;

    let session = service.login(Role::Dentist)?;
    println!(
        "  login como {} ({})",
        session.role.label(),
        session.payment_status.label()
    );

    let (receipt, session) = service.activate(PaymentMethod::Pix).await?;
    println!(
        "  ativação via {} confirmada: R$ {},{:02} ({})",
        receipt.method.label(),
        receipt.amount_cents / 100,
        receipt.amount_cents % 100,
        session.payment_status.label()
    );

    match service.search_jobs(&JobFilter::default()) {
        Err(MarketplaceError::ProfileIncomplete { missing }) => {
            println!(
                "  vagas bloqueadas: {} requisito(s) pendente(s)",
                missing.len()
            );
        }
        Err(other) => return Err(other.into()),
        Ok(_) => println!("  vagas liberadas antes do esperado"),
    }

    let report = service.update_dentist_profile(DentistProfileUpdate {
        specialty: Some("Ortodontia".to_string()),
        bio: Some("Ortodontista com doze anos de experiência em casos complexos.".to_string()),
        ..Default::default()
    })?;
    print_completion(&report);

    service.add_portfolio_item(
        "Caso Clínico Exemplo".to_string(),
        "Reabilitação Estética".to_string(),
        "https://example.com/caso.jpg".to_string(),
    )?;
    let (_, report) = service.add_experience(
        "Sorriso Kids".to_string(),
        "Ortodontista".to_string(),
        "2018 - 2022".to_string(),
        "Responsável pelo setor de ortodontia.".to_string(),
    )?;
    print_completion(&report);

    let jobs = service.search_jobs(&JobFilter::default())?;
    println!("  {} vaga(s) no catálogo:", jobs.len());
    for job in &jobs {
        println!(
            "    {} — {} ({}, {})",
            job.title,
            job.clinic_name,
            job.region.label(),
            job.salary_range
        );
    }

    let band = SalaryBand::by_label("R$ 5.000 - R$ 10.000").unwrap_or_else(SalaryBand::unbounded);
    let filter = JobFilter {
        salary: band,
        ..JobFilter::default()
    };
    let banded = service.search_jobs(&filter)?;
    println!("  {} vaga(s) na faixa {}", banded.len(), band.label);

    let saved = service.save_filter(&filter, Some("Faixa intermediária".to_string()))?;
    println!("  filtro salvo como '{}'", saved.name);
    let restored = service.apply_saved_filter(&saved.id)?;
    println!("  filtro reaplicado: faixa {}", restored.salary.label);

    if !skip_suggestions {
        let suggestion = service.improve_bio("Ortodontia").await?;
        println!("  bio sugerida: {suggestion}");
    }

    service.logout()?;
    println!("  logout\n");
    Ok(())
}

async fn clinic_journey(skip_suggestions: bool) -> Result<(), AppError> {
    println!("== Jornada da clínica ==");
    let service = build_demo_service()?;

    service.login(Role::Clinic)?;
    service.activate(PaymentMethod::Card).await?;
    println!("  login e ativação concluídos");

    let report = service.update_clinic_profile(ClinicProfileUpdate {
        description: Some(
            "Clínica moderna com scanner intraoral e fluxo digital completo.".to_string(),
        ),
        neighborhood: Some("Itaim Bibi, SP".to_string()),
        remuneration_value: Some("R$ 450,00".to_string()),
        work_days: Some(3),
        ..Default::default()
    })?;
    print_completion(&report);

    service.add_clinic_photo("https://example.com/recepcao.jpg".to_string())?;

    // The fourth toggle hits the cap and is silently ignored.
    for specialty in ["Ortodontia", "Endodontia", "Periodontia", "Implantodontia"] {
        service.toggle_clinic_specialty(specialty)?;
    }
    let report = service.clinic_completion()?;
    print_completion(&report);

    let ack = service.publish_job(JobDraft {
        title: "Ortodontista".to_string(),
        description: "Vaga para ortodontista com agenda ativa.".to_string(),
    })?;
    println!("  {}", ack.message);

    let candidates = service.browse_candidates(&Default::default())?;
    println!("  {} candidato(s) disponíveis:", candidates.len());
    for candidate in &candidates {
        println!(
            "    {} — {} ({} anos, nota {})",
            candidate.name, candidate.specialty, candidate.experience_years, candidate.rating
        );
    }

    if !skip_suggestions {
        let suggestion = service.draft_job_description("Ortodontista").await?;
        println!("  descrição sugerida: {suggestion}");
    }

    service.logout()?;
    println!("  logout\n");
    Ok(())
}
