use super::common::*;
use crate::marketplace::catalog::{CandidateFilter, JobFilter, SalaryBand, Selection};
use crate::marketplace::domain::Region;

#[test]
fn default_filter_returns_the_whole_catalog_in_order() {
    let jobs = sample_jobs();
    let results = JobFilter::default().apply(&jobs);
    assert_eq!(results.len(), jobs.len());
    let ids: Vec<_> = results.iter().map(|job| job.id.as_str()).collect();
    assert_eq!(ids, vec!["job-1", "job-2", "job-3", "job-4"]);
}

#[test]
fn text_search_is_case_insensitive_across_fields() {
    let jobs = sample_jobs();

    let by_clinic = JobFilter {
        search_term: "odonto EXCELLENCE".to_string(),
        ..JobFilter::default()
    };
    assert_eq!(by_clinic.apply(&jobs).len(), 1);
    assert_eq!(by_clinic.apply(&jobs)[0].id, "job-1");

    let by_title = JobFilter {
        search_term: "implanto".to_string(),
        ..JobFilter::default()
    };
    assert_eq!(by_title.apply(&jobs)[0].id, "job-2");

    let by_location = JobFilter {
        search_term: "guarulhos".to_string(),
        ..JobFilter::default()
    };
    assert_eq!(by_location.apply(&jobs)[0].id, "job-3");

    let no_match = JobFilter {
        search_term: "harmonização".to_string(),
        ..JobFilter::default()
    };
    assert!(no_match.apply(&jobs).is_empty());
}

#[test]
fn region_selection_uses_or_semantics_within_the_dimension() {
    let jobs = sample_jobs();
    let filter = JobFilter {
        regions: Selection::only(vec![Region::ZonaSul, Region::Centro]),
        ..JobFilter::default()
    };
    let ids: Vec<_> = filter.apply(&jobs).iter().map(|job| job.id.as_str()).collect();
    assert_eq!(ids, vec!["job-1", "job-2"]);
}

#[test]
fn salary_band_keeps_only_minimums_inside_the_half_open_range() {
    // Catalog minimums: 8000, 15000, 4500, 10000. The 5k-10k band is
    // inclusive below and exclusive above, so only the 8000 listing survives.
    let jobs = sample_jobs();
    let filter = JobFilter {
        salary: SalaryBand::by_label("R$ 5.000 - R$ 10.000").expect("band exists"),
        ..JobFilter::default()
    };
    let results = filter.apply(&jobs);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].min_salary_value, 8_000);
}

#[test]
fn unbounded_band_has_no_upper_limit() {
    let jobs = sample_jobs();
    let filter = JobFilter {
        salary: SalaryBand::by_label("Acima de R$ 15.000").expect("band exists"),
        ..JobFilter::default()
    };
    let results = filter.apply(&jobs);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "job-2");
}

#[test]
fn dimensions_combine_with_and() {
    let jobs = sample_jobs();
    // The search term matches job-1, but the region filter excludes it.
    let filter = JobFilter {
        search_term: "ortodontista".to_string(),
        regions: Selection::only(vec![Region::Centro]),
        ..JobFilter::default()
    };
    assert!(filter.apply(&jobs).is_empty());
}

#[test]
fn specialty_selection_narrows_jobs() {
    let jobs = sample_jobs();
    let filter = JobFilter {
        specialties: Selection::only(vec!["Clínico Geral".to_string()]),
        ..JobFilter::default()
    };
    let results = filter.apply(&jobs);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "job-3");
}

#[test]
fn selection_toggle_follows_the_chip_semantics() {
    let mut selection: Selection<Region> = Selection::All;

    // From the sentinel, picking a value narrows to exactly that value.
    selection.toggle(Region::ZonaSul);
    assert_eq!(selection, Selection::Only(vec![Region::ZonaSul]));

    selection.toggle(Region::Centro);
    assert_eq!(
        selection,
        Selection::Only(vec![Region::ZonaSul, Region::Centro]),
    );

    // Deselecting down to nothing reverts to the sentinel, never an empty set.
    selection.toggle(Region::ZonaSul);
    selection.toggle(Region::Centro);
    assert_eq!(selection, Selection::All);
}

#[test]
fn selecting_all_clears_specific_values() {
    let mut selection = Selection::only(vec![Region::ZonaNorte, Region::ZonaOeste]);
    selection.select_all();
    assert!(selection.is_all());
    assert!(selection.values().is_empty());
}

#[test]
fn empty_value_list_collapses_to_all() {
    let selection: Selection<Region> = Selection::only(Vec::new());
    assert!(selection.is_all());
}

#[test]
fn candidate_filter_matches_search_and_specialty() {
    let candidates = sample_candidates();

    let by_name = CandidateFilter {
        search_term: "ana".to_string(),
        ..CandidateFilter::default()
    };
    assert_eq!(by_name.apply(&candidates).len(), 1);
    assert_eq!(by_name.apply(&candidates)[0].id, "cand-1");

    let by_specialty = CandidateFilter {
        specialties: Selection::only(vec!["Ortodontia".to_string()]),
        ..CandidateFilter::default()
    };
    assert_eq!(by_specialty.apply(&candidates)[0].id, "cand-2");
}

#[test]
fn seeded_catalog_parses_the_bundled_data() {
    let catalog = crate::marketplace::catalog::MarketplaceCatalog::seeded()
        .expect("bundled seed data parses");
    assert_eq!(catalog.jobs().len(), 4);
    assert_eq!(catalog.candidates().len(), 3);

    let minimums: Vec<_> = catalog
        .jobs()
        .iter()
        .map(|job| job.min_salary_value)
        .collect();
    assert_eq!(minimums, vec![8_000, 15_000, 4_500, 10_000]);
}
