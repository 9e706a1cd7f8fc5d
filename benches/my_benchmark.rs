use criterion::{black_box, criterion_group, criterion_main, Criterion};
use greenscreen::{guess_company, normalize_company_name, search_company_names};
use test_utils::constants::S_RAY_SAMPLE_CSV_PATH;
use test_utils::load_company_names_from_file;

fn load_candidates() -> Vec<String> {
    let company_names = load_company_names_from_file(&*S_RAY_SAMPLE_CSV_PATH)
        .expect("Failed to load company names from CSV");

    // Pad the sample out to a more realistic candidate count
    (0..50)
        .flat_map(|batch| {
            company_names
                .iter()
                .map(move |company_name| format!("{} Holdings {}", company_name, batch))
        })
        .chain(company_names.iter().cloned())
        .collect()
}

fn benchmark_guess_company(c: &mut Criterion) {
    let candidates = load_candidates();

    c.bench_function("guess_company", |b| {
        b.iter(|| guess_company(black_box("www.greenvalleyfarms.com"), black_box(&candidates)))
    });
}

fn benchmark_search_company_names(c: &mut Criterion) {
    let candidates = load_candidates();

    c.bench_function("search_company_names", |b| {
        b.iter(|| search_company_names(black_box(&candidates), black_box(Some("valley farms"))))
    });
}

fn benchmark_normalize_company_name(c: &mut Criterion) {
    c.bench_function("normalize_company_name", |b| {
        b.iter(|| normalize_company_name(black_box("Henkel AG & Co. KGaA")))
    });
}

criterion_group!(
    benches,
    benchmark_guess_company,
    benchmark_search_company_names,
    benchmark_normalize_company_name
);
criterion_main!(benches);
