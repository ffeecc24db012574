//! Reference Generator Tests.

use pagesim_core::config::GeneratorConfig;
use pagesim_core::sim::ReferenceGenerator;
use pagesim_core::{SimError, SimResult, compare};

#[test]
fn default_ranges_are_respected() -> SimResult<()> {
    for seed in 1..200 {
        let pages = ReferenceGenerator::with_seed(GeneratorConfig::default(), seed)?.generate();
        assert!((10..=20).contains(&pages.len()), "length {}", pages.len());
        assert!(pages.iter().all(|&page| page <= 9));
    }
    Ok(())
}

#[test]
fn same_seed_same_string() -> SimResult<()> {
    let a = ReferenceGenerator::with_seed(GeneratorConfig::default(), 42)?.generate();
    let b = ReferenceGenerator::with_seed(GeneratorConfig::default(), 42)?.generate();
    let c = ReferenceGenerator::with_seed(GeneratorConfig::default(), 43)?.generate();
    assert_eq!(a, b);
    assert_ne!(a, c);
    Ok(())
}

#[test]
fn successive_strings_differ() -> SimResult<()> {
    let mut generator = ReferenceGenerator::with_seed(GeneratorConfig::default(), 7)?;
    let first = generator.generate();
    let second = generator.generate();
    assert_ne!(first, second);
    Ok(())
}

#[test]
fn fixed_length_range() -> SimResult<()> {
    let config = GeneratorConfig {
        min_length: 5,
        max_length: 5,
        max_page: 0,
        seed: Some(1),
    };
    assert_eq!(ReferenceGenerator::new(config)?.generate(), vec![0; 5]);
    Ok(())
}

#[test]
fn generated_strings_are_valid_input() -> SimResult<()> {
    let mut generator = ReferenceGenerator::with_seed(GeneratorConfig::default(), 2024)?;
    for _ in 0..20 {
        let _ = compare(&generator.generate(), 3)?;
    }
    Ok(())
}

#[test]
fn invalid_ranges_rejected() {
    let config = GeneratorConfig {
        min_length: 0,
        ..GeneratorConfig::default()
    };
    assert!(matches!(
        ReferenceGenerator::new(config),
        Err(SimError::Config(_))
    ));
}
