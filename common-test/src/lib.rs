use std::{
    collections::HashMap,
    env,
    error::Error,
    ops::Range,
    sync::{OnceLock, RwLock},
};

use rand::{random, rngs::StdRng, Rng, SeedableRng};

pub const DEFAULT_TEST_SEED_ENV: &str = "DEFAULT_TEST_SEED";

pub const TEMPERATURE_RANGE: Range<f64> = -40.0..120.0;
pub const HUMIDITY_RANGE: Range<f64> = 0.0..100.0;
pub const PRESSURE_RANGE: Range<f64> = 25.0..1050.0;

static SEEDS: OnceLock<RwLock<HashMap<&'static str, u64>>> = OnceLock::new();

fn seeds() -> &'static RwLock<HashMap<&'static str, u64>> {
    SEEDS.get_or_init(|| RwLock::new(HashMap::new()))
}

fn seed_for(key: &'static str) -> Result<u64, Box<dyn Error>> {
    let mut seeds = seeds().write()?;
    let seed = *seeds.entry(key).or_insert_with(|| {
        let seed = env::var(key)
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or_else(random);
        println!("Using seed {} for {}", seed, key);
        seed
    });
    Ok(seed)
}

pub fn get_seeded_rng() -> Result<StdRng, Box<dyn Error>> {
    get_seeded_rng_from_scope(DEFAULT_TEST_SEED_ENV)
}

pub fn get_seeded_rng_from_scope(key: &'static str) -> Result<StdRng, Box<dyn Error>> {
    Ok(StdRng::seed_from_u64(seed_for(key)?))
}

pub fn random_reading(rng: &mut impl Rng) -> (f64, f64, f64) {
    (
        rng.gen_range(TEMPERATURE_RANGE),
        rng.gen_range(HUMIDITY_RANGE),
        rng.gen_range(PRESSURE_RANGE),
    )
}

pub fn random_readings(rng: &mut impl Rng, count: usize) -> Vec<(f64, f64, f64)> {
    (0..count).map(|_| random_reading(rng)).collect()
}

#[cfg(test)]
mod tests {
    use std::env;

    use crate::{
        get_seeded_rng_from_scope, random_readings, seed_for, seeds, HUMIDITY_RANGE,
        PRESSURE_RANGE, TEMPERATURE_RANGE,
    };

    #[test]
    fn test_get_seeded_rng_from_scope() {
        // Given
        let key = "test_get_seeded_rng_from_scope";
        let seed = 1u64;
        env::set_var(key, seed.to_string());

        // When
        get_seeded_rng_from_scope(key).unwrap();

        // Then
        assert!(seeds().read().unwrap().contains_key(key));
        assert_eq!(seed, seed_for(key).unwrap())
    }

    #[test]
    fn test_random_readings() {
        // Given
        let mut rng = get_seeded_rng_from_scope("test_random_readings").unwrap();

        // When
        let result = random_readings(&mut rng, 16);

        // Then
        assert_eq!(16, result.len());
        assert!(
            result.iter().all(|(t, h, p)| TEMPERATURE_RANGE.contains(t)
                && HUMIDITY_RANGE.contains(h)
                && PRESSURE_RANGE.contains(p)),
            "Should draw every field inside its range"
        );
    }
}
