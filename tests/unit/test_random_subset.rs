//! Unit tests for the random subset generator
//!
//! Tests cover:
//! - Output shape for every strategy
//! - Range edge cases (negative, single value, full range)
//! - Request validation

use katas::invoke::{invoke, Operation};
use katas::random_subset::{
    generate, generate_with, uniform, Strategy, SubsetRequest, MAX_POOL_SIZE,
};
use serde_json::json;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn is_valid_subset(values: &[i64], request: &SubsetRequest) -> bool {
    let distinct: HashSet<_> = values.iter().collect();
    values.len() == request.length
        && distinct.len() == values.len()
        && values
            .iter()
            .all(|v| (request.min..=request.max).contains(v))
}

// ============================================================================
// Strategy Tests
// ============================================================================

mod strategy_tests {
    use super::*;

    #[test]
    fn test_default_strategy_is_pool_removal() {
        assert_eq!(Strategy::default(), Strategy::PoolRemoval);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Strategy::Rejection.to_string(), "rejection");
        assert_eq!(Strategy::RejectionWithSet.to_string(), "rejection-with-set");
        assert_eq!(Strategy::PoolRemoval.to_string(), "pool-removal");
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Strategy::RejectionWithSet).unwrap();
        assert_eq!(json, "\"rejection-with-set\"");
    }
}

// ============================================================================
// Generation Tests
// ============================================================================

mod generation_tests {
    use super::*;

    #[test]
    fn test_negative_range() {
        let request = SubsetRequest::new(6, -3, 3);
        for strategy in Strategy::ALL {
            let values = generate(&request, strategy).unwrap();
            assert!(is_valid_subset(&values, &request), "{:?}", values);
        }
    }

    #[test]
    fn test_full_range_every_strategy() {
        let request = SubsetRequest::new(8, 10, 17);
        let expected: Vec<i64> = (10..=17).collect();
        for strategy in Strategy::ALL {
            let mut values = generate(&request, strategy).unwrap();
            values.sort_unstable();
            assert_eq!(values, expected, "{}", strategy);
        }
    }

    #[test]
    fn test_pool_removal_covers_every_position() {
        // Every value should eventually appear first
        let request = SubsetRequest::new(1, 0, 4);
        let mut rng = StdRng::seed_from_u64(2024);
        let mut firsts = HashSet::new();
        for _ in 0..200 {
            firsts.insert(generate_with(&mut rng, &request, Strategy::PoolRemoval).unwrap()[0]);
        }
        assert_eq!(firsts.len(), 5);
    }

    #[test]
    fn test_uniform_single_point() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(uniform(&mut rng, 7, 7), 7);
    }

    #[test]
    fn test_extreme_bounds_with_rejection() {
        let request = SubsetRequest::new(4, i64::MAX - 3, i64::MAX);
        let values = generate(&request, Strategy::Rejection).unwrap();
        assert!(is_valid_subset(&values, &request));
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_range_size() {
        assert_eq!(SubsetRequest::new(0, 2, 32).range_size(), 31);
        assert_eq!(SubsetRequest::new(0, 5, 4).range_size(), 0);
        assert_eq!(
            SubsetRequest::new(0, i64::MIN, i64::MAX).range_size(),
            1u128 << 64
        );
    }

    #[test]
    fn test_validate_accepts_exact_fit() {
        assert!(SubsetRequest::new(31, 2, 32).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_overflowing_length() {
        let err = SubsetRequest::new(32, 2, 32).validate().unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("holds only 31"));
    }

    #[test]
    fn test_length_limit() {
        let at_limit = SubsetRequest::new(MAX_POOL_SIZE as usize, i64::MIN, i64::MAX);
        assert!(at_limit.validate().is_ok());

        let over = SubsetRequest::new(MAX_POOL_SIZE as usize + 1, i64::MIN, i64::MAX);
        let err = over.validate().unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_oversized_length_through_invoke_is_an_error() {
        let result = invoke(
            Operation::RandomSubset,
            &json!({
                "length": 1u64 << 62,
                "min": i64::MIN,
                "max": i64::MAX,
                "strategy": "rejection-with-set",
                "seed": 1
            }),
        );
        assert!(result.unwrap_err().is_invalid_argument());
    }
}
