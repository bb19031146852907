//! # Registry Scenarios
//!
//! Sequences of registry operations checked end to end, including the
//! startup sequence run by the service and duplicate-id handling.

#[cfg(test)]
mod tests {
    use kc_01_identity_registry::{
        IdentityRegistry, IdentityRegistryApi, RegistryConfig, RegistryError,
        SharedIdentityRegistry,
    };
    use proptest::prelude::*;
    use service_runtime::demo::run_identity_demo;

    fn ids(registry: &IdentityRegistry) -> Vec<i32> {
        registry.iter().map(|identity| identity.id()).collect()
    }

    // =============================================================================
    // SCENARIOS
    // =============================================================================

    /// create A(1), B(2); find; hire 1; destroy 2, 1.
    #[test]
    fn test_basic_scenario() {
        let mut registry = IdentityRegistry::new();
        registry.create("A", 1).unwrap();
        registry.create("B", 2).unwrap();

        let a = registry.find(1).unwrap();
        assert_eq!((a.name(), a.id(), a.is_hired()), ("A", 1, false));

        registry.hire(1).unwrap();
        assert!(registry.find(1).unwrap().is_hired());
        assert!(!registry.find(2).unwrap().is_hired());

        assert!(registry.find(10).is_none());
        assert_eq!(registry.hire(10), Err(RegistryError::NotFound { id: 10 }));

        assert_eq!(registry.destroy(2), 1);
        assert!(registry.find(2).is_none());
        assert_eq!(registry.destroy(1), 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_newest_first_order() {
        let mut registry = IdentityRegistry::new();
        for id in 1..=4 {
            registry.create("x", id).unwrap();
        }
        assert_eq!(ids(&registry), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_duplicate_ids_shadow_and_destroy_together() {
        let mut registry = IdentityRegistry::new();
        registry.create("old", 7).unwrap();
        registry.create("new", 7).unwrap();

        assert_eq!(registry.find(7).unwrap().name(), "new");

        registry.hire(7).unwrap();
        let hired: Vec<_> = registry.iter().map(|i| (i.name(), i.is_hired())).collect();
        assert_eq!(hired, vec![("new", true), ("old", false)]);

        assert_eq!(registry.destroy(7), 2);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_long_name_truncated_to_19_bytes() {
        let mut registry = IdentityRegistry::new();
        registry.create("A name well over twenty bytes", 1).unwrap();
        assert_eq!(registry.find(1).unwrap().name(), "A name well over tw");
    }

    #[test]
    fn test_destroy_all_after_partial_startup() {
        let mut registry =
            IdentityRegistry::with_config(RegistryConfig::with_max_identities(1));
        assert_eq!(
            run_identity_demo(&mut registry),
            Err(RegistryError::OutOfMemory { id: 2 })
        );
        assert_eq!(registry.len(), 1);

        assert_eq!(registry.destroy_all(), 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_shared_registry_across_threads() {
        let registry = std::sync::Arc::new(SharedIdentityRegistry::default());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let registry = std::sync::Arc::clone(&registry);
                std::thread::spawn(move || {
                    for i in 0..50 {
                        registry.create("worker", t * 100 + i).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.len(), 200);
        assert!(registry.find(399).is_none());
        assert!(registry.find(349).is_some());
        assert_eq!(registry.destroy_all(), 200);
    }

    // =============================================================================
    // PROPERTIES
    // =============================================================================

    proptest! {
        /// After destroy(id) no record with that id remains, and the others
        /// keep their relative order.
        #[test]
        fn prop_destroy_preserves_others(
            created in proptest::collection::vec(0i32..8, 0..40),
            victim in 0i32..8,
        ) {
            let mut registry = IdentityRegistry::with_config(
                RegistryConfig::with_max_identities(64),
            );
            for id in &created {
                registry.create("p", *id).unwrap();
            }
            let expected: Vec<i32> = ids(&registry)
                .into_iter()
                .filter(|id| *id != victim)
                .collect();
            let removed = created.iter().filter(|id| **id == victim).count();

            prop_assert_eq!(registry.destroy(victim), removed);
            prop_assert!(registry.find(victim).is_none());
            prop_assert_eq!(ids(&registry), expected);
        }
    }
}
