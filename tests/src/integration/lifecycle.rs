//! # Service Lifecycle
//!
//! Start and stop the whole service through `ServiceRuntime` and check
//! what is visible in the debug filesystem at each point.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use kc_01_identity_registry::RegistryConfig;
    use kc_02_shared_buffer::SharedBufferApi;
    use kc_04_debugfs::VirtualFs;
    use service_runtime::{ServiceConfig, ServiceError, ServiceRuntime};
    use tokio::sync::oneshot;
    use tokio::time::timeout;

    fn runtime(config: ServiceConfig) -> (Arc<VirtualFs>, ServiceRuntime) {
        let fs = Arc::new(VirtualFs::new());
        let runtime = ServiceRuntime::new(config, Arc::clone(&fs));
        (fs, runtime)
    }

    #[test]
    fn test_start_then_stop_leaves_empty_tree() {
        let (fs, mut runtime) = runtime(ServiceConfig::for_testing());

        runtime.start().unwrap();
        assert_eq!(fs.list("/kernelcare").unwrap(), vec!["data", "jiffies"]);

        let context = runtime.context().unwrap();
        assert!(context.registry().is_empty());
        assert_eq!(context.buffer().valid_len(), 0);

        assert!(runtime.stop());
        assert!(fs.list("/").unwrap().is_empty());
    }

    #[test]
    fn test_buffer_contents_do_not_survive_restart() {
        let (fs, mut runtime) = runtime(ServiceConfig::for_testing());

        runtime.start().unwrap();
        fs.open("/kernelcare/data").unwrap().write(b"persist?").unwrap();
        runtime.stop();

        runtime.start().unwrap();
        let mut file = fs.open("/kernelcare/data").unwrap();
        assert!(file.read_to_end().unwrap().is_empty());
        runtime.stop();
    }

    #[test]
    fn test_registry_exhaustion_aborts_start() {
        for budget in [0, 1] {
            let config = ServiceConfig {
                registry: RegistryConfig::with_max_identities(budget),
                ..ServiceConfig::for_testing()
            };
            let (fs, mut runtime) = runtime(config);

            assert!(matches!(runtime.start(), Err(ServiceError::Registry(_))));
            assert!(!runtime.is_running());
            assert!(fs.list("/").unwrap().is_empty());
        }
    }

    #[test]
    fn test_custom_root_dir() {
        let mut config = ServiceConfig::for_testing();
        config.vfs.root_dir = "kc-test".into();
        let (fs, mut runtime) = runtime(config);

        runtime.start().unwrap();
        assert!(fs.exists("/kc-test/data"));
        assert!(!fs.exists("/kernelcare"));
        runtime.stop();
    }

    #[test]
    fn test_occupied_root_dir_aborts_start() {
        let (fs, mut runtime) = runtime(ServiceConfig::for_testing());
        fs.create_dir("kernelcare", None).unwrap();

        assert!(matches!(runtime.start(), Err(ServiceError::Vfs(_))));
        assert!(fs.list("/kernelcare").unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_run_serves_files_until_shutdown() {
        let (fs, mut runtime) = runtime(ServiceConfig::for_testing());
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            runtime
                .run(async {
                    let _ = rx.await;
                })
                .await
        });

        timeout(Duration::from_secs(1), async {
            while !fs.exists("/kernelcare/data") {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("service did not start");

        let mut file = fs.open("/kernelcare/data").unwrap();
        file.write(b"while running").unwrap();
        file.seek(0);
        assert_eq!(file.read(64).unwrap(), b"while running");

        tx.send(()).unwrap();
        handle.await.unwrap().unwrap();

        assert!(!fs.exists("/kernelcare"));
    }
}
