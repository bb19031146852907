//! # Concurrency Scenarios
//!
//! Mixed readers and writers over the shared buffer, through the file
//! layer and directly, with the tick file read alongside.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use kc_02_shared_buffer::{BufferConfig, SharedBuffer, SharedBufferApi};
    use kc_04_debugfs::VirtualFs;
    use rand::Rng;
    use service_runtime::{ServiceConfig, ServiceContext};

    /// Payload whose length and fill byte determine each other, so a torn
    /// read is detectable.
    fn payload(seed: u8) -> Vec<u8> {
        vec![seed; 16 + seed as usize]
    }

    fn assert_whole(content: &[u8]) {
        if let Some(&seed) = content.first() {
            assert_eq!(content, payload(seed).as_slice());
        }
    }

    #[test]
    fn test_writers_and_readers_never_tear() {
        let buffer = Arc::new(SharedBuffer::allocate(&BufferConfig::default()).unwrap());

        let writers: Vec<_> = (0..2)
            .map(|_| {
                let buffer = Arc::clone(&buffer);
                thread::spawn(move || {
                    let mut rng = rand::thread_rng();
                    for _ in 0..1_000 {
                        let mut pos = 0;
                        buffer.write(&mut pos, &payload(rng.gen()));
                    }
                })
            })
            .collect();

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let buffer = Arc::clone(&buffer);
                thread::spawn(move || {
                    for _ in 0..1_000 {
                        let mut pos = 0;
                        assert_whole(&buffer.read(&mut pos, 512));
                    }
                })
            })
            .collect();

        for handle in writers.into_iter().chain(readers) {
            handle.join().unwrap();
        }
    }

    #[test]
    fn test_file_layer_under_load() {
        let fs = Arc::new(VirtualFs::new());
        let context = ServiceContext::start(Arc::clone(&fs), ServiceConfig::for_testing()).unwrap();
        let data = context.file_path("data");
        let jiffies = context.file_path("jiffies");

        let writer = {
            let fs = Arc::clone(&fs);
            let data = data.clone();
            thread::spawn(move || {
                for seed in 0..=200u8 {
                    fs.open(&data).unwrap().write(&payload(seed)).unwrap();
                }
            })
        };

        let readers: Vec<_> = (0..3)
            .map(|_| {
                let fs = Arc::clone(&fs);
                let data = data.clone();
                let jiffies = jiffies.clone();
                thread::spawn(move || {
                    let mut last_tick = 0u64;
                    for _ in 0..300 {
                        assert_whole(&fs.open(&data).unwrap().read(512).unwrap());

                        let text = fs.open(&jiffies).unwrap().read(32).unwrap();
                        let tick: u64 = std::str::from_utf8(&text)
                            .unwrap()
                            .trim_end()
                            .parse()
                            .unwrap();
                        assert!(tick >= last_tick);
                        last_tick = tick;
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }

        context.stop();
    }
}
