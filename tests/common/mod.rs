#![allow(dead_code)]

pub mod access_log {
    use parking_lot::Mutex;
    use std::sync::Arc;
    use waypost::dispatcher::RouterBuilder;
    use waypost::server::Request;

    /// Collects `(status, path)` pairs handed to the access-log callback.
    #[derive(Clone, Default)]
    pub struct LogRecorder {
        entries: Arc<Mutex<Vec<(u16, String)>>>,
    }

    impl LogRecorder {
        pub fn new() -> Self {
            Self::default()
        }

        /// Install this recorder as the builder's access log.
        pub fn install(&self, builder: &mut RouterBuilder) {
            let entries = Arc::clone(&self.entries);
            builder.log_with(move |status, req: &Request| {
                entries.lock().push((status, req.path.clone()));
            });
        }

        pub fn entries(&self) -> Vec<(u16, String)> {
            self.entries.lock().clone()
        }
    }
}

pub mod calls {
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Ordered record of which filters/handlers ran.
    #[derive(Clone, Default)]
    pub struct CallLog {
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl CallLog {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn push(&self, name: &str) {
            self.calls.lock().push(name.to_string());
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().clone()
        }
    }
}
