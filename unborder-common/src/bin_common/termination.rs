use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use signal_hook::{consts::signal::*, flag};

/// Set by the first SIGINT or SIGTERM. No new images should be started after that, but the
/// ones in progress are allowed to finish and be saved. A second signal kills the process.
#[derive(Clone, Debug)]
pub struct Cookie {
    stop: Arc<AtomicBool>,
}

impl Cookie {
    pub fn new() -> Result<Self, std::io::Error> {
        let stop = Arc::new(AtomicBool::new(false));

        for signal in [SIGINT, SIGTERM] {
            // The kill check has to run before the flag is set, so it must be registered first
            flag::register_conditional_default(signal, Arc::clone(&stop))?;
            flag::register(signal, Arc::clone(&stop))?;
        }

        Ok(Self { stop })
    }

    pub fn is_terminating(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }
}
