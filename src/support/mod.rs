pub mod shutdown;

pub use shutdown::{install_signal_listener, listen_for_shutdown_signals, ShutdownSignal};
