//! Terminal setup and restoration

use synthesia_core::Error;
use tracing::error;

/// Restore the terminal before the default panic output is printed, so the
/// message lands on a usable screen. The panic is also written to the log
/// file, which outlives the alternate screen.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        error!("Panic: {}", panic_info);
        original_hook(panic_info);
    }));
}

/// Failure to enter raw mode or query the screen; the UI cannot start.
pub fn init_error(e: std::io::Error) -> Error {
    Error::TerminalInit(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_error_is_fatal() {
        let err = init_error(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "not a terminal",
        ));
        assert!(matches!(err, Error::TerminalInit(_)));
        assert!(err.is_fatal());
        assert!(err.to_string().contains("not a terminal"));
    }
}
