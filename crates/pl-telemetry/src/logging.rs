//! Structured logging helpers.
//!
//! Every PatternLabs event carries a `component` field (`nav`, `demo`,
//! `shell`, ...) so the log file can be filtered per concern.

/// Helper to create structured log entries with consistent formatting.
#[macro_export]
macro_rules! log_event {
    // Info level with component
    (info, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };

    // Warn level with component
    (warn, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::warn!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };

    // Error level with component
    (error, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::error!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };

    // Debug level with component
    (debug, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::debug!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };
}

/// Log a demo lifecycle or interaction event with the pattern id attached.
#[macro_export]
macro_rules! log_demo_event {
    ($level:ident, $pattern:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = "demo",
            pattern = %$pattern,
            $($($field)*,)?
            $msg
        )
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_macros_expand_without_subscriber() {
        crate::log_event!(info, "shell", "plain message");
        crate::log_event!(debug, "nav", "with fields", from = "singleton", to = "proxy");
        crate::log_demo_event!(debug, "proxy", "request blocked", recent = 3);
    }
}
