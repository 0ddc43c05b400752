use crate::Result;

/// Install a `tracing` subscriber for binaries that use this library.
///
/// Without the `subscriber` feature this is a no-op and events go to whatever
/// subscriber the host application set up.
pub fn init(service_name: &str) -> Result<()> {
    let _ = service_name;

    #[cfg(feature = "subscriber")]
    {
        use tracing_subscriber::{fmt, EnvFilter};

        // Default: info for our crates. Can be overridden with `RUST_LOG`.
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "warn,tgs=info,tgs_core=info,tgs_http=info,{service_name}=info"
            ))
        });

        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
            .map_err(|e| crate::Error::Config(format!("logging init failed: {e}")))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_succeeds_once() {
        assert!(init("tgs-test").is_ok());
    }
}
