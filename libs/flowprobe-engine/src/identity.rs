use uuid::Uuid;

/// Client and consumer-group identity for one stream session.
///
/// Derived from the local hostname so broker-side logs point back at the
/// machine running the probe. A random suffix keeps concurrent runs that
/// share a broker out of each other's consumer group.
#[derive(Debug, Clone)]
pub struct SubscriberIdentity {
    pub client_id: String,
    pub group_id: String,
}

impl SubscriberIdentity {
    /// Resolve the identity for a new session.
    ///
    /// Hostname resolution failure is recovered locally: the identity falls
    /// back to a purely random token and a warning is logged.
    pub fn resolve() -> Self {
        let base = match hostname::get() {
            Ok(name) => name.to_string_lossy().into_owned(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to resolve local hostname, using random client id");
                Uuid::new_v4().to_string()
            }
        };
        Self::from_base(&base)
    }

    fn from_base(base: &str) -> Self {
        let suffix = Uuid::new_v4().simple().to_string();
        let id = format!("{base}-{}", &suffix[..8]);
        Self {
            client_id: id.clone(),
            group_id: id,
        }
    }
}
