/// Capability check guarding the history views.
///
/// The seam exists so the default shared-passphrase gate can be swapped for
/// a real token or session scheme without touching the handlers.
pub trait AccessGate: Send + Sync {
    fn allows(&self, presented: Option<&str>) -> bool;
}

/// Compares the presented key verbatim against one shared static secret.
/// With no secret configured, every request is denied.
pub struct SharedSecretGate {
    secret: Option<String>,
}

impl SharedSecretGate {
    pub fn new(secret: Option<String>) -> Self {
        Self { secret }
    }
}

impl AccessGate for SharedSecretGate {
    fn allows(&self, presented: Option<&str>) -> bool {
        match (self.secret.as_deref(), presented) {
            (Some(secret), Some(key)) => secret == key,
            _ => false,
        }
    }
}
