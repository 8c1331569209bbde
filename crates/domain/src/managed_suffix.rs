use std::fmt;

/// The zone this server is authoritative for, e.g. `docker`.
///
/// Matching is done against names exactly as they arrive on the wire
/// (fully qualified, trailing dot, original case).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedSuffix {
    tld: String,
    dotted: String,
}

impl ManagedSuffix {
    /// Surrounding dots are ignored, so `docker`, `.docker` and `docker.`
    /// all describe the same zone.
    pub fn new(tld: &str) -> Self {
        let tld = tld.trim().trim_matches('.').to_string();
        let dotted = format!(".{}.", tld);
        Self { tld, dotted }
    }

    pub fn tld(&self) -> &str {
        &self.tld
    }

    /// `.<tld>.`
    pub fn as_dotted(&self) -> &str {
        &self.dotted
    }

    pub fn matches(&self, fqdn: &str) -> bool {
        !self.tld.is_empty() && fqdn.ends_with(&self.dotted)
    }

    /// Strips `.<tld>.` and any trailing dot, leaving the container name.
    ///
    /// Returns `None` for names outside the zone and for the bare zone apex.
    pub fn container_name<'a>(&self, fqdn: &'a str) -> Option<&'a str> {
        if !self.matches(fqdn) {
            return None;
        }
        let name = fqdn[..fqdn.len() - self.dotted.len()].trim_end_matches('.');
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}

impl fmt::Display for ManagedSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.", self.tld)
    }
}
