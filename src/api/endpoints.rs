use std::fmt;

/// Every queryable resource on the RbxStats API.
///
/// Path parameters are interpolated as-is. Callers must not pass characters
/// that need percent-encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Offsets,
    OffsetByName(String),
    OffsetsByPrefix(String),
    OffsetsCamera,
    Exploits,
    ExploitsWindows,
    ExploitsMac,
    ExploitsUndetected,
    ExploitsDetected,
    ExploitsFree,
    VersionsLatest,
    VersionsFuture,
    Game(u64),
}

impl Endpoint {
    pub fn path(&self) -> String {
        match self {
            Endpoint::Offsets => "offsets".to_string(),
            Endpoint::OffsetByName(name) => format!("offsets/search/{}", name),
            Endpoint::OffsetsByPrefix(prefix) => format!("offsets/prefix/{}", prefix),
            Endpoint::OffsetsCamera => "offsets/camera".to_string(),
            Endpoint::Exploits => "exploits".to_string(),
            Endpoint::ExploitsWindows => "exploits/windows".to_string(),
            Endpoint::ExploitsMac => "exploits/mac".to_string(),
            Endpoint::ExploitsUndetected => "exploits/undetected".to_string(),
            Endpoint::ExploitsDetected => "exploits/detected".to_string(),
            Endpoint::ExploitsFree => "exploits/free".to_string(),
            Endpoint::VersionsLatest => "versions/latest".to_string(),
            Endpoint::VersionsFuture => "versions/future".to_string(),
            Endpoint::Game(id) => format!("game/{}", id),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
