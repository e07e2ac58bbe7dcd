//! The closed set of rebuild actions rui knows how to route.
//!
//! Each action carries its canonical subcommand name (what the backing tool
//! is invoked with), a past-tense verb for notifications, and whether nh
//! supports it. Everything here is an exhaustive match so adding a variant
//! forces every call site to handle it.

/// A rebuild action understood by the home and OS routers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Switch,
    Boot,
    Test,
    Build,
    DryActivate,
    BuildVm,
    Instantiate,
    Generations,
    Packages,
}

impl Action {
    /// Every catalog entry (used in tests)
    #[allow(dead_code)]
    pub const ALL: [Self; 9] = [
        Self::Switch,
        Self::Boot,
        Self::Test,
        Self::Build,
        Self::DryActivate,
        Self::BuildVm,
        Self::Instantiate,
        Self::Generations,
        Self::Packages,
    ];

    /// Canonical subcommand name passed to the backing tool.
    pub fn name(self) -> &'static str {
        match self {
            Self::Switch => "switch",
            Self::Boot => "boot",
            Self::Test => "test",
            Self::Build => "build",
            Self::DryActivate => "dry-activate",
            Self::BuildVm => "build-vm",
            Self::Instantiate => "instantiate",
            Self::Generations => "generations",
            Self::Packages => "packages",
        }
    }

    /// Past-tense verb used in success notifications.
    pub fn verb(self) -> &'static str {
        match self {
            Self::Switch => "switched",
            Self::Boot => "booted",
            Self::Test => "tested",
            Self::Build => "built",
            Self::DryActivate => "dry activated",
            Self::BuildVm => "VM built",
            Self::Instantiate => "instantiated",
            Self::Generations => "generations listed",
            Self::Packages => "packages shown",
        }
    }

    /// Whether nh can run this action; everything else falls back to the
    /// native tool even when nh is installed.
    pub fn nh_supported(self) -> bool {
        matches!(self, Self::Switch | Self::Build)
    }
}
