//! Icon identifiers.
//!
//! The data tables name icons by their lucide identifier. The set is fixed,
//! so it is an enum with a static name table instead of a runtime lookup.

/// A lucide icon used somewhere on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Atom,
    Box,
    Briefcase,
    Bug,
    CheckCircle,
    Cloud,
    Code,
    Container,
    Database,
    FileCode,
    FileType,
    Github,
    Globe,
    GraduationCap,
    Hexagon,
    Image,
    ImagePlus,
    Key,
    LayoutTemplate,
    Linkedin,
    Mail,
    Monitor,
    Move3D,
    Paintbrush,
    Paintbrush2,
    Palette,
    PlugZap,
    Server,
    Settings2,
    Smartphone,
    TestTube,
    Triangle,
    Twitter,
    Wifi,
    Wrench,
    Zap,
}

impl Icon {
    /// Every icon, alphabetically.
    pub const ALL: [Icon; 36] = [
        Icon::Atom,
        Icon::Box,
        Icon::Briefcase,
        Icon::Bug,
        Icon::CheckCircle,
        Icon::Cloud,
        Icon::Code,
        Icon::Container,
        Icon::Database,
        Icon::FileCode,
        Icon::FileType,
        Icon::Github,
        Icon::Globe,
        Icon::GraduationCap,
        Icon::Hexagon,
        Icon::Image,
        Icon::ImagePlus,
        Icon::Key,
        Icon::LayoutTemplate,
        Icon::Linkedin,
        Icon::Mail,
        Icon::Monitor,
        Icon::Move3D,
        Icon::Paintbrush,
        Icon::Paintbrush2,
        Icon::Palette,
        Icon::PlugZap,
        Icon::Server,
        Icon::Settings2,
        Icon::Smartphone,
        Icon::TestTube,
        Icon::Triangle,
        Icon::Twitter,
        Icon::Wifi,
        Icon::Wrench,
        Icon::Zap,
    ];

    /// Returns the lucide identifier.
    pub fn name(self) -> &'static str {
        match self {
            Icon::Atom => "Atom",
            Icon::Box => "Box",
            Icon::Briefcase => "Briefcase",
            Icon::Bug => "Bug",
            Icon::CheckCircle => "CheckCircle",
            Icon::Cloud => "Cloud",
            Icon::Code => "Code",
            Icon::Container => "Container",
            Icon::Database => "Database",
            Icon::FileCode => "FileCode",
            Icon::FileType => "FileType",
            Icon::Github => "Github",
            Icon::Globe => "Globe",
            Icon::GraduationCap => "GraduationCap",
            Icon::Hexagon => "Hexagon",
            Icon::Image => "Image",
            Icon::ImagePlus => "ImagePlus",
            Icon::Key => "Key",
            Icon::LayoutTemplate => "LayoutTemplate",
            Icon::Linkedin => "Linkedin",
            Icon::Mail => "Mail",
            Icon::Monitor => "Monitor",
            Icon::Move3D => "Move3D",
            Icon::Paintbrush => "Paintbrush",
            Icon::Paintbrush2 => "Paintbrush2",
            Icon::Palette => "Palette",
            Icon::PlugZap => "PlugZap",
            Icon::Server => "Server",
            Icon::Settings2 => "Settings2",
            Icon::Smartphone => "Smartphone",
            Icon::TestTube => "TestTube",
            Icon::Triangle => "Triangle",
            Icon::Twitter => "Twitter",
            Icon::Wifi => "Wifi",
            Icon::Wrench => "Wrench",
            Icon::Zap => "Zap",
        }
    }

    /// Looks up an icon by its lucide identifier.
    pub fn from_name(name: &str) -> Option<Icon> {
        Self::ALL.into_iter().find(|icon| icon.name() == name)
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
