use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum ObjectKind {
    Unknown = 0,
    Document = 1,
    Folder = 2,
    Text = 3,
    Package = 4,
    Image = 5,
    Audio = 6,
    Video = 7,
    Archive = 8,
    Executable = 9,
    Alias = 10,
    Encrypted = 11,
    Key = 12,
    Link = 13,
    WebPageArchive = 14,
    Widget = 15,
    Album = 16,
    Collection = 17,
    Font = 18,
    Mesh = 19,
    Code = 20,
    Database = 21,
    Book = 22,
    Config = 23,
    Dotfile = 24,
    Screenshot = 25,
    Label = 26,
}

impl ObjectKind {
    /// Kinds arrive as raw integers from the index; anything unrecognised is `Unknown`.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::Document,
            2 => Self::Folder,
            3 => Self::Text,
            4 => Self::Package,
            5 => Self::Image,
            6 => Self::Audio,
            7 => Self::Video,
            8 => Self::Archive,
            9 => Self::Executable,
            10 => Self::Alias,
            11 => Self::Encrypted,
            12 => Self::Key,
            13 => Self::Link,
            14 => Self::WebPageArchive,
            15 => Self::Widget,
            16 => Self::Album,
            17 => Self::Collection,
            18 => Self::Font,
            19 => Self::Mesh,
            20 => Self::Code,
            21 => Self::Database,
            22 => Self::Book,
            23 => Self::Config,
            24 => Self::Dotfile,
            25 => Self::Screenshot,
            26 => Self::Label,
            _ => Self::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Document => "Document",
            Self::Folder => "Folder",
            Self::Text => "Text",
            Self::Package => "Package",
            Self::Image => "Image",
            Self::Audio => "Audio",
            Self::Video => "Video",
            Self::Archive => "Archive",
            Self::Executable => "Executable",
            Self::Alias => "Alias",
            Self::Encrypted => "Encrypted",
            Self::Key => "Key",
            Self::Link => "Link",
            Self::WebPageArchive => "WebPageArchive",
            Self::Widget => "Widget",
            Self::Album => "Album",
            Self::Collection => "Collection",
            Self::Font => "Font",
            Self::Mesh => "Mesh",
            Self::Code => "Code",
            Self::Database => "Database",
            Self::Book => "Book",
            Self::Config => "Config",
            Self::Dotfile => "Dotfile",
            Self::Screenshot => "Screenshot",
            Self::Label => "Label",
        }
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
