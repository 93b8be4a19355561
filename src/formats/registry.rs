use super::types::SubtitleFormat;
use crate::parsers::{
    AqTitleParser, CueParser, DvdSubtitleParser, JacoSubParser, MicroDvdParser, MpSubParser,
    Mpl2Parser, PjsParser, SamiParser, SsaParser, SubRipParser, SubViewerParser, VPlayerParser,
};

/// One row of the format table
pub struct FormatDescriptor {
    pub format: SubtitleFormat,
    /// Name accepted when forcing a format
    pub type_name: &'static str,
    /// Human readable name used in logs
    pub name: &'static str,
    pub parser: &'static dyn CueParser,
}

impl std::fmt::Debug for FormatDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatDescriptor")
            .field("format", &self.format)
            .field("type_name", &self.type_name)
            .field("name", &self.name)
            .finish()
    }
}

/// Every supported format, in the order they are listed to users
pub static FORMAT_REGISTRY: [FormatDescriptor; 14] = [
    FormatDescriptor {
        format: SubtitleFormat::MicroDvd,
        type_name: "microdvd",
        name: "MicroDVD",
        parser: &MicroDvdParser,
    },
    FormatDescriptor {
        format: SubtitleFormat::SubRip,
        type_name: "subrip",
        name: "SubRIP",
        parser: &SubRipParser,
    },
    FormatDescriptor {
        format: SubtitleFormat::SubViewer,
        type_name: "subviewer",
        name: "SubViewer",
        parser: &SubViewerParser,
    },
    FormatDescriptor {
        format: SubtitleFormat::Ssa1,
        type_name: "ssa1",
        name: "SSA-1",
        parser: &SsaParser,
    },
    FormatDescriptor {
        format: SubtitleFormat::Ssa2To4,
        type_name: "ssa2-4",
        name: "SSA-2/3/4",
        parser: &SsaParser,
    },
    FormatDescriptor {
        format: SubtitleFormat::Ass,
        type_name: "ass",
        name: "SSA/ASS",
        parser: &SsaParser,
    },
    FormatDescriptor {
        format: SubtitleFormat::VPlayer,
        type_name: "vplayer",
        name: "VPlayer",
        parser: &VPlayerParser,
    },
    FormatDescriptor {
        format: SubtitleFormat::Sami,
        type_name: "sami",
        name: "SAMI",
        parser: &SamiParser,
    },
    FormatDescriptor {
        format: SubtitleFormat::DvdSubtitle,
        type_name: "dvdsubtitle",
        name: "DVDSubtitle",
        parser: &DvdSubtitleParser,
    },
    FormatDescriptor {
        format: SubtitleFormat::Mpl2,
        type_name: "mpl2",
        name: "MPL2",
        parser: &Mpl2Parser,
    },
    FormatDescriptor {
        format: SubtitleFormat::AqTitle,
        type_name: "aqt",
        name: "AQTitle",
        parser: &AqTitleParser,
    },
    FormatDescriptor {
        format: SubtitleFormat::Pjs,
        type_name: "pjs",
        name: "PhoenixSub",
        parser: &PjsParser,
    },
    FormatDescriptor {
        format: SubtitleFormat::MpSub,
        type_name: "mpsub",
        name: "MPSub",
        parser: &MpSubParser,
    },
    FormatDescriptor {
        format: SubtitleFormat::JacoSub,
        type_name: "jacosub",
        name: "JacoSub",
        parser: &JacoSubParser,
    },
];

/// Find a descriptor by its type name (case-insensitive)
pub fn lookup(type_name: &str) -> Option<&'static FormatDescriptor> {
    FORMAT_REGISTRY
        .iter()
        .find(|d| d.type_name.eq_ignore_ascii_case(type_name))
}

impl SubtitleFormat {
    pub fn descriptor(&self) -> &'static FormatDescriptor {
        // Each variant has exactly one row, checked by the registry tests
        FORMAT_REGISTRY
            .iter()
            .find(|d| d.format == *self)
            .unwrap_or(&FORMAT_REGISTRY[0])
    }

    pub fn name(&self) -> &'static str {
        self.descriptor().name
    }

    pub fn type_name(&self) -> &'static str {
        self.descriptor().type_name
    }

    pub fn parser(&self) -> &'static dyn CueParser {
        self.descriptor().parser
    }
}
