use crate::errors::SubDemuxError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Text subtitle format understood by the demuxer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubtitleFormat {
    #[serde(rename = "microdvd")]
    MicroDvd,
    #[serde(rename = "subrip")]
    SubRip,
    #[serde(rename = "subviewer")]
    SubViewer,
    #[serde(rename = "ssa1")]
    Ssa1,
    #[serde(rename = "ssa2-4")]
    Ssa2To4,
    #[serde(rename = "ass")]
    Ass,
    #[serde(rename = "vplayer")]
    VPlayer,
    #[serde(rename = "sami")]
    Sami,
    #[serde(rename = "dvdsubtitle")]
    DvdSubtitle,
    #[serde(rename = "mpl2")]
    Mpl2,
    #[serde(rename = "aqt")]
    AqTitle,
    #[serde(rename = "pjs")]
    Pjs,
    #[serde(rename = "mpsub")]
    MpSub,
    #[serde(rename = "jacosub")]
    JacoSub,
}

impl SubtitleFormat {
    /// Script formats that keep non-dialogue lines as an out-of-band header.
    pub fn is_ssa_family(&self) -> bool {
        matches!(
            self,
            SubtitleFormat::Ssa1 | SubtitleFormat::Ssa2To4 | SubtitleFormat::Ass
        )
    }

    /// Payload kind handed to the downstream decoder.
    pub fn codec(&self) -> CueCodec {
        if self.is_ssa_family() {
            CueCodec::Ssa
        } else {
            CueCodec::Text
        }
    }
}

/// Payload kind of emitted cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CueCodec {
    /// SSA/ASS event lines (`ReadOrder,Layer,Style,...,Text`)
    Ssa,
    /// Plain text, newline separated
    Text,
}

impl CueCodec {
    pub fn fourcc(&self) -> [u8; 4] {
        match self {
            CueCodec::Ssa => *b"ssa ",
            CueCodec::Text => *b"subt",
        }
    }
}

/// Format requested by the caller: sniff the content or force one parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum FormatSelection {
    #[default]
    Auto,
    Forced(SubtitleFormat),
}

impl FromStr for FormatSelection {
    type Err = SubDemuxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() || name.eq_ignore_ascii_case("auto") {
            return Ok(FormatSelection::Auto);
        }
        super::registry::lookup(name)
            .map(|descriptor| FormatSelection::Forced(descriptor.format))
            .ok_or_else(|| SubDemuxError::UnknownFormat(name.to_string()))
    }
}

impl TryFrom<String> for FormatSelection {
    type Error = SubDemuxError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for FormatSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatSelection::Auto => write!(f, "auto"),
            FormatSelection::Forced(format) => write!(f, "{}", format.type_name()),
        }
    }
}

impl fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
