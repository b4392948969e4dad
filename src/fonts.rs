use ab_glyph::FontArc;

use crate::settings::FontFamily;

/// Fonts usable for compositing text onto the surface.
///
/// The bytes come from egui's embedded default fonts, so the crate ships no
/// font files of its own. Families that fail to load are simply absent and
/// the text tool logs and skips the commit.
pub struct FontBook {
    sans: Option<FontArc>,
    mono: Option<FontArc>,
}

impl FontBook {
    /// Build the book from egui's default font definitions.
    pub fn from_egui_defaults() -> Self {
        let defs = egui::FontDefinitions::default();
        let load = |family: &egui::FontFamily| -> Option<FontArc> {
            for name in defs.families.get(family)? {
                if let Some(data) = defs.font_data.get(name) {
                    match FontArc::try_from_vec(data.font.to_vec()) {
                        Ok(font) => return Some(font),
                        Err(err) => {
                            log::debug!("skipping embedded font {name}: {err}");
                        }
                    }
                }
            }
            None
        };
        let sans = load(&egui::FontFamily::Proportional);
        let mono = load(&egui::FontFamily::Monospace);
        if sans.is_none() {
            log::warn!("no proportional font available, text commits will be skipped");
        }
        if mono.is_none() {
            log::warn!("no monospace font available, text commits will be skipped");
        }
        Self { sans, mono }
    }

    /// An empty book, for hosts that never use the text tool.
    pub fn empty() -> Self {
        Self {
            sans: None,
            mono: None,
        }
    }

    pub fn get(&self, family: FontFamily) -> Option<&FontArc> {
        match family {
            FontFamily::SansSerif => self.sans.as_ref(),
            FontFamily::Monospace => self.mono.as_ref(),
        }
    }
}
