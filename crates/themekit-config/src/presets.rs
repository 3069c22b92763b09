//! Built-in palette presets.
//!
//! Each preset pairs a light and a dark palette under one id.

use themekit_common::{ColorPalette, HexColor, PaletteColors};

/// Built-in preset ids, in display order.
pub const BUILT_IN_PRESETS: &[&str] = &[
    "default",
    "nord",
    "dracula",
    "solarized",
    "gruvbox",
    "one-dark",
];

#[derive(Debug, Clone, PartialEq)]
pub struct PalettePreset {
    pub id: &'static str,
    pub name: &'static str,
    pub light: ColorPalette,
    pub dark: ColorPalette,
}

impl PalettePreset {
    pub fn palette(&self, dark: bool) -> &ColorPalette {
        if dark {
            &self.dark
        } else {
            &self.light
        }
    }
}

struct PresetDef {
    id: &'static str,
    name: &'static str,
    light_name: &'static str,
    light: PaletteColors,
    dark_name: &'static str,
    dark: PaletteColors,
}

const fn hex(v: u32) -> HexColor {
    HexColor::from_rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

/// primary, secondary, background, surface, text, text_muted, border
const fn colors(c: [u32; 7]) -> PaletteColors {
    PaletteColors {
        primary: hex(c[0]),
        secondary: hex(c[1]),
        background: hex(c[2]),
        surface: hex(c[3]),
        text: hex(c[4]),
        text_muted: hex(c[5]),
        border: hex(c[6]),
    }
}

const PRESETS: &[PresetDef] = &[
    PresetDef {
        id: "default",
        name: "Default",
        light_name: "Default Light",
        light: colors([
            0x137cbd, 0xd9822b, 0xffffff, 0xf5f8fa, 0x182026, 0x5c7080, 0xd8e1e8,
        ]),
        dark_name: "Default Dark",
        dark: colors([
            0x48aff0, 0xffb366, 0x1c2127, 0x252a31, 0xf5f8fa, 0xa7b6c2, 0x394b59,
        ]),
    },
    PresetDef {
        id: "nord",
        name: "Nord",
        light_name: "Nord Light",
        light: colors([
            0x5e81ac, 0xbf616a, 0xeceff4, 0xe5e9f0, 0x2e3440, 0x4c566a, 0xd8dee9,
        ]),
        dark_name: "Nord Dark",
        dark: colors([
            0x88c0d0, 0xbf616a, 0x2e3440, 0x3b4252, 0xeceff4, 0xd8dee9, 0x4c566a,
        ]),
    },
    PresetDef {
        id: "dracula",
        name: "Dracula",
        light_name: "Dracula Light",
        light: colors([
            0x9580ff, 0xff80bf, 0xf8f8f2, 0xf0f0e8, 0x282a36, 0x6272a4, 0xd0d0c8,
        ]),
        dark_name: "Dracula Dark",
        dark: colors([
            0xbd93f9, 0xff79c6, 0x282a36, 0x44475a, 0xf8f8f2, 0x6272a4, 0x44475a,
        ]),
    },
    PresetDef {
        id: "solarized",
        name: "Solarized",
        light_name: "Solarized Light",
        light: colors([
            0x268bd2, 0xd33682, 0xfdf6e3, 0xeee8d5, 0x657b83, 0x93a1a1, 0xeee8d5,
        ]),
        dark_name: "Solarized Dark",
        dark: colors([
            0x268bd2, 0xd33682, 0x002b36, 0x073642, 0x839496, 0x586e75, 0x073642,
        ]),
    },
    PresetDef {
        id: "gruvbox",
        name: "Gruvbox",
        light_name: "Gruvbox Light",
        light: colors([
            0x458588, 0xd65d0e, 0xfbf1c7, 0xebdbb2, 0x3c3836, 0x665c54, 0xd5c4a1,
        ]),
        dark_name: "Gruvbox Dark",
        dark: colors([
            0x83a598, 0xfe8019, 0x282828, 0x3c3836, 0xebdbb2, 0xa89984, 0x504945,
        ]),
    },
    PresetDef {
        id: "one-dark",
        name: "One Dark",
        light_name: "One Light",
        light: colors([
            0x4078f2, 0xa626a4, 0xfafafa, 0xf0f0f0, 0x383a42, 0xa0a1a7, 0xe5e5e6,
        ]),
        dark_name: "One Dark",
        dark: colors([
            0x61afef, 0xc678dd, 0x282c34, 0x21252b, 0xabb2bf, 0x5c6370, 0x3e4451,
        ]),
    },
];

impl PresetDef {
    fn build(&self) -> PalettePreset {
        PalettePreset {
            id: self.id,
            name: self.name,
            light: ColorPalette::new(self.light_name, self.light),
            dark: ColorPalette::new(self.dark_name, self.dark),
        }
    }
}

/// All built-in presets in display order.
pub fn palette_presets() -> Vec<PalettePreset> {
    PRESETS.iter().map(PresetDef::build).collect()
}

/// Look up a built-in preset by id.
pub fn preset_by_id(id: &str) -> Option<PalettePreset> {
    PRESETS.iter().find(|p| p.id == id).map(PresetDef::build)
}
