use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteKinds {
    #[default]
    BlackWhite,
    FireGradient,
    BlueWhiteGradient,
}

impl std::fmt::Display for PaletteKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::BlackWhite => "black/white",
            Self::FireGradient => "fire gradient",
            Self::BlueWhiteGradient => "blue-white gradient",
        })
    }
}
