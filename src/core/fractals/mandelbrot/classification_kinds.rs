use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationKinds {
    /// 1 for escaped points, 0 for bounded ones.
    #[default]
    Binary,
    /// The iteration at which the point escaped, 0 for bounded ones.
    IterationCount,
}

impl std::fmt::Display for ClassificationKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Binary => "escaped/bounded",
            Self::IterationCount => "escape iteration",
        })
    }
}
