use serde::Serialize;

use crate::error::{Result, StyleError};
use crate::styles::{
    BwFilm, BwFilmStyle, CinematicStyle, CompoundStyleName, CrossProcessStrength,
    CrossProcessStyle, FilmStock, InstantEra, InstantStyle, OriginalFrame, PolaroidFrame,
    RetroDecade, RetroStyle, Style, StyleKind, SymmetricFrame, VintageStyle,
};

type StyleFactory = Box<dyn Fn() -> Box<dyn Style> + Send + Sync>;

/// Ordered catalog of one kind of style
///
/// Keys keep their registration order and are matched exactly
/// (case-sensitive).
pub struct StyleCatalog {
    kind: StyleKind,
    entries: Vec<(String, StyleFactory)>,
}

impl StyleCatalog {
    /// Create an empty catalog
    pub fn new(kind: StyleKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    /// Register a style
    ///
    /// # Arguments
    ///
    /// * `name` - Unique key for the style
    /// * `factory` - Function that creates new instances of the style
    pub fn register<F>(&mut self, name: &str, factory: F) -> Result<()>
    where
        F: Fn() -> Box<dyn Style> + Send + Sync + 'static,
    {
        if name.is_empty() {
            return Err(StyleError::InvalidKey {
                key: name.to_string(),
                reason: "keys cannot be empty".to_string(),
            }.into());
        }
        if self.kind == StyleKind::Frame && name.contains('_') {
            return Err(StyleError::InvalidKey {
                key: name.to_string(),
                reason: "frame keys cannot contain '_'".to_string(),
            }.into());
        }
        if self.has_style(name) {
            return Err(StyleError::InvalidKey {
                key: name.to_string(),
                reason: "key is already registered".to_string(),
            }.into());
        }

        self.entries.push((name.to_string(), Box::new(factory)));
        Ok(())
    }

    /// Get a new instance of the style registered under `name`
    pub fn get_style(&self, name: &str) -> Option<Box<dyn Style>> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, factory)| factory())
    }

    /// All keys in registration order
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|(key, _)| key.clone()).collect()
    }

    /// Check if a style is available
    pub fn has_style(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    pub fn kind(&self) -> StyleKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Key lists of both catalogs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportedStyles {
    pub frames: Vec<String>,
    pub effects: Vec<String>,
}

/// A frame recipe and an optional color recipe resolved from a compound name
pub struct ResolvedStyle {
    pub name: CompoundStyleName,
    pub frame: Box<dyn Style>,
    pub color: Option<Box<dyn Style>>,
}

/// Registry holding the frame and color catalogs
///
/// Built once and then only read; it is `Sync`, so batch workers share it.
pub struct StyleRegistry {
    frames: StyleCatalog,
    colors: StyleCatalog,
}

impl StyleRegistry {
    /// Create a new style registry with all built-in styles
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_builtin_frames();
        registry.register_builtin_colors();
        registry
    }

    /// Registry with no styles at all
    pub fn empty() -> Self {
        Self {
            frames: StyleCatalog::new(StyleKind::Frame),
            colors: StyleCatalog::new(StyleKind::Color),
        }
    }

    fn register_builtin_frames(&mut self) {
        let builtin: [(&str, fn() -> Box<dyn Style>); 3] = [
            ("original", || Box::new(OriginalFrame::new())),
            ("polaroid", || Box::new(PolaroidFrame::new())),
            ("symmetric", || Box::new(SymmetricFrame::new())),
        ];
        for (name, factory) in builtin {
            let factory: StyleFactory = Box::new(factory);
            self.frames.entries.push((name.to_string(), factory));
        }
    }

    fn register_builtin_colors(&mut self) {
        let builtin: [(&str, fn() -> Box<dyn Style>); 16] = [
            ("vintage", || Box::new(VintageStyle::new())),
            ("bw_classic", || Box::new(BwFilmStyle::new(BwFilm::Classic))),
            ("bw_high_contrast", || Box::new(BwFilmStyle::new(BwFilm::HighContrast))),
            ("bw_soft", || Box::new(BwFilmStyle::new(BwFilm::Soft))),
            ("instant_70s", || Box::new(InstantStyle::new(InstantEra::Seventies))),
            ("instant_80s", || Box::new(InstantStyle::new(InstantEra::Eighties))),
            ("instant_90s", || Box::new(InstantStyle::new(InstantEra::Nineties))),
            ("cross_process", || Box::new(CrossProcessStyle::new(CrossProcessStrength::Process))),
            ("cross_light", || Box::new(CrossProcessStyle::new(CrossProcessStrength::Light))),
            ("cross_strong", || Box::new(CrossProcessStyle::new(CrossProcessStrength::Strong))),
            ("cinematic_kodak", || Box::new(CinematicStyle::new(FilmStock::Kodak))),
            ("cinematic_fuji", || Box::new(CinematicStyle::new(FilmStock::Fuji))),
            ("cinematic_vision3", || Box::new(CinematicStyle::new(FilmStock::Vision3))),
            ("retro_60s", || Box::new(RetroStyle::new(RetroDecade::Sixties))),
            ("retro_70s", || Box::new(RetroStyle::new(RetroDecade::Seventies))),
            ("retro_80s", || Box::new(RetroStyle::new(RetroDecade::Eighties))),
        ];
        for (name, factory) in builtin {
            let factory: StyleFactory = Box::new(factory);
            self.colors.entries.push((name.to_string(), factory));
        }
    }

    /// Register a custom frame style; its key cannot contain `_`
    pub fn register_frame<F>(&mut self, name: &str, factory: F) -> Result<()>
    where
        F: Fn() -> Box<dyn Style> + Send + Sync + 'static,
    {
        self.frames.register(name, factory)
    }

    /// Register a custom color style
    pub fn register_color<F>(&mut self, name: &str, factory: F) -> Result<()>
    where
        F: Fn() -> Box<dyn Style> + Send + Sync + 'static,
    {
        self.colors.register(name, factory)
    }

    pub fn frames(&self) -> &StyleCatalog {
        &self.frames
    }

    pub fn colors(&self) -> &StyleCatalog {
        &self.colors
    }

    /// Get a frame style by key
    pub fn frame(&self, key: &str) -> Result<Box<dyn Style>> {
        self.frames
            .get_style(key)
            .ok_or_else(|| StyleError::UnsupportedFrame { key: key.to_string() }.into())
    }

    /// Get a color style by key
    pub fn color(&self, key: &str) -> Result<Box<dyn Style>> {
        self.colors
            .get_style(key)
            .ok_or_else(|| StyleError::UnsupportedColor { key: key.to_string() }.into())
    }

    /// Parse a compound name and look up both of its parts
    ///
    /// The color part is checked first, mirroring the order the recipes run in.
    pub fn resolve(&self, name: &str) -> Result<ResolvedStyle> {
        let name = CompoundStyleName::parse(name)?;
        let color = name.color().map(|key| self.color(key)).transpose()?;
        let frame = self.frame(name.frame())?;
        Ok(ResolvedStyle { name, frame, color })
    }

    /// Key lists of both catalogs, for validating user input up front
    pub fn supported_styles(&self) -> SupportedStyles {
        SupportedStyles {
            frames: self.frames.keys(),
            effects: self.colors.keys(),
        }
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
