use once_cell::sync::Lazy;

use crate::geometry::FrameSize;

static SHARED: Lazy<ScreenSizeTable> = Lazy::new(ScreenSizeTable::builtin);

/// One emulated device screen: a title plus its portrait dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenSizePreset {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl ScreenSizePreset {
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            title: title.into(),
            width,
            height,
        }
    }

    pub fn size(&self) -> FrameSize {
        FrameSize::new(self.width, self.height)
    }
}

/// Immutable table of the screen sizes the simulator knows how to emulate.
///
/// Lookups are plain functions over the table, so a custom table built
/// with [`ScreenSizeTable::from_presets`] behaves exactly like the
/// built-in one.
#[derive(Clone, Debug)]
pub struct ScreenSizeTable {
    presets: Vec<ScreenSizePreset>,
}

impl ScreenSizeTable {
    /// The built-in device presets, portrait orientation.
    ///
    /// Order is part of the contract: [`ScreenSizeTable::find`] returns
    /// the first match.
    pub fn builtin() -> Self {
        Self::from_presets(vec![
            ScreenSizePreset::new("iPhone 3GS", 320, 480),
            ScreenSizePreset::new("iPhone 4", 640, 960),
            ScreenSizePreset::new("iPhone 5", 640, 1136),
            ScreenSizePreset::new("iPad", 768, 1024),
            ScreenSizePreset::new("iPad Retina", 1536, 2048),
            ScreenSizePreset::new("Android (WVGA)", 480, 800),
            ScreenSizePreset::new("Android (FWVGA)", 480, 854),
            ScreenSizePreset::new("Android (qHD)", 540, 960),
            ScreenSizePreset::new("Android (HD)", 720, 1280),
            ScreenSizePreset::new("Android (WXGA)", 800, 1280),
        ])
    }

    pub fn from_presets(presets: Vec<ScreenSizePreset>) -> Self {
        Self { presets }
    }

    /// Process-wide built-in table, constructed once on first access.
    pub fn shared() -> &'static ScreenSizeTable {
        &SHARED
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ScreenSizePreset> {
        self.presets.get(index)
    }

    /// Index of the first preset whose dimensions match `size` exactly.
    pub fn find(&self, size: FrameSize) -> Option<usize> {
        self.presets
            .iter()
            .position(|preset| preset.width == size.width && preset.height == size.height)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScreenSizePreset> {
        self.presets.iter()
    }
}
