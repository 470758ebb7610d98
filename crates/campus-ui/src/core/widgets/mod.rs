//! DOM-free models behind the synthetic select and radio widgets.

pub mod dropdown;
pub mod radio;

/// Attribute marking a native control that already has a synthetic widget.
pub const ENHANCED_ATTR: &str = "data-enhanced";

/// Kind of synthetic widget, stored as the [`ENHANCED_ATTR`] value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetKind {
    /// Custom dropdown for a `<select>`.
    Dropdown,
    /// Custom indicator for a radio input.
    Radio,
}

impl WidgetKind {
    /// Marker value written to [`ENHANCED_ATTR`].
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Dropdown => "dropdown",
            Self::Radio => "radio",
        }
    }
}

/// Counts collected by one page scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SynthesisReport {
    /// Selects wrapped in this scan.
    pub dropdowns: usize,
    /// Radios wrapped in this scan.
    pub radios: usize,
    /// Controls skipped because they were already enhanced.
    pub skipped: usize,
    /// Controls left native because synthesis failed.
    pub failed: usize,
}

impl SynthesisReport {
    /// Record the outcome for one control.
    pub fn record(&mut self, kind: WidgetKind, outcome: ScanOutcome) {
        match (outcome, kind) {
            (ScanOutcome::Synthesized, WidgetKind::Dropdown) => self.dropdowns += 1,
            (ScanOutcome::Synthesized, WidgetKind::Radio) => self.radios += 1,
            (ScanOutcome::AlreadyEnhanced, _) => self.skipped += 1,
            (ScanOutcome::Failed, _) => self.failed += 1,
        }
    }
}

/// Result of visiting one control during a scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanOutcome {
    /// A widget was built.
    Synthesized,
    /// The control carried [`ENHANCED_ATTR`] and was left alone.
    AlreadyEnhanced,
    /// Building the widget failed; the native control is untouched.
    Failed,
}

/// Decide whether a control should be synthesized from its marker attribute.
#[must_use]
pub fn should_synthesize(marker: Option<&str>) -> bool {
    marker.is_none()
}
